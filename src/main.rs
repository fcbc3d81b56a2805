use fltk::app;

use label_maker::app::infrastructure::logging::init_logging;
use label_maker::app::state::AppState;
use label_maker::app::{AppSettings, Message};
use label_maker::ui::main_window::build_main_window;

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Logging disabled: {}", e);
    }

    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    let widgets = build_main_window(&sender, settings.default_category);
    let mut state = AppState::new(widgets, sender, settings);
    state.show();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if !state.handle(msg) {
                app.quit();
            }
        }
    }
}
