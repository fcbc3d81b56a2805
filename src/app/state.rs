use std::path::PathBuf;

use fltk::{
    app::{self, Sender},
    dialog,
    enums::Event,
    frame::Frame,
    prelude::*,
};

use super::domain::form::LabelForm;
use super::domain::messages::Message;
use super::domain::record::{Category, LabelGroup};
use super::domain::settings::AppSettings;
use super::error::LabelError;
use super::services::assembler::DocumentAssembler;
use super::services::store::LabelStore;
use crate::ui::color_dialog::ColorDialogPicker;
use crate::ui::file_dialogs::SaveDialogPicker;
use crate::ui::main_window::MainWidgets;
use crate::ui::theme::style_swatch;

const SWATCH_HEIGHT: i32 = 30;

pub struct AppState {
    pub widgets: MainWidgets,
    pub sender: Sender<Message>,
    pub settings: AppSettings,
    pub store: LabelStore,
    pub assembler: DocumentAssembler,
    /// Last document written, for the "Open Created DOCX File" button.
    pub last_output: Option<PathBuf>,
}

impl AppState {
    pub fn new(widgets: MainWidgets, sender: Sender<Message>, settings: AppSettings) -> Self {
        let assembler = DocumentAssembler::from_settings(&settings);
        Self {
            widgets,
            sender,
            settings,
            store: LabelStore::new(),
            assembler,
            last_output: None,
        }
    }

    pub fn show(&mut self) {
        self.widgets.wind.show();
    }

    /// Handle one message. Returns false when the app should exit.
    pub fn handle(&mut self, msg: Message) -> bool {
        match msg {
            Message::AddLabel => self.add_label(),
            Message::ResetLabels => self.reset_labels(),
            Message::CreateDocument => self.create_document(),
            Message::OpenCreatedDocument => self.open_created_document(),
            Message::ChangeColor {
                order_name,
                category,
            } => self.change_color(&order_name, category),
            Message::WindowClose => return false,
        }
        true
    }

    fn read_form(&self) -> LabelForm {
        LabelForm::new(
            &self.widgets.order_input.value(),
            &self.widgets.count_input.value(),
            self.widgets.selected_category().label(),
        )
    }

    fn add_label(&mut self) {
        let result = self
            .read_form()
            .validate()
            .and_then(|request| self.store.add(&request, &mut ColorDialogPicker));

        match result {
            Ok(_) => self.rebuild_swatches(),
            Err(e) => report(&e),
        }
    }

    fn reset_labels(&mut self) {
        self.store.clear();
        self.rebuild_swatches();
        dialog::message_default("All label data has been reset!");
    }

    fn create_document(&mut self) {
        let mut picker = SaveDialogPicker {
            start_directory: self.settings.last_save_directory.clone(),
        };

        match self.assembler.create(&self.store, &mut picker) {
            Ok(path) => {
                dialog::message_default(&format!("Labels saved to {}", path.display()));
                self.remember_save_directory(&path);
                self.last_output = Some(path);
                self.widgets.open_button.show();
                self.widgets.wind.redraw();
                if self.settings.open_after_save {
                    self.open_created_document();
                }
            }
            Err(e) => report(&e),
        }
    }

    fn remember_save_directory(&mut self, path: &std::path::Path) {
        let dir = path.parent().map(|p| p.to_path_buf());
        if dir != self.settings.last_save_directory {
            self.settings.last_save_directory = dir;
            if let Err(e) = self.settings.save() {
                tracing::warn!(error = %e, "failed to save settings");
            }
        }
    }

    fn open_created_document(&self) {
        let Some(ref path) = self.last_output else {
            return;
        };
        if let Err(e) = open::that(path) {
            dialog::alert_default(&format!("Failed to open the DOCX file: {}", e));
        }
    }

    fn change_color(&mut self, order_name: &str, category: Category) {
        if self
            .store
            .recolor(order_name, category, &mut ColorDialogPicker)
            .is_some()
        {
            self.rebuild_swatches();
        }
    }

    /// Recreate the swatch list from the store.
    fn rebuild_swatches(&mut self) {
        let list = &mut self.widgets.swatch_list;
        list.clear();
        list.begin();
        for group in self.store.groups() {
            swatch(&group, self.sender);
        }
        list.end();
        self.widgets.swatch_scroll.redraw();
        app::redraw();
    }
}

fn swatch(group: &LabelGroup, sender: Sender<Message>) {
    let mut frame = Frame::default().with_size(300, SWATCH_HEIGHT);
    frame.set_label(&group.caption());
    style_swatch(&mut frame, &group.color);

    let order_name = group.order_name.clone();
    let category = group.category;
    frame.handle(move |_, ev| match ev {
        Event::Push => {
            sender.send(Message::ChangeColor {
                order_name: order_name.clone(),
                category,
            });
            true
        }
        _ => false,
    });
}

/// Blocking notification for a failed action. Nothing here is fatal.
fn report(err: &LabelError) {
    if err.is_io() {
        tracing::error!(error = %err, "label action failed");
        dialog::alert_default(&format!("Failed to create the DOCX file: {}", err));
    } else {
        dialog::alert_default(&err.to_string());
    }
}
