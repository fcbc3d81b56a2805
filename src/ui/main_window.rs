use fltk::{
    app::Sender,
    button::{Button, RadioRoundButton},
    enums::{Align, FrameType},
    frame::Frame,
    group::{Flex, FlexType, Pack, Scroll},
    input::{Input, IntInput},
    prelude::*,
    window::Window,
};

use crate::app::domain::messages::Message;
use crate::app::domain::record::Category;
use super::theme::{background, list_background, style_action_button, style_reset_button};

pub const WINDOW_WIDTH: i32 = 700;
pub const WINDOW_HEIGHT: i32 = 700;
const FIELD_HEIGHT: i32 = 30;
const BUTTON_HEIGHT: i32 = 36;

pub struct MainWidgets {
    pub wind: Window,
    pub order_input: Input,
    pub count_input: IntInput,
    pub category_radios: Vec<(Category, RadioRoundButton)>,
    pub swatch_scroll: Scroll,
    pub swatch_list: Pack,
    pub open_button: Button,
}

impl MainWidgets {
    pub fn selected_category(&self) -> Category {
        self.category_radios
            .iter()
            .find(|(_, radio)| radio.value())
            .map_or(Category::Envelope, |(category, _)| *category)
    }
}

fn caption(text: &str) -> Frame {
    let mut frame = Frame::default().with_label(text);
    frame.set_align(Align::Left | Align::Inside);
    frame.set_label_size(12);
    frame
}

pub fn build_main_window(sender: &Sender<Message>, default_category: Category) -> MainWidgets {
    let s = sender;
    let mut wind = Window::new(100, 100, WINDOW_WIDTH, WINDOW_HEIGHT, "Manual Label Maker");
    wind.set_xclass("ManualLabelMaker");
    wind.set_color(background());

    let mut flex = Flex::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT, None);
    flex.set_type(FlexType::Column);
    flex.set_margin(20);
    flex.set_pad(8);

    // Added labels, one clickable swatch per order
    let mut swatch_scroll = Scroll::default();
    swatch_scroll.set_color(list_background());
    swatch_scroll.set_frame(FrameType::FlatBox);
    let mut swatch_list = Pack::new(0, 0, WINDOW_WIDTH - 60, 0, None);
    swatch_list.set_spacing(5);
    swatch_list.end();
    swatch_scroll.end();

    let order_caption = caption("Order Name:");
    flex.fixed(&order_caption, 20);
    let order_input = Input::default();
    flex.fixed(&order_input, FIELD_HEIGHT);

    let count_caption = caption("Number of HW Machines:");
    flex.fixed(&count_caption, 20);
    let count_input = IntInput::default();
    flex.fixed(&count_input, FIELD_HEIGHT);

    let mut radio_row = Flex::default();
    radio_row.set_type(FlexType::Row);
    let category_radios: Vec<(Category, RadioRoundButton)> = Category::ALL
        .into_iter()
        .map(|category| {
            let mut radio = RadioRoundButton::default().with_label(category.label());
            radio.set_value(category == default_category);
            (category, radio)
        })
        .collect();
    radio_row.end();
    flex.fixed(&radio_row, FIELD_HEIGHT);

    let mut add_button = Button::default().with_label("Add to Label File");
    style_action_button(&mut add_button);
    add_button.set_callback({ let s = *s; move |_| s.send(Message::AddLabel) });
    flex.fixed(&add_button, BUTTON_HEIGHT);

    let mut reset_button = Button::default().with_label("Reset");
    style_reset_button(&mut reset_button);
    reset_button.set_callback({ let s = *s; move |_| s.send(Message::ResetLabels) });
    flex.fixed(&reset_button, BUTTON_HEIGHT);

    let mut create_button = Button::default().with_label("Create DOCX");
    style_action_button(&mut create_button);
    create_button.set_callback({ let s = *s; move |_| s.send(Message::CreateDocument) });
    flex.fixed(&create_button, BUTTON_HEIGHT);

    // Revealed once a document has been saved
    let mut open_button = Button::default().with_label("Open Created DOCX File");
    style_action_button(&mut open_button);
    open_button.set_callback({ let s = *s; move |_| s.send(Message::OpenCreatedDocument) });
    flex.fixed(&open_button, BUTTON_HEIGHT);
    open_button.hide();

    flex.end();
    wind.resizable(&flex);
    wind.end();

    wind.set_callback({ let s = *s; move |_| s.send(Message::WindowClose) });

    MainWidgets {
        wind,
        order_input,
        count_input,
        category_radios,
        swatch_scroll,
        swatch_list,
        open_button,
    }
}
