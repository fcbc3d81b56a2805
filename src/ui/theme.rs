use fltk::{
    button::Button,
    enums::{Align, Color, FrameType},
    frame::Frame,
    prelude::*,
};

use crate::app::domain::record::HexColor;

pub fn background() -> Color {
    Color::from_rgb(240, 240, 240)
}

pub fn list_background() -> Color {
    Color::from_rgb(58, 58, 58)
}

fn style_button(button: &mut Button, color: Color, pressed: Color) {
    button.set_frame(FrameType::RFlatBox);
    button.set_color(color);
    button.set_selection_color(pressed);
    button.set_label_color(Color::White);
    button.clear_visible_focus();
}

pub fn style_action_button(button: &mut Button) {
    style_button(button, Color::from_rgb(0x13, 0x3d, 0x8e), Color::from_rgb(0x26, 0x6c, 0xc3));
}

pub fn style_reset_button(button: &mut Button) {
    style_button(button, Color::from_rgb(0x8e, 0x13, 0x13), Color::from_rgb(0xc3, 0x26, 0x26));
}

/// Paint a label-list swatch in the label's own color.
pub fn style_swatch(frame: &mut Frame, color: &HexColor) {
    let (r, g, b) = color.to_rgb();
    frame.set_frame(FrameType::RFlatBox);
    frame.set_color(Color::from_rgb(r, g, b));
    frame.set_label_color(Color::White);
    frame.set_align(Align::Left | Align::Inside);
}
