use fltk::dialog::{self, ColorMode};

use crate::app::domain::pickers::ColorPicker;
use crate::app::domain::record::HexColor;

/// FLTK's modal color chooser.
#[derive(Debug, Default)]
pub struct ColorDialogPicker;

impl ColorPicker for ColorDialogPicker {
    fn choose(&mut self, title: &str) -> Option<HexColor> {
        dialog::color_chooser(title, ColorMode::Byte).map(|(r, g, b)| HexColor::from_rgb(r, g, b))
    }
}
