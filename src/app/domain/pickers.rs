//! Operator prompts the core needs mid-operation.
//!
//! The desktop build answers these with modal dialogs; tests answer them
//! with canned values.

use std::path::PathBuf;

use super::record::HexColor;

pub trait ColorPicker {
    /// Ask for a color. `None` means the operator cancelled.
    fn choose(&mut self, title: &str) -> Option<HexColor>;
}

pub trait PathPicker {
    /// Ask where to write the finished document. `None` means cancelled.
    fn choose(&mut self) -> Option<PathBuf>;
}

/// Always answers with the same color, or always cancels.
#[derive(Debug, Clone, Default)]
pub struct FixedColor(pub Option<HexColor>);

impl ColorPicker for FixedColor {
    fn choose(&mut self, _title: &str) -> Option<HexColor> {
        self.0.clone()
    }
}

/// Always answers with the same path, or always cancels.
#[derive(Debug, Clone, Default)]
pub struct FixedPath(pub Option<PathBuf>);

impl PathPicker for FixedPath {
    fn choose(&mut self) -> Option<PathBuf> {
        self.0.clone()
    }
}
