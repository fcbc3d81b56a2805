//! Manual Label Maker: enter order labels, get a printable DOCX.
//!
//! The `app` module is headless and fully testable; `ui` holds the FLTK
//! window and dialogs and is only built with the `gui` feature.

pub mod app;
#[cfg(feature = "gui")]
pub mod ui;
