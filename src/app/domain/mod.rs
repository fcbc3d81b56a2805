//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Label records, categories and colors
//! - The entry form and its validation
//! - Application settings
//! - Operator prompts (color and save path)
//! - Message types for the event system

pub mod form;
pub mod messages;
pub mod pickers;
pub mod record;
pub mod settings;

pub use form::{LabelForm, LabelRequest};
pub use messages::Message;
pub use pickers::{ColorPicker, FixedColor, FixedPath, PathPicker};
pub use record::{Category, HexColor, LabelGroup, LabelRecord};
pub use settings::AppSettings;
