//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (LabelRecord, LabelForm, Settings, pickers)
//! - `services/` - Business operations (run formatter, label store, document assembler)
//! - `infrastructure/` - External integrations (docx container, WordprocessingML, templating, logging)
//! - `state.rs` - Main window coordinator (`gui` feature)

pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod services;
#[cfg(feature = "gui")]
pub mod state;

// Re-exports for convenient external access
pub use domain::{
    AppSettings, Category, ColorPicker, HexColor, LabelForm, LabelGroup, LabelRecord,
    LabelRequest, Message, PathPicker,
};
pub use error::{LabelError, Result};
pub use services::assembler::{DocumentAssembler, LabelLayout, TemplateSource};
pub use services::formatter::{split_runs, TextSegment};
pub use services::store::LabelStore;
