use thiserror::Error;

use super::domain::record::Category;

#[derive(Error, Debug)]
pub enum LabelError {
    #[error("{0}")]
    Validation(String),

    #[error("Label for '{order_name} {category}' already exists!")]
    Duplicate { order_name: String, category: Category },

    #[error("No color selected!")]
    NoColorSelected,

    #[error("Save path not specified or operation cancelled.")]
    SaveCancelled,

    #[error("No label data to create the file!")]
    EmptyStore,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),
}

impl LabelError {
    /// True for failures reading or writing documents, as opposed to
    /// operator input problems and cancelled dialogs.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            LabelError::Io(_)
                | LabelError::Json(_)
                | LabelError::Zip(_)
                | LabelError::Xml(_)
                | LabelError::Template(_)
                | LabelError::InvalidTemplate(_)
        )
    }
}

/// Convenience type alias for Results with LabelError
pub type Result<T> = std::result::Result<T, LabelError>;
