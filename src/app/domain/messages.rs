use super::record::Category;

/// All messages that can be sent through the FLTK channel.
/// Each button callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    AddLabel,
    ResetLabels,
    CreateDocument,
    OpenCreatedDocument,

    /// A color swatch was clicked.
    ChangeColor {
        order_name: String,
        category: Category,
    },

    WindowClose,
}
