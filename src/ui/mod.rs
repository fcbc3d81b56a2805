pub mod color_dialog;
pub mod file_dialogs;
pub mod main_window;
pub mod theme;
