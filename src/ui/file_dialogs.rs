use std::path::PathBuf;

use fltk::dialog::{FileDialogType, NativeFileChooser, NativeFileChooserOptions};

use crate::app::domain::pickers::PathPicker;

pub const DOCX_FILTER: &str = "Word Document\t*.docx";
const DEFAULT_FILE_NAME: &str = "labels.docx";

/// Native "Save As" dialog for the finished label document.
#[derive(Debug, Default)]
pub struct SaveDialogPicker {
    pub start_directory: Option<PathBuf>,
}

impl PathPicker for SaveDialogPicker {
    fn choose(&mut self) -> Option<PathBuf> {
        let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
        nfc.set_filter(DOCX_FILTER);
        nfc.set_option(NativeFileChooserOptions::SaveAsConfirm);
        nfc.set_preset_file(DEFAULT_FILE_NAME);
        if let Some(ref dir) = self.start_directory {
            if let Err(e) = nfc.set_directory(dir) {
                tracing::debug!(error = ?e, "could not preset save directory");
            }
        }
        nfc.show(); // blocks until close
        let filename = nfc.filename();
        if filename.as_os_str().is_empty() {
            None
        } else {
            Some(filename)
        }
    }
}
