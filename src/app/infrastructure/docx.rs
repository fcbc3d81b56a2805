//! The `.docx` container: a zip archive of XML parts.

use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::app::error::{LabelError, Result};

pub const DOCUMENT_PART: &str = "word/document.xml";

#[derive(Debug, Clone)]
struct Part {
    name: String,
    data: Vec<u8>,
}

/// An opened Word document. Part order is kept as read so a round trip
/// rewrites the archive the way Word laid it out.
#[derive(Debug, Clone, Default)]
pub struct DocxPackage {
    parts: Vec<Part>,
}

impl DocxPackage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;
        let mut parts = Vec::with_capacity(archive.len());

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;
            if entry.is_dir() {
                continue;
            }
            let mut data = Vec::with_capacity(entry.size() as usize);
            entry.read_to_end(&mut data)?;
            parts.push(Part {
                name: entry.name().to_string(),
                data,
            });
        }

        let package = Self { parts };
        if package.part(DOCUMENT_PART).is_none() {
            return Err(LabelError::InvalidTemplate(format!(
                "missing {}",
                DOCUMENT_PART
            )));
        }
        Ok(package)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        for part in &self.parts {
            zip.start_file(part.name.as_str(), options)?;
            zip.write_all(&part.data)?;
        }
        Ok(zip.finish()?.into_inner())
    }

    /// Write the archive, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|p| p.name.as_str())
    }

    pub fn part(&self, name: &str) -> Option<&[u8]> {
        self.parts
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.data.as_slice())
    }

    pub fn part_text(&self, name: &str) -> Result<String> {
        let data = self
            .part(name)
            .ok_or_else(|| LabelError::InvalidTemplate(format!("missing {}", name)))?;
        String::from_utf8(data.to_vec())
            .map_err(|_| LabelError::InvalidTemplate(format!("{} is not UTF-8", name)))
    }

    /// Replace a part's content, or add the part at the end.
    pub fn set_part(&mut self, name: &str, data: Vec<u8>) {
        match self.parts.iter_mut().find(|p| p.name == name) {
            Some(part) => part.data = data,
            None => self.parts.push(Part {
                name: name.to_string(),
                data,
            }),
        }
    }

    pub fn set_part_text(&mut self, name: &str, text: String) {
        self.set_part(name, text.into_bytes());
    }

    pub fn document_xml(&self) -> Result<String> {
        self.part_text(DOCUMENT_PART)
    }

    pub fn set_document_xml(&mut self, xml: String) {
        self.set_part_text(DOCUMENT_PART, xml);
    }
}
