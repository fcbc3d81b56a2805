//! Turns the label store into a finished `.docx`.
//!
//! Generation runs in two passes. The first appends a skeleton of captioned
//! paragraphs with `{{ ... }}` placeholders to the base template and writes
//! it to the intermediate path. The second reopens that file, fills every
//! placeholder with the record's text in the record's color, and writes the
//! result wherever the operator chooses.

use std::path::{Path, PathBuf};

use crate::app::domain::pickers::PathPicker;
use crate::app::domain::record::LabelRecord;
use crate::app::domain::settings::AppSettings;
use crate::app::error::{LabelError, Result};
use crate::app::infrastructure::blank_template::blank_template;
use crate::app::infrastructure::docx::DocxPackage;
use crate::app::infrastructure::substitution::{render_package, RichText, SubstitutionContext};
use crate::app::infrastructure::wordml::{append_paragraphs, paragraph_xml, strip_first_paragraph};

use super::formatter::split_runs;
use super::store::LabelStore;

pub const ORDER_CAPTION: &str = "Order Name & Number";
pub const BATCH_CAPTION: &str = "Batch / Chip Number";
pub const TYPE_CAPTION: &str = "Type:";

/// Paragraphs emitted per label.
pub const LINES_PER_LABEL: usize = 3;

/// Placeholder names for the label at 1-based `position`.
pub fn placeholder_names(position: usize) -> [String; LINES_PER_LABEL] {
    [
        format!("order_name{}", position),
        format!("batch_chip{}", position),
        format!("card_envelope{}", position),
    ]
}

/// Skeleton text of the three lines for the label at 1-based `position`.
pub fn skeleton_lines(position: usize) -> [String; LINES_PER_LABEL] {
    let [order, batch, kind] = placeholder_names(position);
    [
        format!("{}\n{{{{ {} }}}}", ORDER_CAPTION, order),
        format!("{}\n{{{{ {} }}}}", BATCH_CAPTION, batch),
        format!("{} {{{{ {} }}}}", TYPE_CAPTION, kind),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Builtin,
    File(PathBuf),
}

impl TemplateSource {
    fn load(&self) -> Result<DocxPackage> {
        match self {
            TemplateSource::Builtin => Ok(blank_template()),
            TemplateSource::File(path) => DocxPackage::open(path),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelLayout {
    /// Skeleton caption size in points.
    pub caption_font_size: u32,
    /// Substituted value size in half-points.
    pub value_font_size: u32,
}

impl Default for LabelLayout {
    fn default() -> Self {
        Self {
            caption_font_size: 16,
            value_font_size: 32,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DocumentAssembler {
    template: TemplateSource,
    intermediate_path: PathBuf,
    layout: LabelLayout,
}

impl DocumentAssembler {
    pub fn new(template: TemplateSource, intermediate_path: PathBuf) -> Self {
        Self {
            template,
            intermediate_path,
            layout: LabelLayout::default(),
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        let template = match settings.template_path {
            Some(ref path) => TemplateSource::File(path.clone()),
            None => TemplateSource::Builtin,
        };
        Self::new(template, settings.intermediate_path()).with_layout(LabelLayout {
            caption_font_size: settings.caption_font_size,
            value_font_size: settings.value_font_size,
        })
    }

    pub fn with_layout(mut self, layout: LabelLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn intermediate_path(&self) -> &Path {
        &self.intermediate_path
    }

    /// Base template minus its first paragraph, plus three placeholder
    /// paragraphs per record.
    pub fn build_skeleton(&self, records: &[LabelRecord]) -> Result<DocxPackage> {
        let mut package = self.template.load()?;
        let xml = strip_first_paragraph(&package.document_xml()?)?;

        let mut paragraphs = String::new();
        for position in 1..=records.len() {
            for line in skeleton_lines(position) {
                let segments = split_runs(&line);
                paragraphs.push_str(&paragraph_xml(&segments, self.layout.caption_font_size));
            }
        }

        package.set_document_xml(append_paragraphs(&xml, &paragraphs)?);
        Ok(package)
    }

    /// Build the skeleton and write it to the intermediate path.
    pub fn write_skeleton(&self, records: &[LabelRecord]) -> Result<&Path> {
        let skeleton = self.build_skeleton(records)?;
        skeleton.save(&self.intermediate_path)?;
        tracing::debug!(
            path = %self.intermediate_path.display(),
            labels = records.len(),
            "wrote skeleton document"
        );
        Ok(&self.intermediate_path)
    }

    /// Placeholder values: each record's text, in its color, bold.
    pub fn substitution_context(&self, records: &[LabelRecord]) -> SubstitutionContext {
        let mut context = SubstitutionContext::new();
        for (i, record) in records.iter().enumerate() {
            let [order, batch, kind] = placeholder_names(i + 1);
            let styled = |text: String| {
                RichText::new(text)
                    .color(record.color().clone())
                    .size(self.layout.value_font_size)
                    .bold(true)
            };
            context.insert_rich(order, &styled(record.order_name().to_string()));
            context.insert_rich(batch, &styled(record.batch_label()));
            context.insert_rich(kind, &styled(record.category().label().to_string()));
        }
        context
    }

    /// Generate the label document for everything in `store` and write it to
    /// the path the operator picks. Returns the written path.
    pub fn create(&self, store: &LabelStore, paths: &mut dyn PathPicker) -> Result<PathBuf> {
        if store.is_empty() {
            return Err(LabelError::EmptyStore);
        }
        let records = store.all();

        let skeleton_path = self.write_skeleton(records)?;
        let mut package = DocxPackage::open(skeleton_path)?;
        let context = self.substitution_context(records);

        let mut output = paths.choose().ok_or(LabelError::SaveCancelled)?;
        if output.extension().is_none() {
            output.set_extension("docx");
        }

        render_package(&mut package, &context)?;
        package.save(&output)?;

        tracing::info!(path = %output.display(), labels = records.len(), "labels saved");
        Ok(output)
    }
}
