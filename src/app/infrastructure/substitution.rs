//! Fills `{{ name }}` placeholders in a Word package.
//!
//! Document, header and footer parts are rendered as minijinja templates.
//! Plain values are XML-escaped; rich text values splice a styled run into
//! the paragraph in place of the placeholder.

use std::collections::BTreeMap;

use minijinja::{AutoEscape, Environment, Value};

use crate::app::domain::record::HexColor;
use crate::app::error::Result;

use super::docx::{DocxPackage, DOCUMENT_PART};
use super::wordml::{run_xml, RunStyle};

/// Styled text injected during substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichText {
    pub text: String,
    pub style: RunStyle,
}

impl RichText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::plain(),
        }
    }

    pub fn color(mut self, color: HexColor) -> Self {
        self.style.color = Some(color);
        self
    }

    /// Size in half-points.
    pub fn size(mut self, half_points: u32) -> Self {
        self.style.size_half_points = Some(half_points);
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.style.bold = bold;
        self
    }

    /// The placeholder sits inside `<w:r><w:t>`; close both, emit our run,
    /// then reopen an empty run so the surrounding markup still balances.
    fn to_xml(&self) -> String {
        format!(
            "</w:t></w:r>{}<w:r><w:t xml:space=\"preserve\">",
            run_xml(&self.text, &self.style)
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubstitutionContext {
    values: BTreeMap<String, Value>,
}

impl SubstitutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_text(&mut self, name: impl Into<String>, text: &str) {
        self.values.insert(name.into(), Value::from(text));
    }

    pub fn insert_rich(&mut self, name: impl Into<String>, rich: &RichText) {
        self.values
            .insert(name.into(), Value::from_safe_string(rich.to_xml()));
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn is_templated_part(name: &str) -> bool {
    if name == DOCUMENT_PART {
        return true;
    }
    name.strip_prefix("word/").is_some_and(|rest| {
        !rest.contains('/')
            && rest.ends_with(".xml")
            && (rest.starts_with("header") || rest.starts_with("footer"))
    })
}

/// Render every templated part of `package` in place.
pub fn render_package(package: &mut DocxPackage, context: &SubstitutionContext) -> Result<()> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);

    let names: Vec<String> = package
        .part_names()
        .filter(|name| is_templated_part(name))
        .map(str::to_string)
        .collect();

    for name in names {
        let source = package.part_text(&name)?;
        let rendered = env.render_named_str(&name, &source, &context.values)?;
        tracing::debug!(part = %name, bytes = rendered.len(), "rendered part");
        package.set_part_text(&name, rendered);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::wordml::read_paragraphs;

    fn package_with_body(body: &str) -> DocxPackage {
        let mut package = DocxPackage::new();
        package.set_document_xml(format!(
            "<w:document xmlns:w=\"w\"><w:body>{}</w:body></w:document>",
            body
        ));
        package
    }

    #[test]
    fn test_templated_parts() {
        assert!(is_templated_part("word/document.xml"));
        assert!(is_templated_part("word/header1.xml"));
        assert!(is_templated_part("word/footer2.xml"));
        assert!(!is_templated_part("word/styles.xml"));
        assert!(!is_templated_part("word/_rels/header1.xml.rels"));
        assert!(!is_templated_part("customXml/item1.xml"));
    }

    #[test]
    fn test_plain_values_are_escaped() {
        let mut package =
            package_with_body("<w:p><w:r><w:t>{{ name }}</w:t></w:r></w:p>");
        let mut ctx = SubstitutionContext::new();
        ctx.insert_text("name", "Fish & <Chips>");
        render_package(&mut package, &ctx).unwrap();

        let xml = package.document_xml().unwrap();
        assert!(xml.contains("Fish &amp; &lt;Chips&gt;"));
        let paragraphs = read_paragraphs(&xml).unwrap();
        assert_eq!(paragraphs[0].text(), "Fish & <Chips>");
    }

    #[test]
    fn test_rich_text_becomes_styled_run() {
        let mut package = package_with_body(
            "<w:p><w:r><w:rPr><w:b w:val=\"0\"/></w:rPr><w:t xml:space=\"preserve\">{{ order_name1 }}</w:t></w:r></w:p>",
        );
        let mut ctx = SubstitutionContext::new();
        let rich = RichText::new("Acme & Co")
            .color(HexColor::parse("00ff00").unwrap())
            .size(32)
            .bold(true);
        ctx.insert_rich("order_name1", &rich);
        render_package(&mut package, &ctx).unwrap();

        let paragraphs = read_paragraphs(&package.document_xml().unwrap()).unwrap();
        let runs: Vec<_> = paragraphs[0].text_runs().collect();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "Acme & Co");
        assert!(runs[0].bold);
        assert_eq!(runs[0].color.as_deref(), Some("00FF00"));
        assert_eq!(runs[0].size_half_points, Some(32));
    }

    #[test]
    fn test_headers_are_rendered_too() {
        let mut package = package_with_body("<w:p/>");
        package.set_part_text("word/header1.xml", "<w:hdr>{{ title }}</w:hdr>".to_string());
        let mut ctx = SubstitutionContext::new();
        ctx.insert_text("title", "Shipping");
        render_package(&mut package, &ctx).unwrap();
        assert_eq!(package.part_text("word/header1.xml").unwrap(), "<w:hdr>Shipping</w:hdr>");
    }

    #[test]
    fn test_unknown_placeholder_renders_empty() {
        let mut package = package_with_body("<w:p><w:r><w:t>[{{ missing }}]</w:t></w:r></w:p>");
        render_package(&mut package, &SubstitutionContext::new()).unwrap();
        assert!(package.document_xml().unwrap().contains("<w:t>[]</w:t>"));
    }

    #[test]
    fn test_broken_template_syntax_is_error() {
        let mut package = package_with_body("<w:p><w:r><w:t>{{ unclosed </w:t></w:r></w:p>");
        let err = render_package(&mut package, &SubstitutionContext::new()).unwrap_err();
        assert!(matches!(err, crate::app::error::LabelError::Template(_)));
    }
}
