//! Reading and writing the `w:body` of `word/document.xml`.

use std::ops::Range;

use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::app::domain::record::HexColor;
use crate::app::error::{LabelError, Result};
use crate::app::services::formatter::TextSegment;

/// Character formatting for one run. Sizes are half-points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStyle {
    pub bold: bool,
    pub size_half_points: Option<u32>,
    pub color: Option<HexColor>,
}

impl RunStyle {
    pub fn plain() -> Self {
        Self {
            bold: false,
            size_half_points: None,
            color: None,
        }
    }
}

/// Render a `w:r`. Newlines become `w:br` inside the same run.
pub fn run_xml(text: &str, style: &RunStyle) -> String {
    let mut xml = String::from("<w:r><w:rPr>");
    if style.bold {
        xml.push_str("<w:b/><w:bCs/>");
    } else {
        xml.push_str("<w:b w:val=\"0\"/><w:bCs w:val=\"0\"/>");
    }
    if let Some(ref color) = style.color {
        xml.push_str(&format!("<w:color w:val=\"{}\"/>", color.as_str().to_ascii_uppercase()));
    }
    if let Some(size) = style.size_half_points {
        xml.push_str(&format!("<w:sz w:val=\"{0}\"/><w:szCs w:val=\"{0}\"/>", size));
    }
    xml.push_str("</w:rPr>");

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            xml.push_str("<w:br/>");
        }
        if !line.is_empty() {
            xml.push_str("<w:t xml:space=\"preserve\">");
            xml.push_str(&escape(line));
            xml.push_str("</w:t>");
        }
    }

    xml.push_str("</w:r>");
    xml
}

/// A centered paragraph with one run per segment: emphasized segments bold,
/// all of them at `size_pt`.
pub fn paragraph_xml(segments: &[TextSegment], size_pt: u32) -> String {
    let mut xml = String::from("<w:p><w:pPr><w:jc w:val=\"center\"/></w:pPr>");
    for segment in segments {
        let style = RunStyle {
            bold: segment.emphasized,
            size_half_points: Some(size_pt * 2),
            color: None,
        };
        xml.push_str(&run_xml(&segment.content, &style));
    }
    xml.push_str("</w:p>");
    xml
}

/// Byte offsets of the interesting children of `w:body`.
#[derive(Debug, Default)]
struct BodyLayout {
    first_paragraph: Option<Range<usize>>,
    section_start: Option<usize>,
    body_end: Option<usize>,
}

fn is(e: &BytesStart<'_>, local: &[u8]) -> bool {
    e.local_name().as_ref() == local
}

fn scan_body(xml: &str) -> Result<BodyLayout> {
    let mut reader = Reader::from_str(xml);
    let mut layout = BodyLayout::default();
    // Number of open elements; body children sit at `children_depth`.
    let mut depth = 0usize;
    let mut children_depth: Option<usize> = None;
    let mut paragraph_start: Option<usize> = None;

    loop {
        let start = reader.buffer_position();
        match reader.read_event()? {
            Event::Start(e) => {
                if children_depth.is_none() && is(&e, b"body") {
                    children_depth = Some(depth + 1);
                } else if children_depth == Some(depth) {
                    if is(&e, b"p") && layout.first_paragraph.is_none() {
                        paragraph_start = Some(start);
                    } else if is(&e, b"sectPr") {
                        layout.section_start = Some(start);
                    }
                }
                depth += 1;
            }
            Event::Empty(e) => {
                if children_depth == Some(depth) {
                    if is(&e, b"p") && layout.first_paragraph.is_none() {
                        layout.first_paragraph = Some(start..reader.buffer_position());
                    } else if is(&e, b"sectPr") {
                        layout.section_start = Some(start);
                    }
                }
            }
            Event::End(e) => {
                depth = depth.saturating_sub(1);
                let local = e.local_name();
                if children_depth == Some(depth) && local.as_ref() == b"p" {
                    if let Some(p_start) = paragraph_start.take() {
                        layout.first_paragraph = Some(p_start..reader.buffer_position());
                    }
                } else if children_depth == Some(depth + 1) && local.as_ref() == b"body" {
                    layout.body_end = Some(start);
                    break;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if layout.body_end.is_none() {
        return Err(LabelError::InvalidTemplate(
            "document has no w:body".to_string(),
        ));
    }
    Ok(layout)
}

/// Drop the first paragraph directly under `w:body`, if there is one.
pub fn strip_first_paragraph(xml: &str) -> Result<String> {
    let layout = scan_body(xml)?;
    Ok(match layout.first_paragraph {
        Some(range) => format!("{}{}", &xml[..range.start], &xml[range.end..]),
        None => xml.to_string(),
    })
}

/// Insert `paragraphs` at the end of the body, ahead of the section
/// properties that must stay last.
pub fn append_paragraphs(xml: &str, paragraphs: &str) -> Result<String> {
    let layout = scan_body(xml)?;
    let at = layout
        .section_start
        .or(layout.body_end)
        .ok_or_else(|| LabelError::InvalidTemplate("document has no w:body".to_string()))?;
    let mut out = String::with_capacity(xml.len() + paragraphs.len());
    out.push_str(&xml[..at]);
    out.push_str(paragraphs);
    out.push_str(&xml[at..]);
    Ok(out)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunInfo {
    pub text: String,
    pub bold: bool,
    pub color: Option<String>,
    pub size_half_points: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphInfo {
    pub alignment: Option<String>,
    pub runs: Vec<RunInfo>,
}

impl ParagraphInfo {
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Runs that actually carry text.
    pub fn text_runs(&self) -> impl Iterator<Item = &RunInfo> {
        self.runs.iter().filter(|r| !r.text.is_empty())
    }
}

fn attr_val(e: &BytesStart<'_>) -> Result<Option<String>> {
    match e.try_get_attribute("w:val").map_err(quick_xml::Error::from)? {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}

fn apply_property(
    e: &BytesStart<'_>,
    paragraph: &mut ParagraphInfo,
    run: Option<&mut RunInfo>,
) -> Result<()> {
    match (e.local_name().as_ref(), run) {
        (b"jc", None) => paragraph.alignment = attr_val(e)?,
        (b"b", Some(run)) => {
            run.bold = !matches!(attr_val(e)?.as_deref(), Some("0") | Some("false"));
        }
        (b"color", Some(run)) => run.color = attr_val(e)?,
        (b"sz", Some(run)) => {
            run.size_half_points = attr_val(e)?.and_then(|v| v.parse().ok());
        }
        (b"br", Some(run)) => run.text.push('\n'),
        _ => {}
    }
    Ok(())
}

/// Paragraphs directly under `w:body`, with their runs' text and formatting.
pub fn read_paragraphs(xml: &str) -> Result<Vec<ParagraphInfo>> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut depth = 0usize;
    let mut children_depth: Option<usize> = None;
    let mut paragraph: Option<ParagraphInfo> = None;
    let mut run: Option<RunInfo> = None;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if children_depth.is_none() && is(&e, b"body") {
                    children_depth = Some(depth + 1);
                } else if children_depth == Some(depth) && is(&e, b"p") {
                    paragraph = Some(ParagraphInfo::default());
                } else if let Some(ref mut p) = paragraph {
                    if is(&e, b"r") {
                        run = Some(RunInfo::default());
                    } else if is(&e, b"t") {
                        in_text = run.is_some();
                    } else {
                        apply_property(&e, p, run.as_mut())?;
                    }
                }
                depth += 1;
            }
            Event::Empty(e) => {
                if children_depth == Some(depth) && is(&e, b"p") {
                    paragraphs.push(ParagraphInfo::default());
                } else if let Some(ref mut p) = paragraph {
                    apply_property(&e, p, run.as_mut())?;
                }
            }
            Event::Text(t) => {
                if in_text {
                    if let Some(ref mut r) = run {
                        r.text.push_str(&t.unescape()?);
                    }
                }
            }
            Event::End(e) => {
                depth = depth.saturating_sub(1);
                let local = e.local_name();
                match local.as_ref() {
                    b"t" => in_text = false,
                    b"r" => {
                        if let (Some(p), Some(r)) = (paragraph.as_mut(), run.take()) {
                            p.runs.push(r);
                        }
                    }
                    b"p" if children_depth == Some(depth) => {
                        if let Some(p) = paragraph.take() {
                            paragraphs.push(p);
                        }
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}
