use std::path::Path;

use label_maker::app::domain::pickers::{FixedColor, FixedPath};
use label_maker::app::infrastructure::blank_template::blank_template;
use label_maker::app::infrastructure::docx::DocxPackage;
use label_maker::app::infrastructure::wordml::{read_paragraphs, ParagraphInfo};
use label_maker::app::{
    Category, DocumentAssembler, HexColor, LabelError, LabelForm, LabelStore, TemplateSource,
};

fn add(store: &mut LabelStore, name: &str, count: &str, category: &str, color: &str) {
    let request = LabelForm::new(name, count, category).validate().unwrap();
    let mut picker = FixedColor(Some(HexColor::parse(color).unwrap()));
    store.add(&request, &mut picker).unwrap();
}

fn output_paragraphs(path: &Path) -> Vec<ParagraphInfo> {
    let package = DocxPackage::open(path).unwrap();
    read_paragraphs(&package.document_xml().unwrap()).unwrap()
}

/// A base template with a throwaway first line and a heading that must survive.
fn write_base_template(path: &Path) {
    let mut package = blank_template();
    let xml = package.document_xml().unwrap().replace(
        "<w:p/>",
        concat!(
            "<w:p><w:r><w:t>DELETE ME</w:t></w:r></w:p>",
            "<w:p><w:r><w:t>Shipping Labels</w:t></w:r></w:p>"
        ),
    );
    package.set_document_xml(xml);
    package.save(path).unwrap();
}

#[test]
fn three_records_produce_nine_styled_paragraphs() {
    let dir = tempfile::tempdir().unwrap();
    let template = dir.path().join("Label_Template_BLANK.docx");
    write_base_template(&template);

    let mut store = LabelStore::new();
    add(&mut store, "Acme", "3", "Cards", "#FF0000");
    assert_eq!(store.len(), 3);

    let assembler = DocumentAssembler::new(
        TemplateSource::File(template),
        dir.path().join("GENERATED_Label_Template.docx"),
    );
    let out = dir.path().join("labels.docx");
    let written = assembler
        .create(&store, &mut FixedPath(Some(out.clone())))
        .unwrap();
    assert_eq!(written, out);
    assert!(dir.path().join("GENERATED_Label_Template.docx").exists());

    let paragraphs = output_paragraphs(&out);
    assert_eq!(paragraphs.len(), 1 + 9);
    assert_eq!(paragraphs[0].text(), "Shipping Labels");
    assert!(paragraphs.iter().all(|p| !p.text().contains("DELETE ME")));

    for (i, block) in paragraphs[1..].chunks(3).enumerate() {
        let expected = [
            ("Order Name & Number\n", "Acme".to_string()),
            ("Batch / Chip Number\n", format!("{} of 3", i + 1)),
            ("Type: ", "Cards".to_string()),
        ];
        for (paragraph, (caption, value)) in block.iter().zip(expected) {
            assert_eq!(paragraph.alignment.as_deref(), Some("center"));
            assert_eq!(paragraph.text(), format!("{}{}", caption, value));

            let runs: Vec<_> = paragraph.text_runs().collect();
            assert_eq!(runs.len(), 2);
            assert_eq!(runs[0].text, caption);
            assert!(runs[0].bold);
            assert_eq!(runs[0].color, None);

            assert_eq!(runs[1].text, value);
            assert!(runs[1].bold);
            assert_eq!(runs[1].color.as_deref(), Some("FF0000"));
            assert_eq!(runs[1].size_half_points, Some(32));
        }
    }
}

#[test]
fn each_record_keeps_its_own_color() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = LabelStore::new();
    add(&mut store, "Acme", "1", "Cards", "ff0000");
    add(&mut store, "Globex", "2", "Envelopes", "0000ff");
    store.set_color("Globex", Category::Envelope, HexColor::parse("00ff00").unwrap());

    let assembler =
        DocumentAssembler::new(TemplateSource::Builtin, dir.path().join("skeleton.docx"));
    let out = dir.path().join("out.docx");
    assembler.create(&store, &mut FixedPath(Some(out.clone()))).unwrap();

    // Built-in template's only paragraph is stripped
    let paragraphs = output_paragraphs(&out);
    assert_eq!(paragraphs.len(), 9);

    let value_color = |p: &ParagraphInfo| p.text_runs().last().and_then(|r| r.color.clone());
    assert_eq!(value_color(&paragraphs[0]).as_deref(), Some("FF0000"));
    assert_eq!(value_color(&paragraphs[3]).as_deref(), Some("00FF00"));
    assert_eq!(value_color(&paragraphs[8]).as_deref(), Some("00FF00"));
    assert_eq!(paragraphs[4].text(), "Batch / Chip Number\n1 of 2");
    assert_eq!(paragraphs[7].text(), "Batch / Chip Number\n2 of 2");
    assert_eq!(paragraphs[8].text(), "Type: Envelopes");
}

#[test]
fn order_names_are_xml_safe() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = LabelStore::new();
    add(&mut store, "Fish & <Chips> \"Ltd\"", "1", "Envelopes", "123abc");

    let assembler =
        DocumentAssembler::new(TemplateSource::Builtin, dir.path().join("skeleton.docx"));
    let out = dir.path().join("out.docx");
    assembler.create(&store, &mut FixedPath(Some(out.clone()))).unwrap();

    let paragraphs = output_paragraphs(&out);
    assert_eq!(paragraphs[0].text(), "Order Name & Number\nFish & <Chips> \"Ltd\"");
}

#[test]
fn reset_then_create_fails_with_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = LabelStore::new();
    add(&mut store, "Acme", "2", "Cards", "ff0000");
    store.clear();

    let assembler =
        DocumentAssembler::new(TemplateSource::Builtin, dir.path().join("skeleton.docx"));
    let err = assembler
        .create(&store, &mut FixedPath(Some(dir.path().join("out.docx"))))
        .unwrap_err();
    assert!(matches!(err, LabelError::EmptyStore));
}
