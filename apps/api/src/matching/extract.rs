//! Resume text extraction from uploaded files.

use std::fmt;
use std::path::Path;

use lopdf::Document;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported resume file '{0}': expected .txt or .pdf")]
    UnsupportedFileType(String),

    #[error("resume text is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("could not read PDF: {0}")]
    Pdf(#[from] lopdf::Error),
}

/// Picks the decoder from the file extension (case-insensitive).
pub fn extract_resume_text(file_name: &str, data: Vec<u8>) -> Result<String, ExtractError> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("txt") => Ok(String::from_utf8(data)?),
        Some("pdf") => extract_text_from_pdf(&data),
        _ => Err(ExtractError::UnsupportedFileType(file_name.to_string())),
    }
}

/// Concatenates the text of every page. A page whose text cannot be
/// extracted contributes nothing; only an unreadable document fails.
pub fn extract_text_from_pdf(data: &[u8]) -> Result<String, ExtractError> {
    let doc = Document::load_mem(data)?;
    let pages = doc
        .get_pages()
        .into_keys()
        .map(|page_num| (page_num, doc.extract_text(&[page_num])));
    Ok(join_page_text(pages))
}

/// Joins per-page results in page order, treating failed pages as empty.
fn join_page_text<E: fmt::Display>(
    pages: impl IntoIterator<Item = (u32, Result<String, E>)>,
) -> String {
    let mut text = String::new();
    for (page_num, result) in pages {
        match result {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => warn!("Failed to extract text from page {page_num}: {e}"),
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    use super::*;

    /// Builds a PDF whose pages carry the given text. `None` yields a page
    /// without a content stream.
    fn build_pdf(pages: &[Option<&str>]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = Vec::new();
        for page in pages {
            let mut page_dict = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
            };
            if let Some(line) = page {
                let content = Content {
                    operations: vec![
                        Operation::new("BT", vec![]),
                        Operation::new("Tf", vec!["F1".into(), 12.into()]),
                        Operation::new("Td", vec![72.into(), 700.into()]),
                        Operation::new("Tj", vec![Object::string_literal(*line)]),
                        Operation::new("ET", vec![]),
                    ],
                };
                let content_id =
                    doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
                page_dict.set("Contents", content_id);
            }
            kids.push(Object::from(doc.add_object(page_dict)));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn test_txt_decoded_as_utf8() {
        let text = extract_resume_text("resume.txt", "Python & SQL, café".as_bytes().to_vec())
            .unwrap();
        assert_eq!(text, "Python & SQL, café");
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert!(extract_resume_text("RESUME.TXT", b"ok".to_vec()).is_ok());
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let err = extract_resume_text("resume.txt", vec![0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidUtf8(_)));
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let err = extract_resume_text("resume.docx", b"PK".to_vec()).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFileType(_)));
        assert!(matches!(
            extract_resume_text("resume", b"".to_vec()),
            Err(ExtractError::UnsupportedFileType(_))
        ));
    }

    #[test]
    fn test_empty_txt_is_valid() {
        assert_eq!(extract_resume_text("empty.txt", Vec::new()).unwrap(), "");
    }

    #[test]
    fn test_pdf_pages_concatenated() {
        let pdf = build_pdf(&[Some("Python developer"), Some("SQL analyst")]);
        let text = extract_resume_text("cv.pdf", pdf).unwrap();
        let python = text.find("Python").unwrap();
        let sql = text.find("SQL").unwrap();
        assert!(python < sql);
    }

    #[test]
    fn test_pdf_page_without_content_does_not_fail_document() {
        let pdf = build_pdf(&[Some("Tableau expert"), None]);
        let text = extract_text_from_pdf(&pdf).unwrap();
        assert!(text.contains("Tableau"));
    }

    #[test]
    fn test_failed_page_counts_as_empty_text() {
        let pages: Vec<(u32, Result<String, &str>)> = vec![
            (1, Ok("Python developer\n".to_string())),
            (2, Err("invalid content stream")),
            (3, Ok("SQL analyst\n".to_string())),
        ];
        assert_eq!(join_page_text(pages), "Python developer\nSQL analyst\n");
    }

    #[test]
    fn test_all_pages_failing_yields_empty_text() {
        let pages: Vec<(u32, Result<String, &str>)> = vec![(1, Err("bad")), (2, Err("bad"))];
        assert_eq!(join_page_text(pages), "");
    }

    #[test]
    fn test_dangling_content_reference_does_not_fail_document() {
        let pdf = build_pdf(&[Some("Tableau expert"), None]);
        let mut doc = Document::load_mem(&pdf).unwrap();
        let broken_page = *doc.get_pages().get(&2).unwrap();
        let missing_id = (doc.max_id + 100, 0);
        doc.get_object_mut(broken_page)
            .and_then(Object::as_dict_mut)
            .unwrap()
            .set("Contents", missing_id);
        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();

        let text = extract_text_from_pdf(&buf).unwrap();
        assert!(text.contains("Tableau"));
    }

    #[test]
    fn test_garbage_pdf_rejected() {
        let err = extract_resume_text("cv.pdf", b"not a pdf at all".to_vec()).unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }
}
