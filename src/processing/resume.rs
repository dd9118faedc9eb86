use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};
use thiserror::Error;

use crate::domain::resume::{ResumeDocument, ResumeFormat, key_extension};
use crate::repository::{ResumeReader, StorageError};

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("unsupported resume format {0}: only .pdf and .docx are supported")]
    UnsupportedFormat(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to extract text from {format} resume: {message}")]
    Extraction {
        format: ResumeFormat,
        message: String,
    },
}

/// Reads the resume stored under `key` and returns its plain text.
///
/// The format is taken from the key's extension before anything is read,
/// so unsupported keys fail without touching storage.
pub async fn load_resume<R>(repo: &R, key: &str) -> Result<String, ResumeError>
where
    R: ResumeReader + ?Sized,
{
    let format = ResumeFormat::from_key(key).ok_or_else(|| {
        ResumeError::UnsupportedFormat(
            key_extension(key)
                .map(|ext| format!(".{ext}"))
                .unwrap_or_else(|| "(none)".to_string()),
        )
    })?;

    let bytes = repo.read_object(key).await?;
    log::info!("Fetched resume {key} ({} bytes, {format})", bytes.len());

    let text = extract_text(&ResumeDocument { format, bytes })?;
    log::info!("Extracted {} characters from resume", text.chars().count());

    Ok(text)
}

pub fn extract_text(document: &ResumeDocument) -> Result<String, ResumeError> {
    match document.format {
        ResumeFormat::Pdf => pdf_extract::extract_text_from_mem(&document.bytes).map_err(|e| {
            ResumeError::Extraction {
                format: ResumeFormat::Pdf,
                message: e.to_string(),
            }
        }),
        ResumeFormat::Docx => docx_text(&document.bytes),
    }
}

/// Joins the text of every top-level paragraph with newlines.
fn docx_text(bytes: &[u8]) -> Result<String, ResumeError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ResumeError::Extraction {
        format: ResumeFormat::Docx,
        message: format!("{e:?}"),
    })?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_children_text(&paragraph.children, &mut text);
    text
}

/// Appends run text in document order; tabs become `\t`, breaks `\n`.
fn push_children_text(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(text) => out.push_str(&text.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_children_text(&link.children, out),
            _ => {}
        }
    }
}
