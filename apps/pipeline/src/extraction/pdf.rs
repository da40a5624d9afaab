use bytes::Bytes;
use tokio::task::JoinError;
use tracing::{debug, info};

use crate::errors::AppError;

/// Extracts the text of every page of an in-memory PDF.
///
/// Fails with `UnprocessableEntity` when the bytes are not a readable PDF or
/// when the document holds no extractable text (image-only or encrypted).
pub fn extract_text_from_pdf(pdf_bytes: &[u8]) -> Result<String, AppError> {
    debug!("Extracting text from PDF ({} bytes)", pdf_bytes.len());

    let raw = pdf_extract::extract_text_from_mem(pdf_bytes).map_err(|e| {
        AppError::UnprocessableEntity(format!("File is not a valid PDF or is corrupted: {e}"))
    })?;

    let text = raw.trim();
    if text.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "PDF yielded no extractable text. The file may be image-only or encrypted."
                .to_string(),
        ));
    }

    info!("Extraction complete. Total characters extracted: {}", text.len());
    Ok(text.to_string())
}

/// Runs [`extract_text_from_pdf`] on the blocking pool.
pub async fn extract_text_blocking(pdf_bytes: Bytes) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || extract_text_from_pdf(&pdf_bytes))
        .await
        .map_err(blocking_failure)?
}

/// The PDF parser can panic on hostile input, which is the upload's fault.
/// A cancelled task means the runtime is going away, which is ours.
fn blocking_failure(err: JoinError) -> AppError {
    if err.is_panic() {
        AppError::UnprocessableEntity(format!("PDF could not be parsed: {err}"))
    } else {
        AppError::Internal(anyhow::Error::new(err).context("PDF extraction task was cancelled"))
    }
}

/// Builds a one-page PDF showing `text` in Helvetica, with a valid xref table.
/// `text` must not contain parentheses or backslashes.
#[cfg(test)]
pub(crate) fn one_page_pdf(text: &str) -> Vec<u8> {
    let content = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
            .to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
        format!(
            "<< /Length {} >>\nstream\n{content}\nendstream",
            content.len()
        ),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_start = pdf.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        xref.push_str(&format!("{offset:010} 00000 n \n"));
    }
    xref.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_start}\n%%EOF\n",
        objects.len() + 1
    ));
    pdf.extend_from_slice(xref.as_bytes());
    pdf
}
