use bytes::Bytes;

use crate::errors::AppError;

/// Extracts plain text from a PDF on a blocking thread.
/// Unreadable PDFs and PDFs without any text layer are rejected as unprocessable.
/// The parser can panic on malformed input; that is treated as unreadable too.
pub async fn extract_pdf_text(data: Bytes) -> Result<String, AppError> {
    let extracted = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(|e| {
            if e.is_panic() {
                AppError::UnprocessableEntity("Failed to read PDF file".to_string())
            } else {
                AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}"))
            }
        })?;

    let text = extracted.map_err(|e| {
        tracing::warn!("PDF extraction failed: {e}");
        AppError::UnprocessableEntity("Failed to read PDF file".to_string())
    })?;

    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Could not extract text from file".to_string(),
        ));
    }

    Ok(text)
}

/// Only PDF uploads are analyzed: the file name must end in `.pdf` and the
/// payload must carry the PDF magic header.
pub fn is_pdf(file_name: &str, data: &[u8]) -> bool {
    file_name.to_lowercase().ends_with(".pdf") && data.starts_with(b"%PDF")
}
