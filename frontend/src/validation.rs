//! Client-side checks on a chosen file.
//!
//! Rules run in order and the first failure wins:
//! media type, then size ceiling, then emptiness.

use crate::config::{MAX_FILE_SIZE, PDF_MIME_TYPE};
use crate::error::ValidationError;
use crate::types::FileInfo;

/// Validates a candidate file against the PDF and size rules.
pub fn validate_file(info: &FileInfo) -> Result<(), ValidationError> {
    if info.mime_type != PDF_MIME_TYPE {
        return Err(ValidationError::WrongType);
    }
    if info.size_bytes > MAX_FILE_SIZE {
        return Err(ValidationError::TooLarge);
    }
    if info.size_bytes == 0 {
        return Err(ValidationError::Empty);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(size: u64) -> FileInfo {
        FileInfo::new("report.pdf", size, PDF_MIME_TYPE)
    }

    #[test]
    fn test_accepts_pdf_within_bounds() {
        assert!(validate_file(&pdf(1)).is_ok());
        assert!(validate_file(&pdf(2 * 1024 * 1024)).is_ok());
        assert!(validate_file(&pdf(MAX_FILE_SIZE)).is_ok());
    }

    #[test]
    fn test_rejects_other_media_types() {
        for mime in ["", "text/plain", "application/x-pdf", "APPLICATION/PDF", "application/pdf; charset=binary"] {
            let info = FileInfo::new("report.pdf", 1024, mime);
            assert_eq!(validate_file(&info), Err(ValidationError::WrongType), "mime {:?}", mime);
        }
    }

    #[test]
    fn test_rejects_oversize() {
        assert_eq!(validate_file(&pdf(MAX_FILE_SIZE + 1)), Err(ValidationError::TooLarge));
        assert_eq!(validate_file(&pdf(u64::MAX)), Err(ValidationError::TooLarge));
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_file(&pdf(0)), Err(ValidationError::Empty));
    }

    #[test]
    fn test_type_checked_before_size() {
        let info = FileInfo::new("big.txt", MAX_FILE_SIZE + 1, "text/plain");
        assert_eq!(validate_file(&info), Err(ValidationError::WrongType));

        let info = FileInfo::new("empty.txt", 0, "text/plain");
        assert_eq!(validate_file(&info), Err(ValidationError::WrongType));
    }
}
