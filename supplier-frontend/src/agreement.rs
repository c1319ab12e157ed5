//! Checks and file names for a supplier's signed framework agreement upload.

use std::path::Path;

/// Uploads of this many bytes or more are rejected.
pub const MAX_AGREEMENT_BYTES: u64 = 5_400_000;

/// Base name of every stored signed agreement.
pub const SIGNED_AGREEMENT_NAME: &str = "signed-framework-agreement";

/// Why an agreement upload was rejected. `Display` gives the message shown to the supplier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgreementUploadError {
    #[error("Document must not be empty")]
    Empty,

    #[error("Document must be less than 5MB")]
    TooLarge { size: u64 },
}

/// Check the size of an uploaded agreement. Empty is reported before too large.
pub fn validate_agreement_upload(size: u64) -> Result<(), AgreementUploadError> {
    if size == 0 {
        return Err(AgreementUploadError::Empty);
    }
    if size >= MAX_AGREEMENT_BYTES {
        return Err(AgreementUploadError::TooLarge { size });
    }
    Ok(())
}

/// Names for a signed agreement, derived from the file the supplier uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgreementDocument {
    extension: Option<String>,
}

impl AgreementDocument {
    /// Keep the extension of the uploaded file, e.g. `pdf` from `"test.pdf"`.
    pub fn from_upload(filename: &str) -> Self {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty())
            .map(str::to_string);
        Self { extension }
    }

    /// The extension kept from the upload, without the dot.
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// The stored document name, e.g. `signed-framework-agreement.pdf`.
    pub fn document_name(&self) -> String {
        self.with_extension(SIGNED_AGREEMENT_NAME.to_string())
    }

    /// The name offered when the document is downloaded, e.g.
    /// `Supplier_Name-1234-signed-framework-agreement.pdf`.
    pub fn download_filename(&self, supplier_name: &str, supplier_id: u64) -> String {
        self.with_extension(format!(
            "{}-{supplier_id}-{SIGNED_AGREEMENT_NAME}",
            sanitise_supplier_name(supplier_name)
        ))
    }

    fn with_extension(&self, stem: String) -> String {
        match &self.extension {
            Some(ext) => format!("{stem}.{ext}"),
            None => stem,
        }
    }
}

/// Make a supplier name safe for a file name: whitespace runs become `_`, and
/// anything other than letters, digits, `-` and `_` is dropped.
pub fn sanitise_supplier_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document() {
        let err = validate_agreement_upload(0).unwrap_err();
        assert_eq!(err, AgreementUploadError::Empty);
        assert_eq!(err.to_string(), "Document must not be empty");
    }

    #[test]
    fn size_limit() {
        assert!(validate_agreement_upload(3).is_ok());
        assert!(validate_agreement_upload(MAX_AGREEMENT_BYTES - 1).is_ok());

        let err = validate_agreement_upload(MAX_AGREEMENT_BYTES).unwrap_err();
        assert_eq!(err.to_string(), "Document must be less than 5MB");
    }

    #[test]
    fn pdf_names() {
        let document = AgreementDocument::from_upload("test.pdf");
        assert_eq!(document.extension(), Some("pdf"));
        assert_eq!(document.document_name(), "signed-framework-agreement.pdf");
        assert_eq!(
            document.download_filename("Supplier Nme", 1234),
            "Supplier_Nme-1234-signed-framework-agreement.pdf"
        );
    }

    #[test]
    fn jpeg_keeps_its_extension() {
        let document = AgreementDocument::from_upload("scan.final.jpg");
        assert_eq!(document.document_name(), "signed-framework-agreement.jpg");
        assert_eq!(
            document.download_filename("Supplier Nme", 1234),
            "Supplier_Nme-1234-signed-framework-agreement.jpg"
        );
    }

    #[test]
    fn upload_without_extension() {
        let document = AgreementDocument::from_upload("agreement");
        assert_eq!(document.extension(), None);
        assert_eq!(document.document_name(), "signed-framework-agreement");
    }

    #[test]
    fn supplier_name_is_sanitised() {
        assert_eq!(sanitise_supplier_name("  Acme  Digital Ltd. "), "Acme_Digital_Ltd");
        assert_eq!(sanitise_supplier_name("Smith & Sons"), "Smith_Sons");
        assert_eq!(sanitise_supplier_name("Build-It_Co"), "Build-It_Co");
    }
}
