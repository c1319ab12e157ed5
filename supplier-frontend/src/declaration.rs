//! Supplier declaration progress as shown on a framework dashboard.

/// How far a supplier has got with a framework's declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationStatus {
    NotStarted,
    Started,
    Complete,
}

impl DeclarationStatus {
    /// Read the declaration `status` from the supplier's framework interest.
    ///
    /// `None` covers a supplier with no framework interest at all.
    pub fn from_api_status(status: Option<&str>) -> Self {
        match status {
            Some("complete") => Self::Complete,
            Some("started") => Self::Started,
            _ => Self::NotStarted,
        }
    }

    /// The dashboard copy for this status.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotStarted => "You need to make the supplier declaration",
            Self::Started => "You need to finish making the supplier declaration",
            Self::Complete => "You’ve made the supplier declaration",
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_api_status() {
        assert_eq!(DeclarationStatus::from_api_status(Some("complete")), DeclarationStatus::Complete);
        assert_eq!(DeclarationStatus::from_api_status(Some("started")), DeclarationStatus::Started);
        assert_eq!(DeclarationStatus::from_api_status(None), DeclarationStatus::NotStarted);
        assert_eq!(DeclarationStatus::from_api_status(Some("")), DeclarationStatus::NotStarted);
    }

    #[test]
    fn messages() {
        assert_eq!(
            DeclarationStatus::Complete.message(),
            "You’ve made the supplier declaration"
        );
        assert!(DeclarationStatus::Complete.is_complete());
        assert!(!DeclarationStatus::Started.is_complete());
    }
}
