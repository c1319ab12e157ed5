//! Validation of the details of the person signing a framework agreement.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::SignerLimits;

/// Form field holding the signer's name.
pub const SIGNER_NAME_FIELD: &str = "signerName";

/// Form field holding the signer's role.
pub const SIGNER_ROLE_FIELD: &str = "signerRole";

/// Validated signer details, as stored under `signedAgreementDetails`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerDetails {
    pub signer_name: String,
    pub signer_role: String,
}

/// Field errors from the signer details form, keyed by form field.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", self.joined())]
pub struct SignerDetailsErrors {
    errors: BTreeMap<&'static str, String>,
}

impl SignerDetailsErrors {
    /// Get the message for a form field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Get an iterator over all field-message pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Get the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn joined(&self) -> String {
        let messages: Vec<&str> = self.errors.values().map(String::as_str).collect();
        messages.join("; ")
    }
}

/// Check the signer details form. Both fields are trimmed; every field error is reported.
pub fn validate_signer_details(
    name: Option<&str>,
    role: Option<&str>,
    limits: &SignerLimits,
) -> Result<SignerDetails, SignerDetailsErrors> {
    let name = name.unwrap_or_default().trim();
    let role = role.unwrap_or_default().trim();
    let over_limit = limits.max_chars.saturating_add(1);
    let mut errors = BTreeMap::new();

    if name.is_empty() {
        errors.insert(
            SIGNER_NAME_FIELD,
            "You must provide the full name of the person signing on behalf of the company".to_string(),
        );
    } else if name.chars().count() > limits.max_chars {
        errors.insert(
            SIGNER_NAME_FIELD,
            format!("You must provide a name under {over_limit} characters"),
        );
    }

    if role.is_empty() {
        errors.insert(
            SIGNER_ROLE_FIELD,
            "You must provide the role of the person signing on behalf of the company".to_string(),
        );
    } else if role.chars().count() > limits.max_chars {
        errors.insert(
            SIGNER_ROLE_FIELD,
            format!("You must provide a role under {over_limit} characters"),
        );
    }

    if !errors.is_empty() {
        return Err(SignerDetailsErrors { errors });
    }

    Ok(SignerDetails {
        signer_name: name.to_string(),
        signer_role: role.to_string(),
    })
}
