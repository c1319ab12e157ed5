//! # supplier-frontend
//!
//! Question expansion, submission unflattening and form helpers for the
//! supplier-facing marketplace frontend.
//!
//! Route handlers fetch content templates and application records, then hand
//! them to this crate as already-parsed JSON. Nothing here performs I/O.
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//! use supplier_frontend::{
//!     ExpansionContext, ExpansionOptions, FlatSubmission, Section, expand_section,
//!     unflatten_section,
//! };
//!
//! let section: Section = serde_json::from_value(json!({
//!     "id": "apply",
//!     "name": "Apply for opportunity",
//!     "questions": [{
//!         "id": "essentialRequirements",
//!         "type": "multiquestion",
//!         "dynamic_field": "brief.essentialRequirements",
//!         "questions": [{"id": "yesno", "type": "boolean", "question": "{{ essentialRequirement }}"}]
//!     }]
//! }))
//! .unwrap();
//! let context = ExpansionContext::new("digital-specialists")
//!     .with_record("brief", json!({"essentialRequirements": ["PHP", "Python"]}));
//!
//! let page = expand_section(&section, &context, &ExpansionOptions::default()).unwrap();
//! assert_eq!(page.questions()[0].nested_questions()[1].question(), Some("Python"));
//!
//! let submission = FlatSubmission::new().with_bool("yesno-1", true);
//! let unflattened = unflatten_section(&section, &submission, &context).unwrap();
//! assert_eq!(
//!     serde_json::Value::Object(unflattened.payload()),
//!     json!({"essentialRequirements": [null, {"yesno-1": true}]})
//! );
//! ```
//!
//! ## Modules
//!
//! - Dynamic groups: `expand_section`, `expand_group`
//! - Submissions: `unflatten_section`, `unflatten_group`
//! - Dashboards: `format_snapshots`, `label_and_count`, `sum_counts`, `DeclarationStatus`
//! - Forms: `validate_clarification_question`, `validate_signer_details`
//! - Framework agreements: `validate_agreement_upload`, `AgreementDocument`
//! - Brief responses: `application_title`, `ResponseOutcome`, `Ineligibility`

// Re-export all types from supplier-frontend-types
pub use supplier_frontend_types::*;

mod options;
pub use options::{ClarificationLimits, ExpansionOptions, FrontendConfig, SignerLimits};

mod expand;
pub use expand::{expand_group, expand_section};

mod unflatten;
pub use unflatten::{unflatten_group, unflatten_section};

mod counts;
pub use counts::{format_snapshots, label_and_count, sum_counts};

mod clarification;
pub use clarification::{ClarificationError, validate_clarification_question};

mod signer;
pub use signer::{
    SIGNER_NAME_FIELD, SIGNER_ROLE_FIELD, SignerDetails, SignerDetailsErrors,
    validate_signer_details,
};

mod agreement;
pub use agreement::{
    AgreementDocument, AgreementUploadError, MAX_AGREEMENT_BYTES, SIGNED_AGREEMENT_NAME,
    sanitise_supplier_name, validate_agreement_upload,
};

mod brief_response;
pub use brief_response::{
    Ineligibility, ResponseOutcome, ResultState, application_title, titled_for_brief,
};

mod declaration;
pub use declaration::DeclarationStatus;
