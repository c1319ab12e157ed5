//! Core types for the supplier-frontend crate.
//!
//! This crate provides the data model the supplier frontend works on:
//! - `Question`, `QuestionKind` and `Section` - Content templates, including dynamic groups
//! - `QuestionId` and `SourcePath` - Widget identifiers and dotted record references
//! - `FlatSubmission` and `NestedSubmission` - Form answers before and after unflattening
//! - `RecordSource` and `ExpansionContext` - Application records that drive expansion
//! - `Snapshot`, `Statistic`, `Filter` and `Summary` - Statistic exports and their summaries

mod source_path;
pub use source_path::SourcePath;

mod question_id;
pub use question_id::QuestionId;

mod answer_value;
pub use answer_value::AnswerValue;

mod submission;
pub use submission::{FlatSubmission, NestedSubmission, UnflattenedSubmission};

mod question;
pub use question::{MULTIQUESTION_TYPE, MultiQuestion, Question, QuestionKind};

mod section;
pub use section::Section;

mod record;
pub use record::{ExpansionContext, RecordSource};

mod snapshot;
pub use snapshot::{Snapshot, Statistic, Summary};

mod filter;
pub use filter::{Criterion, Filter, Groupings};

mod error;
pub use error::{ContentError, Unresolved};
