//! Regrouping of flat form answers by dynamic group.
//!
//! The rendered form posts one field per widget (`yesno-0`, `evidence-1`, ...).
//! The data API expects each dynamic group's answers as a list with one slot
//! per source item. The caller's submission is never modified.

use std::collections::HashSet;

use tracing::debug;

use crate::{
    ContentError, FlatSubmission, NestedSubmission, Question, QuestionId, RecordSource, Section,
    UnflattenedSubmission,
};

/// Regroup the answers of every dynamic group in a template section.
///
/// `section` must be the template (unexpanded) section: keys are matched as a
/// nested template id followed by `-<index>`. A key that would match more than
/// one group belongs to the first group on the page.
///
/// # Errors
/// Fails if a group's source path does not resolve to a list, or a matched
/// key's index is not below the list's length. Nothing is returned on error.
pub fn unflatten_section(
    section: &Section,
    submission: &FlatSubmission,
    records: &impl RecordSource,
) -> Result<UnflattenedSubmission, ContentError> {
    let mut unflattened = UnflattenedSubmission {
        nested: NestedSubmission::new(),
        remaining: submission.clone(),
    };

    for group in section.dynamic_groups() {
        absorb_group(group, &mut unflattened, records)?;
    }

    Ok(unflattened)
}

/// Regroup the answers of a single dynamic group.
///
/// Returns an empty nested submission with every field remaining when
/// `group` is not dynamic.
pub fn unflatten_group(
    group: &Question,
    submission: &FlatSubmission,
    records: &impl RecordSource,
) -> Result<UnflattenedSubmission, ContentError> {
    let mut unflattened = UnflattenedSubmission {
        nested: NestedSubmission::new(),
        remaining: submission.clone(),
    };
    absorb_group(group, &mut unflattened, records)?;
    Ok(unflattened)
}

/// Move one group's answers out of `unflattened.remaining` into its slots.
fn absorb_group(
    group: &Question,
    unflattened: &mut UnflattenedSubmission,
    records: &impl RecordSource,
) -> Result<(), ContentError> {
    let Some(path) = group.dynamic_field() else {
        return Ok(());
    };

    let len = records.resolve_list(path)?.len();
    let templates: HashSet<&str> = group
        .nested_questions()
        .iter()
        .map(|question| question.id().as_str())
        .collect();

    let mut slots: Vec<Option<FlatSubmission>> = vec![None; len];
    let mut matched: Vec<QuestionId> = Vec::new();

    for (key, value) in &unflattened.remaining {
        let Some((template, index)) = key.split_index() else {
            continue;
        };
        if !templates.contains(template) {
            continue;
        }
        let Some(slot) = slots.get_mut(index) else {
            return Err(ContentError::IndexOutOfRange {
                group: group.id().clone(),
                key: key.clone(),
                index,
                len,
            });
        };
        slot.get_or_insert_with(FlatSubmission::new)
            .insert(key.clone(), value.clone());
        matched.push(key.clone());
    }

    for key in &matched {
        unflattened.remaining.remove(key);
    }

    debug!(
        group = %group.id(),
        items = len,
        answered = slots.iter().filter(|slot| slot.is_some()).count(),
        keys = matched.len(),
        "unflattened dynamic group"
    );

    unflattened.nested.insert(group.id().clone(), slots);
    Ok(())
}
