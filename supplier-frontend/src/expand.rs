//! Expansion of dynamic question groups.
//!
//! A dynamic group lists nested question templates once; the page shows one
//! copy of them per item of a list on an application record (one yes/no and
//! evidence pair per essential requirement, for instance).

use tera::{Context, Tera};
use tracing::debug;

use crate::{ContentError, ExpansionContext, ExpansionOptions, Question, RecordSource, Section};

/// Build a copy of `section` with every dynamic group expanded.
///
/// Other questions are copied unchanged. The template section is not modified.
///
/// # Errors
/// Fails if any dynamic group's source path does not resolve to a list, or a
/// text field is not a valid template.
pub fn expand_section(
    section: &Section,
    context: &ExpansionContext,
    options: &ExpansionOptions,
) -> Result<Section, ContentError> {
    let questions = section
        .questions()
        .iter()
        .map(|question| expand_group(question, context, options))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Section {
        id: section.id.clone(),
        name: section.name.clone(),
        description: section.description.clone(),
        questions,
    })
}

/// Build a copy of `group` whose nested questions are the expanded instances.
///
/// Instances are ordered by source item, then by template order: all of item
/// 0's questions come before item 1's. Each instance's id (and followup, if the
/// template has one) gets a `-<index>` suffix, and each configured text field
/// present on the template is rendered with the lot slug and the current item.
/// Absent text fields stay absent. Substituted values are HTML-escaped unless
/// [`ExpansionOptions::autoescape`] is off.
///
/// Questions that are not dynamic groups are returned as plain copies.
pub fn expand_group(
    group: &Question,
    context: &ExpansionContext,
    options: &ExpansionOptions,
) -> Result<Question, ContentError> {
    let Some(path) = group.dynamic_field() else {
        return Ok(group.clone());
    };

    let items = context.resolve_list(path)?;
    let templates = group.nested_questions();

    let mut expanded = Vec::with_capacity(items.len() * templates.len());
    for (index, item) in items.iter().enumerate() {
        let mut variables = Context::new();
        variables.insert(options.lot_variable.as_str(), context.lot_slug());
        variables.insert(options.item_variable.as_str(), item);

        for template in templates {
            expanded.push(instantiate(template, index, &variables, options)?);
        }
    }

    debug!(
        group = %group.id(),
        source = %path,
        items = items.len(),
        questions = expanded.len(),
        "expanded dynamic group"
    );

    Ok(group.with_nested_questions(expanded))
}

fn instantiate(
    template: &Question,
    index: usize,
    variables: &Context,
    options: &ExpansionOptions,
) -> Result<Question, ContentError> {
    let mut question = template.clone();
    question.set_id(template.id().indexed(index));
    if let Some(followup) = template.followup() {
        question.set_followup(followup.indexed(index));
    }

    for field in &options.text_fields {
        let Some(text) = template.text_field(field) else {
            continue;
        };
        let rendered = Tera::one_off(text, variables, options.autoescape)
            .map_err(|err| ContentError::render(template.id(), field, err))?;
        question.set_text_field(field, rendered);
    }

    Ok(question)
}
