//! Build the application page for a brief, regroup a submission and summarise dashboard snapshots.
//!
//! Run with `RUST_LOG=debug` to see what each step did.

use anyhow::Context;
use serde_json::json;
use supplier_frontend::{
    ExpansionContext, FlatSubmission, FrontendConfig, Groupings, Section, Snapshot,
    expand_section, format_snapshots, titled_for_brief, unflatten_section,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = FrontendConfig::default();

    let brief = json!({
        "title": "Find an alpha team",
        "lotSlug": "digital-specialists",
        "niceToHaveRequirements": ["Worked on GOV.UK", "Used Python in production"]
    });

    let section: Section = serde_json::from_value(json!({
        "id": "apply-for-opportunity",
        "name": "Apply for opportunity",
        "questions": [
            {"id": "respondToEmailAddress", "type": "text", "question": "Email address"},
            {
                "id": "niceToHaveRequirementsMultiquestion",
                "type": "multiquestion",
                "dynamic_field": "brief.niceToHaveRequirements",
                "questions": [
                    {"id": "yesno", "type": "boolean", "question": "{{ essentialRequirement }}", "followup": "evidence"},
                    {"id": "evidence", "type": "textbox_large", "question": "Evidence for {{ lot }}"}
                ]
            }
        ]
    }))
    .context("parsing the section template")?;

    let lot = brief["lotSlug"].as_str().unwrap_or_default();
    let title = brief["title"].as_str().unwrap_or_default().to_string();
    let context = ExpansionContext::new(lot).with_record("brief", brief);

    let page = expand_section(&titled_for_brief(&section, &title), &context, &config.expansion)?;
    println!("{}", page.name);
    for group in page.dynamic_groups() {
        for question in group.nested_questions() {
            println!("  {}: {}", question.id(), question.question().unwrap_or_default());
        }
    }

    let submission = FlatSubmission::new()
        .with_string("respondToEmailAddress", "supplier@example.com")
        .with_bool("yesno-0", true)
        .with_string("evidence-0", "Built the registers service")
        .with_bool("yesno-1", false)
        .with_null("evidence-1");
    let unflattened = unflatten_section(&section, &submission, &context)?;
    println!("{}", serde_json::to_string_pretty(&unflattened.payload())?);

    let snapshots: Vec<Snapshot> = serde_json::from_value(json!([
        {
            "createdAt": "2016-02-01T09:00:00Z",
            "data": {"services": [{"status": "submitted", "count": 3}, {"status": "not-submitted", "count": 5}]}
        },
        {
            "createdAt": "2016-02-02T09:00:00Z",
            "data": {"services": [{"status": "submitted", "count": 7}, {"status": "not-submitted", "count": 2}]}
        }
    ]))
    .context("parsing snapshots")?;
    let groupings: Groupings = serde_json::from_value(json!({
        "submitted": {"status": "submitted"},
        "all": {"status": ["submitted", "not-submitted"]}
    }))?;
    for summary in format_snapshots(&snapshots, "services", &groupings) {
        println!("{}", serde_json::to_string(&summary)?);
    }

    Ok(())
}
