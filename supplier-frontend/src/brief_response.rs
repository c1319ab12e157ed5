//! Helpers for the brief response pages: titles, outcomes and eligibility.

use std::fmt;

use crate::Section;

/// The heading of the application page for a brief.
pub fn application_title(brief_title: &str) -> String {
    format!("Apply for ‘{brief_title}’")
}

/// A copy of the section with the generic heading replaced by the brief's.
pub fn titled_for_brief(section: &Section, brief_title: &str) -> Section {
    section.clone().with_name(application_title(brief_title))
}

/// Whether a submitted brief response met every essential requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseOutcome {
    Success,
    Fail,
}

impl ResponseOutcome {
    /// Succeeds when every essential requirement is met, including when there are none.
    pub fn from_essential_requirements(answers: impl IntoIterator<Item = bool>) -> Self {
        if answers.into_iter().all(|met| met) {
            Self::Success
        } else {
            Self::Fail
        }
    }

    /// The `result` query parameter used to track applications.
    pub fn as_query_value(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Fail => "fail",
        }
    }

    /// The state shown on the response result page.
    pub fn result_state(&self) -> ResultState {
        match self {
            Self::Success => ResultState::SubmittedOk,
            Self::Fail => ResultState::SubmittedUnsuccessful,
        }
    }
}

/// The state of the response result page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultState {
    SubmittedOk,
    SubmittedUnsuccessful,
}

impl ResultState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SubmittedOk => "submitted_ok",
            Self::SubmittedUnsuccessful => "submitted_unsuccessful",
        }
    }
}

impl fmt::Display for ResultState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a supplier may not respond to a brief.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ineligibility {
    /// The reason shown on the error page.
    pub reason: &'static str,
    /// The analytics slug, which names the framework family when the supplier is not on it.
    pub data_reason_slug: String,
}

impl Ineligibility {
    /// Work out the reason from where the supplier has published services.
    ///
    /// `on_framework`: the supplier has a published service on the brief's
    /// framework. `on_lot`: it has one on the brief's lot. `framework_family`
    /// is the brief's framework family, e.g. `"digital-outcomes-and-specialists"`.
    pub fn determine(on_framework: bool, on_lot: bool, framework_family: &str) -> Self {
        let reason = match (on_framework, on_lot) {
            (true, true) => "supplier-not-on-role",
            (true, false) => "supplier-not-on-lot",
            (false, _) => {
                return Self {
                    reason: "supplier-not-on-framework",
                    data_reason_slug: format!("supplier-not-on-{framework_family}"),
                };
            }
        };

        Self {
            reason,
            data_reason_slug: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title() {
        assert_eq!(application_title("Build a thing"), "Apply for ‘Build a thing’");
    }

    #[test]
    fn titled_section_leaves_template_alone() {
        let template = Section::new("apply", "Apply for opportunity", Vec::new());
        let titled = titled_for_brief(&template, "Build a thing");
        assert_eq!(titled.name, "Apply for ‘Build a thing’");
        assert_eq!(template.name, "Apply for opportunity");
    }

    #[test]
    fn outcome() {
        let success = ResponseOutcome::from_essential_requirements([true, true]);
        assert_eq!(success, ResponseOutcome::Success);
        assert_eq!(success.as_query_value(), "success");
        assert_eq!(success.result_state().as_str(), "submitted_ok");

        let fail = ResponseOutcome::from_essential_requirements([true, false, true]);
        assert_eq!(fail, ResponseOutcome::Fail);
        assert_eq!(fail.as_query_value(), "fail");
        assert_eq!(fail.result_state().to_string(), "submitted_unsuccessful");
    }

    #[test]
    fn no_essential_requirements_is_a_success() {
        assert_eq!(
            ResponseOutcome::from_essential_requirements(Vec::new()),
            ResponseOutcome::Success
        );
    }

    #[test]
    fn ineligibility() {
        let role = Ineligibility::determine(true, true, "digital-outcomes-and-specialists");
        assert_eq!(role.reason, "supplier-not-on-role");
        assert_eq!(role.data_reason_slug, "supplier-not-on-role");

        let lot = Ineligibility::determine(true, false, "digital-outcomes-and-specialists");
        assert_eq!(lot.reason, "supplier-not-on-lot");
        assert_eq!(lot.data_reason_slug, "supplier-not-on-lot");

        let framework = Ineligibility::determine(false, false, "digital-outcomes-and-specialists");
        assert_eq!(framework.reason, "supplier-not-on-framework");
        assert_eq!(
            framework.data_reason_slug,
            "supplier-not-on-digital-outcomes-and-specialists"
        );
    }
}
