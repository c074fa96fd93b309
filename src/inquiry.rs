//! Inquiry form state: field values plus the submission lifecycle.
//!
//! The lifecycle is a single tagged state so combinations like "submitting
//! and errored" are unrepresentable. The browser's `required` attributes are
//! kept on the inputs, but [`Inquiry::begin_submit`] re-checks the required
//! fields explicitly so the gate does not depend on the rendering surface.

use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Bridal,
    Makeup,
    Lessons,
    Pro,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Bridal,
        Category::Makeup,
        Category::Lessons,
        Category::Pro,
        Category::Other,
    ];

    /// Stable value used in the select control and the wire payload.
    pub fn value(&self) -> &'static str {
        match self {
            Category::Bridal => "bridal",
            Category::Makeup => "makeup",
            Category::Lessons => "lessons",
            Category::Pro => "pro",
            Category::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Bridal => "Bridal",
            Category::Makeup => "Makeup",
            Category::Lessons => "Personal Lessons",
            Category::Pro => "Pro Lessons",
            Category::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.value() == value)
    }
}

#[derive(Clone, PartialEq, Default, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub category: Option<Category>,
    pub message: String,
}

impl InquiryForm {
    /// All required fields populated. `message` is optional.
    pub fn is_complete(&self) -> bool {
        !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && !self.phone.is_empty()
            && self.category.is_some()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Clone, PartialEq, Default, Debug)]
pub struct Inquiry {
    pub form: InquiryForm,
    pub state: SubmissionState,
}

impl Inquiry {
    /// Validation gate for a submit attempt. Returns true only when a new
    /// submission was actually started; the caller must invoke the
    /// submission collaborator exactly once per `true`. Rejected when a
    /// required field is empty, a submission is already in flight, or a
    /// previous submission already succeeded this page session.
    pub fn begin_submit(&mut self) -> bool {
        if matches!(self.state, SubmissionState::Submitting | SubmissionState::Success) {
            return false;
        }
        if !self.form.is_complete() {
            return false;
        }
        self.state = SubmissionState::Submitting;
        true
    }

    /// Collaborator reported success: clear every field for the next visitor
    /// interaction and show the acknowledgment.
    pub fn submit_succeeded(&mut self) {
        self.form = InquiryForm::default();
        self.state = SubmissionState::Success;
    }

    /// Collaborator failed: keep the field values so the visitor can retry
    /// without re-entering anything.
    pub fn submit_failed(&mut self) {
        self.state = SubmissionState::Error;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Inquiry {
        Inquiry {
            form: InquiryForm {
                first_name: "Jane".into(),
                last_name: "Doe".into(),
                phone: "555-1234".into(),
                category: Some(Category::Bridal),
                message: String::new(),
            },
            state: SubmissionState::Idle,
        }
    }

    #[test]
    fn empty_required_field_blocks_submission() {
        let wipes: [fn(&mut InquiryForm); 4] = [
            |f| f.first_name.clear(),
            |f| f.last_name.clear(),
            |f| f.phone.clear(),
            |f| f.category = None,
        ];
        for wipe in wipes {
            let mut inquiry = filled();
            wipe(&mut inquiry.form);
            assert!(!inquiry.begin_submit());
            assert_eq!(inquiry.state, SubmissionState::Idle);
        }
    }

    #[test]
    fn message_is_optional() {
        let mut inquiry = filled();
        inquiry.form.message.clear();
        assert!(inquiry.begin_submit());
        assert_eq!(inquiry.state, SubmissionState::Submitting);
    }

    #[test]
    fn double_submit_while_in_flight_is_rejected() {
        let mut inquiry = filled();
        assert!(inquiry.begin_submit());
        assert!(!inquiry.begin_submit());
        assert_eq!(inquiry.state, SubmissionState::Submitting);
    }

    #[test]
    fn success_clears_fields_and_is_terminal() {
        let mut inquiry = filled();
        assert!(inquiry.begin_submit());
        inquiry.submit_succeeded();
        assert_eq!(inquiry.state, SubmissionState::Success);
        assert_eq!(inquiry.form, InquiryForm::default());
        // No resubmission from the success state.
        inquiry.form = filled().form;
        assert!(!inquiry.begin_submit());
        assert_eq!(inquiry.state, SubmissionState::Success);
    }

    #[test]
    fn failure_preserves_fields_for_retry() {
        let mut inquiry = filled();
        let before = inquiry.form.clone();
        assert!(inquiry.begin_submit());
        inquiry.submit_failed();
        assert_eq!(inquiry.state, SubmissionState::Error);
        assert_eq!(inquiry.form, before);
        // Retry is allowed from the error state.
        assert!(inquiry.begin_submit());
        assert_eq!(inquiry.state, SubmissionState::Submitting);
    }

    #[test]
    fn payload_uses_the_original_field_names() {
        let json = serde_json::to_value(filled().form).unwrap();
        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["lastName"], "Doe");
        assert_eq!(json["phone"], "555-1234");
        assert_eq!(json["category"], "bridal");
        assert_eq!(json["message"], "");
    }
}
