//! Wire payload sent to the webhook

use super::forms::{Difficulty, FieldName, InterviewForm};
use super::validation::{parse_count, ValidationError};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// JSON body POSTed to the webhook endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub job_role: String,
    #[serde(serialize_with = "serialize_difficulty")]
    pub difficulty_level: Option<Difficulty>,
    pub objective_questions: u32,
    pub programming_questions: u32,
    pub submitter_email: String,
    pub recipient_emails: Vec<String>,
    /// ISO-8601, UTC, millisecond precision
    pub submitted_at: String,
}

/// Unset difficulty goes over the wire as an empty string
fn serialize_difficulty<S>(value: &Option<Difficulty>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.map_or("", |d| d.as_str()))
}

/// Build the payload from a validated form.
///
/// `recipients` is the filtered list returned by `validate`. The timestamp is
/// passed in so callers decide the clock.
pub fn build_payload(
    form: &InterviewForm,
    recipients: Vec<String>,
    submitted_at: DateTime<Utc>,
) -> Result<SubmissionPayload, ValidationError> {
    Ok(SubmissionPayload {
        job_role: form.job_role.trim().to_string(),
        difficulty_level: form.difficulty_level,
        objective_questions: parse_count(
            FieldName::ObjectiveQuestionCount,
            &form.objective_question_count,
        )?,
        programming_questions: parse_count(
            FieldName::ProgrammingQuestionCount,
            &form.programming_question_count,
        )?,
        submitter_email: form.submitter_email.trim().to_string(),
        recipient_emails: recipients,
        submitted_at: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::validation::validate;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap()
    }

    fn form_with_recipients(recipients: &[&str]) -> InterviewForm {
        InterviewForm {
            job_role: " Backend Engineer ".to_string(),
            difficulty_level: Some(Difficulty::Hard),
            objective_question_count: "10".to_string(),
            programming_question_count: "5".to_string(),
            submitter_email: "me@x.com".to_string(),
            recipient_emails: recipients.iter().map(|r| r.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_payload_json_shape() {
        let form = form_with_recipients(&["a@x.com", "b@x.com"]);
        let recipients = validate(&form).unwrap();
        let payload = build_payload(&form, recipients, fixed_time()).unwrap();

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "jobRole": "Backend Engineer",
                "difficultyLevel": "hard",
                "objectiveQuestions": 10,
                "programmingQuestions": 5,
                "submitterEmail": "me@x.com",
                "recipientEmails": ["a@x.com", "b@x.com"],
                "submittedAt": "2024-03-05T14:30:00.000Z"
            })
        );
    }

    #[test]
    fn test_blank_recipient_slot_dropped_from_payload() {
        let form = form_with_recipients(&["a@x.com", ""]);
        let recipients = validate(&form).unwrap();
        let payload = build_payload(&form, recipients, fixed_time()).unwrap();
        assert_eq!(payload.recipient_emails, vec!["a@x.com".to_string()]);
    }

    #[test]
    fn test_unset_difficulty_serializes_empty() {
        let form = InterviewForm {
            difficulty_level: None,
            ..form_with_recipients(&["a@x.com"])
        };
        let payload = build_payload(&form, vec!["a@x.com".to_string()], fixed_time()).unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["difficultyLevel"], json!(""));
    }

    #[test]
    fn test_counts_parse_base_ten_with_whitespace() {
        let form = InterviewForm {
            objective_question_count: " 007 ".to_string(),
            ..form_with_recipients(&["a@x.com"])
        };
        let payload = build_payload(&form, vec!["a@x.com".to_string()], fixed_time()).unwrap();
        assert_eq!(payload.objective_questions, 7);
    }

    #[test]
    fn test_unparsable_count_is_rejected() {
        let form = InterviewForm {
            programming_question_count: "five".to_string(),
            ..form_with_recipients(&["a@x.com"])
        };
        let result = build_payload(&form, vec!["a@x.com".to_string()], fixed_time());
        assert_eq!(
            result,
            Err(ValidationError::InvalidQuestionCount {
                field: FieldName::ProgrammingQuestionCount
            })
        );
    }

    #[test]
    fn test_submitted_at_keeps_milliseconds() {
        let at = fixed_time() + chrono::Duration::milliseconds(42);
        let form = form_with_recipients(&["a@x.com"]);
        let payload = build_payload(&form, vec!["a@x.com".to_string()], at).unwrap();
        assert_eq!(payload.submitted_at, "2024-03-05T14:30:00.042Z");
    }
}
