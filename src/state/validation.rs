//! Submit-time validation of the interview form

use super::forms::{FieldName, InterviewForm};
use thiserror::Error;

/// Reasons a form is not ready to be submitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your email address.")]
    MissingSubmitterEmail,

    #[error("Please add at least one recipient email.")]
    MissingRecipientEmail,

    #[error("Please enter a job role.")]
    MissingJobRole,

    #[error("Please select a difficulty level.")]
    MissingDifficulty,

    #[error("{} must be a whole number of 0 or more.", .field.label())]
    InvalidQuestionCount { field: FieldName },
}

/// Recipient slots that hold something other than whitespace, trimmed, in order
pub fn valid_recipients(form: &InterviewForm) -> Vec<String> {
    form.recipient_emails
        .iter()
        .map(|email| email.trim())
        .filter(|email| !email.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a question count typed into the form
pub fn parse_count(field: FieldName, raw: &str) -> Result<u32, ValidationError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidQuestionCount { field })
}

/// Check the form and return the usable recipient addresses.
///
/// Checks run in a fixed order and stop at the first failure: submitter
/// email, recipients, job role, difficulty, then both question counts.
/// Blank recipient slots are dropped rather than rejected.
pub fn validate(form: &InterviewForm) -> Result<Vec<String>, ValidationError> {
    let recipients = valid_recipients(form);

    if form.submitter_email.trim().is_empty() {
        return Err(ValidationError::MissingSubmitterEmail);
    }
    if recipients.is_empty() {
        return Err(ValidationError::MissingRecipientEmail);
    }
    if form.job_role.trim().is_empty() {
        return Err(ValidationError::MissingJobRole);
    }
    if form.difficulty_level.is_none() {
        return Err(ValidationError::MissingDifficulty);
    }
    parse_count(
        FieldName::ObjectiveQuestionCount,
        &form.objective_question_count,
    )?;
    parse_count(
        FieldName::ProgrammingQuestionCount,
        &form.programming_question_count,
    )?;

    Ok(recipients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Difficulty;
    use pretty_assertions::assert_eq;

    fn valid_form() -> InterviewForm {
        InterviewForm {
            job_role: "Backend Engineer".to_string(),
            difficulty_level: Some(Difficulty::Medium),
            objective_question_count: "10".to_string(),
            programming_question_count: "5".to_string(),
            submitter_email: "me@x.com".to_string(),
            recipient_emails: vec!["a@x.com".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(validate(&valid_form()), Ok(vec!["a@x.com".to_string()]));
    }

    #[test]
    fn test_blank_submitter_email_fails_first() {
        for email in ["", "   ", "\t"] {
            let form = InterviewForm {
                submitter_email: email.to_string(),
                recipient_emails: vec![String::new()],
                job_role: String::new(),
                ..valid_form()
            };
            assert_eq!(validate(&form), Err(ValidationError::MissingSubmitterEmail));
        }
    }

    #[test]
    fn test_all_blank_recipients_fail() {
        let form = InterviewForm {
            recipient_emails: vec![String::new(), "  ".to_string()],
            ..valid_form()
        };
        assert_eq!(validate(&form), Err(ValidationError::MissingRecipientEmail));
    }

    #[test]
    fn test_blank_slots_are_filtered_in_order() {
        let form = InterviewForm {
            recipient_emails: vec![
                " b@x.com".to_string(),
                String::new(),
                "a@x.com ".to_string(),
                "   ".to_string(),
            ],
            ..valid_form()
        };
        assert_eq!(
            validate(&form),
            Ok(vec!["b@x.com".to_string(), "a@x.com".to_string()])
        );
    }

    #[test]
    fn test_two_recipients_one_blank() {
        let form = InterviewForm {
            recipient_emails: vec!["a@x.com".to_string(), String::new()],
            ..valid_form()
        };
        assert_eq!(validate(&form), Ok(vec!["a@x.com".to_string()]));
    }

    #[test]
    fn test_missing_job_role() {
        let form = InterviewForm {
            job_role: "  ".to_string(),
            ..valid_form()
        };
        assert_eq!(validate(&form), Err(ValidationError::MissingJobRole));
    }

    #[test]
    fn test_missing_difficulty() {
        let form = InterviewForm {
            difficulty_level: None,
            ..valid_form()
        };
        assert_eq!(validate(&form), Err(ValidationError::MissingDifficulty));
    }

    #[test]
    fn test_invalid_counts() {
        let form = InterviewForm {
            objective_question_count: String::new(),
            ..valid_form()
        };
        assert_eq!(
            validate(&form),
            Err(ValidationError::InvalidQuestionCount {
                field: FieldName::ObjectiveQuestionCount
            })
        );

        let form = InterviewForm {
            programming_question_count: "99999999999".to_string(),
            ..valid_form()
        };
        assert_eq!(
            validate(&form),
            Err(ValidationError::InvalidQuestionCount {
                field: FieldName::ProgrammingQuestionCount
            })
        );
    }

    #[test]
    fn test_zero_is_a_valid_count() {
        let form = InterviewForm {
            objective_question_count: "0".to_string(),
            ..valid_form()
        };
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::MissingSubmitterEmail.to_string(),
            "Please enter your email address."
        );
        assert_eq!(
            ValidationError::InvalidQuestionCount {
                field: FieldName::ObjectiveQuestionCount
            }
            .to_string(),
            "Objective Questions must be a whole number of 0 or more."
        );
    }
}
