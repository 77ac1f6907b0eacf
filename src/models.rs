//! Data models for account records.

use num_bigint::BigUint;
use serde::Serialize;

/// One security question and its answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityQuestion {
    pub question: String,
    pub answer: String,
}

/// A single account credential record, held in memory for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    /// Display name of the website or service
    pub website_name: String,
    /// Validated URL, or `None` when the user skipped it
    pub website_url: Option<String>,
    /// Login name, free-form
    pub username: String,
    /// Numeric encoding of the current password; the characters themselves
    /// are never stored
    pub password_number: BigUint,
    /// Recovery questions in entry order, or `None` when none were provided
    pub security_questions: Option<Vec<SecurityQuestion>>,
    /// Encodings replaced by password changes, oldest first
    pub password_history: Vec<BigUint>,
}

impl AccountRecord {
    /// Create a record with an empty password history.
    pub fn new(
        website_name: String,
        website_url: Option<String>,
        username: String,
        password_number: BigUint,
        security_questions: Option<Vec<SecurityQuestion>>,
    ) -> Self {
        AccountRecord {
            website_name,
            website_url,
            username,
            password_number,
            security_questions,
            password_history: Vec::new(),
        }
    }

    /// Replace the username, returning the previous one.
    pub fn set_username(&mut self, username: String) -> String {
        std::mem::replace(&mut self.username, username)
    }

    /// Install a new password encoding, archiving the current one.
    ///
    /// The record does not compare old and new; callers decide whether a
    /// matching encoding is acceptable before installing it.
    pub fn set_password(&mut self, password_number: BigUint) {
        let previous = std::mem::replace(&mut self.password_number, password_number);
        self.password_history.push(previous);
    }

    /// Number of security questions on file.
    pub fn security_question_count(&self) -> usize {
        self.security_questions.as_ref().map_or(0, |qs| qs.len())
    }

    /// Build the secrets-free projection used for display and JSON output.
    pub fn summary(&self) -> RecordSummary {
        RecordSummary {
            website_name: self.website_name.clone(),
            website_url: self.website_url.clone(),
            username: self.username.clone(),
            password_digits: self.password_number.to_string().len(),
            security_questions: self.security_question_count(),
            password_changes: self.password_history.len(),
        }
    }
}

/// What a record looks like to the outside: everything except secret
/// material. The password appears only as the digit count of its encoding.
#[derive(Debug, Clone, Serialize)]
pub struct RecordSummary {
    pub website_name: String,
    pub website_url: Option<String>,
    pub username: String,
    pub password_digits: usize,
    pub security_questions: usize,
    pub password_changes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> AccountRecord {
        AccountRecord::new(
            "Example".to_string(),
            Some("https://example.com".to_string()),
            "alice".to_string(),
            BigUint::from(9798u32),
            None,
        )
    }

    #[test]
    fn test_set_username_returns_the_old_name() {
        let mut record = sample_record();
        let old = record.set_username("bob".to_string());
        assert_eq!(old, "alice");
        assert_eq!(record.username, "bob");
    }

    #[test]
    fn test_set_password_archives_oldest_first() {
        let mut record = sample_record();
        record.set_password(BigUint::from(6598u32));
        record.set_password(BigUint::from(9897u32));

        assert_eq!(record.password_number, BigUint::from(9897u32));
        assert_eq!(
            record.password_history,
            vec![BigUint::from(9798u32), BigUint::from(6598u32)]
        );
    }

    #[test]
    fn test_summary_counts_instead_of_exposing_values() {
        let mut record = sample_record();
        record.security_questions = Some(vec![
            SecurityQuestion {
                question: "First pet?".to_string(),
                answer: "Rex".to_string(),
            },
            SecurityQuestion {
                question: "First street?".to_string(),
                answer: "Elm".to_string(),
            },
        ]);
        record.set_password(BigUint::from(6598u32));

        let summary = record.summary();
        assert_eq!(summary.website_name, "Example");
        assert_eq!(summary.username, "alice");
        assert_eq!(summary.password_digits, 4);
        assert_eq!(summary.security_questions, 2);
        assert_eq!(summary.password_changes, 1);
    }

    #[test]
    fn test_new_record_has_no_history() {
        assert!(sample_record().password_history.is_empty());
        assert_eq!(sample_record().security_question_count(), 0);
    }
}
