//! Questions and validated question input

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Lowest accepted difficulty
pub const MIN_DIFFICULTY: i64 = 1;

/// Highest accepted difficulty
pub const MAX_DIFFICULTY: i64 = 5;

/// Stored trivia question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

/// Validated input for a question that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: i64,
    difficulty: i32,
}

impl NewQuestion {
    /// Validate all four fields.
    ///
    /// # Rules
    /// - question and answer present and not blank
    /// - category present and positive
    /// - difficulty present and within 1..=5
    ///
    /// # Example
    /// ```
    /// use trivia_core::NewQuestion;
    ///
    /// assert!(NewQuestion::new(Some("2 + 2?".into()), Some("4".into()), Some(1), Some(1)).is_ok());
    /// assert!(NewQuestion::new(Some("2 + 2?".into()), None, Some(1), Some(1)).is_err());
    /// ```
    pub fn new(
        question: Option<String>,
        answer: Option<String>,
        category: Option<i64>,
        difficulty: Option<i64>,
    ) -> Result<Self, ValidationError> {
        let question = required_text("question", question)?;
        let answer = required_text("answer", answer)?;

        let category = category.ok_or(ValidationError::Missing { field: "category" })?;
        if category < 1 {
            return Err(ValidationError::OutOfRange {
                field: "category",
                min: 1,
                max: i64::MAX,
            });
        }

        let difficulty = difficulty.ok_or(ValidationError::Missing {
            field: "difficulty",
        })?;
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            return Err(ValidationError::OutOfRange {
                field: "difficulty",
                min: MIN_DIFFICULTY,
                max: MAX_DIFFICULTY,
            });
        }

        Ok(Self {
            question,
            answer,
            category,
            // range-checked above
            difficulty: difficulty as i32,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> i64 {
        self.category
    }

    pub fn difficulty(&self) -> i32 {
        self.difficulty
    }

    /// Attach a storage-assigned id.
    pub fn into_question(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

fn required_text(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::Missing { field })?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(
        question: Option<&str>,
        answer: Option<&str>,
        category: Option<i64>,
        difficulty: Option<i64>,
    ) -> Result<NewQuestion, ValidationError> {
        NewQuestion::new(
            question.map(str::to_owned),
            answer.map(str::to_owned),
            category,
            difficulty,
        )
    }

    #[test]
    fn accepts_complete_input() {
        let q = build(Some("  Who painted the Mona Lisa? "), Some("Da Vinci"), Some(2), Some(3))
            .unwrap();
        assert_eq!(q.question(), "Who painted the Mona Lisa?");
        assert_eq!(q.answer(), "Da Vinci");
        assert_eq!(q.category(), 2);
        assert_eq!(q.difficulty(), 3);

        let stored = q.into_question(11);
        assert_eq!(stored.id, 11);
        assert_eq!(stored.category, 2);
    }

    #[test]
    fn rejects_each_missing_field() {
        let err = build(None, Some("a"), Some(1), Some(1)).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "question" });

        let err = build(Some("q"), None, Some(1), Some(1)).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "answer" });

        let err = build(Some("q"), Some("a"), None, Some(1)).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "category" });

        let err = build(Some("q"), Some("a"), Some(1), None).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "difficulty" });
    }

    #[test]
    fn rejects_blank_text() {
        let err = build(Some("   "), Some("a"), Some(1), Some(1)).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "question" });

        let err = build(Some("q"), Some(""), Some(1), Some(1)).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "answer" });
    }

    #[test]
    fn difficulty_bounds() {
        assert!(build(Some("q"), Some("a"), Some(1), Some(1)).is_ok());
        assert!(build(Some("q"), Some("a"), Some(1), Some(5)).is_ok());

        let err = build(Some("q"), Some("a"), Some(1), Some(0)).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "difficulty", .. }));

        let err = build(Some("q"), Some("a"), Some(1), Some(6)).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "difficulty", .. }));
    }

    #[test]
    fn rejects_non_positive_category() {
        let err = build(Some("q"), Some("a"), Some(0), Some(1)).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "category", .. }));
    }
}
