use serde::{Deserialize, Serialize};

/// A single-question quiz belonging to exactly one course
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Quiz {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub question: String,
    pub correct_answer: String,
}

impl Quiz {
    /// Grade a submitted answer
    ///
    /// Both sides are lower-cased and trimmed of surrounding whitespace
    /// before an exact comparison. No partial credit, no numeric tolerance,
    /// no alternate accepted answers. Evaluation is stateless; nothing about
    /// the attempt is persisted.
    pub fn check_answer(&self, submitted: &str) -> bool {
        submitted.trim().to_lowercase() == self.correct_answer.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(correct_answer: &str) -> Quiz {
        Quiz {
            id: 1,
            course_id: 1,
            title: "Geography Quiz 1".to_string(),
            question: "What is the capital of France?".to_string(),
            correct_answer: correct_answer.to_string(),
        }
    }

    #[test]
    fn test_check_answer_exact_match() {
        assert!(quiz("Paris").check_answer("Paris"));
    }

    #[test]
    fn test_check_answer_case_insensitive() {
        assert!(quiz("Paris").check_answer("paris"));
        assert!(quiz("paris").check_answer("PARIS"));
    }

    #[test]
    fn test_check_answer_ignores_surrounding_whitespace() {
        assert!(quiz("Paris").check_answer("  Paris "));
        assert!(quiz(" Paris ").check_answer("paris"));
    }

    #[test]
    fn test_check_answer_no_partial_credit() {
        assert!(!quiz("Paris").check_answer("Par"));
        assert!(!quiz("Paris").check_answer("Paris, France"));
        assert!(!quiz("5").check_answer("5.0"));
    }

    #[test]
    fn test_check_answer_inner_whitespace_significant() {
        assert!(!quiz("New York").check_answer("NewYork"));
        assert!(quiz("New York").check_answer(" new york "));
    }
}
