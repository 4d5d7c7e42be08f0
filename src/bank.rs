use crate::error::BankError;
use crate::models::{Difficulty, Question};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

const BUNDLED_QUESTIONS: &str = include_str!("../data/questions.json");

/// The immutable set of questions a quiz draws from.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Arc<Question>>,
}

impl QuestionBank {
    /// Builds a bank from already-validated questions, assigning ids by position.
    pub fn new(questions: Vec<Question>) -> Self {
        let questions = questions
            .into_iter()
            .enumerate()
            .map(|(id, mut question)| {
                question.id = id;
                Arc::new(question)
            })
            .collect();
        Self { questions }
    }

    pub fn bundled() -> Result<Self, BankError> {
        Self::from_json_str(BUNDLED_QUESTIONS)
    }

    pub fn load(path: &Path) -> Result<Self, BankError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self, BankError> {
        let mut questions: Vec<Question> = serde_json::from_str(content)?;
        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        for (index, question) in questions.iter_mut().enumerate() {
            if let Some(hint) = &question.hint
                && hint.trim().is_empty()
            {
                question.hint = None;
            }
            validate_question(question).map_err(|reason| BankError::Invalid { index, reason })?;
        }

        Ok(Self::new(questions))
    }

    /// Questions at `difficulty`, in source order. Empty when none match.
    pub fn questions_by_difficulty(&self, difficulty: Difficulty) -> Vec<Arc<Question>> {
        self.questions
            .iter()
            .filter(|q| q.difficulty == difficulty)
            .cloned()
            .collect()
    }

    pub fn count_for(&self, difficulty: Difficulty) -> usize {
        self.questions
            .iter()
            .filter(|q| q.difficulty == difficulty)
            .count()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn validate_question(question: &Question) -> Result<(), String> {
    if question.text.trim().is_empty() {
        return Err("question text is empty".to_string());
    }
    if question.options.len() < 2 {
        return Err(format!(
            "needs at least 2 options, found {}",
            question.options.len()
        ));
    }

    let mut seen = HashSet::new();
    for option in &question.options {
        if !seen.insert(option.as_str()) {
            return Err(format!("duplicate option '{}'", option));
        }
    }

    if !question.options.contains(&question.correct_answer) {
        return Err(format!(
            "correct answer '{}' is not one of the options",
            question.correct_answer
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn record(text: &str, difficulty: &str) -> String {
        format!(
            r#"{{"question": "{}", "options": ["A", "B", "C"], "correctAnswer": "A", "difficulty": "{}"}}"#,
            text, difficulty
        )
    }

    #[test]
    fn test_bundled_bank_has_a_full_game_per_level() {
        let bank = QuestionBank::bundled().unwrap();
        for difficulty in Difficulty::ALL {
            assert!(
                bank.count_for(difficulty) >= crate::models::TOTAL_QUESTIONS,
                "{} has too few questions",
                difficulty
            );
        }
    }

    #[test]
    fn test_filter_preserves_source_order() {
        let json = format!(
            "[{}, {}, {}, {}]",
            record("E1", "easy"),
            record("H1", "hard"),
            record("E2", "fácil"),
            record("E3", "easy")
        );
        let bank = QuestionBank::from_json_str(&json).unwrap();
        let easy: Vec<String> = bank
            .questions_by_difficulty(Difficulty::Easy)
            .iter()
            .map(|q| q.text.clone())
            .collect();
        assert_eq!(easy, vec!["E1", "E2", "E3"]);
        assert!(bank.questions_by_difficulty(Difficulty::Medium).is_empty());
    }

    #[test]
    fn test_ids_follow_file_position() {
        let json = format!("[{}, {}]", record("First", "easy"), record("Second", "hard"));
        let bank = QuestionBank::from_json_str(&json).unwrap();
        let hard = bank.questions_by_difficulty(Difficulty::Hard);
        assert_eq!(hard[0].id, 1);
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn test_rejects_correct_answer_outside_options() {
        let json = r#"[{"question": "Q", "options": ["A", "B"], "correctAnswer": "C", "difficulty": "easy"}]"#;
        match QuestionBank::from_json_str(json) {
            Err(BankError::Invalid { index, reason }) => {
                assert_eq!(index, 0);
                assert!(reason.contains("not one of the options"));
            }
            other => panic!("expected invalid record, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_duplicate_and_missing_options() {
        let duplicate = r#"[{"question": "Q", "options": ["A", "A"], "correctAnswer": "A", "difficulty": "easy"}]"#;
        assert!(matches!(
            QuestionBank::from_json_str(duplicate),
            Err(BankError::Invalid { .. })
        ));

        let single = r#"[{"question": "Q", "options": ["A"], "correctAnswer": "A", "difficulty": "easy"}]"#;
        assert!(matches!(
            QuestionBank::from_json_str(single),
            Err(BankError::Invalid { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_and_malformed_files() {
        assert!(matches!(QuestionBank::from_json_str("[]"), Err(BankError::Empty)));
        assert!(matches!(
            QuestionBank::from_json_str("{not json"),
            Err(BankError::Parse(_))
        ));
    }

    #[test]
    fn test_blank_hint_becomes_none() {
        let json = r#"[{"question": "Q", "options": ["A", "B"], "correctAnswer": "A", "difficulty": "easy", "hint": "  "}]"#;
        let bank = QuestionBank::from_json_str(json).unwrap();
        assert!(bank.questions_by_difficulty(Difficulty::Easy)[0].hint.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[{}]", record("From disk", "médio")).unwrap();

        let bank = QuestionBank::load(file.path()).unwrap();
        assert_eq!(bank.count_for(Difficulty::Medium), 1);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = QuestionBank::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(BankError::Io(_))));
    }
}
