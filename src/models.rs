use serde::Deserialize;
use std::fmt;

pub const TOTAL_QUESTIONS: usize = 12;
pub const MAX_HINTS: u32 = 3;
pub const SECONDS_PER_QUESTION: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "easy", alias = "fácil", alias = "facil")]
    Easy,
    #[serde(rename = "medium", alias = "médio", alias = "medio")]
    Medium,
    #[serde(rename = "hard", alias = "difícil", alias = "dificil")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Difficulty::Easy => "Gods and basic concepts",
            Difficulty::Medium => "Heroes and creatures",
            Difficulty::Hard => "Complex myths and details",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single multiple-choice question. Immutable once loaded into a bank.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    /// Position in the bank it was loaded from.
    #[serde(skip)]
    pub id: usize,
    #[serde(rename = "question", alias = "text")]
    pub text: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer", alias = "correct_answer")]
    pub correct_answer: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub hint: Option<String>,
}

impl Question {
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answer == option
    }

    pub fn has_hint(&self) -> bool {
        self.hint.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    LevelSelect,
    ModeSelect,
    Quiz,
    Result,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Home => "home",
            Screen::LevelSelect => "level select",
            Screen::ModeSelect => "mode select",
            Screen::Quiz => "quiz",
            Screen::Result => "result",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    /// The question was already answered; nothing changed.
    AlreadyAnswered,
    /// The countdown ran out before an answer was given; nothing changed.
    TimeExpired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_accepts_portuguese_labels() {
        let parsed: Vec<Difficulty> =
            serde_json::from_str(r#"["fácil", "médio", "difícil", "medio", "hard"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                Difficulty::Easy,
                Difficulty::Medium,
                Difficulty::Hard,
                Difficulty::Medium,
                Difficulty::Hard
            ]
        );
    }

    #[test]
    fn test_question_deserializes_source_field_names() {
        let json = r#"{
            "question": "Who is the king of the gods?",
            "options": ["Zeus", "Hades"],
            "correctAnswer": "Zeus",
            "difficulty": "fácil",
            "hint": "He throws thunderbolts"
        }"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.text, "Who is the king of the gods?");
        assert_eq!(question.difficulty, Difficulty::Easy);
        assert!(question.is_correct("Zeus"));
        assert!(!question.is_correct("Hades"));
        assert!(question.has_hint());
    }

    #[test]
    fn test_question_hint_is_optional() {
        let json = r#"{"text": "Q", "options": ["A", "B"], "correct_answer": "A", "difficulty": "hard"}"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert!(question.hint.is_none());
        assert!(!question.has_hint());
    }

    #[test]
    fn test_screen_display() {
        assert_eq!(Screen::LevelSelect.to_string(), "level select");
        assert_eq!(Difficulty::Medium.to_string(), "Medium");
    }
}
