use crate::logger;
use crate::models::{MAX_HINTS, SECONDS_PER_QUESTION, TOTAL_QUESTIONS};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_LOG_FILE: &str = "olympus_quiz.log";
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

const ENV_QUESTIONS_FILE: &str = "OLYMPUS_QUIZ_QUESTIONS_FILE";
const ENV_LOG_FILE: &str = "OLYMPUS_QUIZ_LOG";
const ENV_QUESTIONS_PER_GAME: &str = "OLYMPUS_QUIZ_QUESTIONS_PER_GAME";
const ENV_MAX_HINTS: &str = "OLYMPUS_QUIZ_MAX_HINTS";
const ENV_SECONDS_PER_QUESTION: &str = "OLYMPUS_QUIZ_SECONDS_PER_QUESTION";

/// Rules fixed for the lifetime of one playthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub questions_per_game: usize,
    pub max_hints: u32,
    pub seconds_per_question: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            questions_per_game: TOTAL_QUESTIONS,
            max_hints: MAX_HINTS,
            seconds_per_question: SECONDS_PER_QUESTION,
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuizConfig {
    pub rules: GameRules,
    pub tick_interval: Duration,
    /// `None` means the bank compiled into the binary.
    pub questions_file: Option<PathBuf>,
    pub log_file: PathBuf,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            rules: GameRules::default(),
            tick_interval: DEFAULT_TICK_INTERVAL,
            questions_file: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl QuizConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_QUESTIONS_FILE).filter(|p| !p.trim().is_empty()) {
            config.questions_file = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup(ENV_LOG_FILE).filter(|p| !p.trim().is_empty()) {
            config.log_file = PathBuf::from(path);
        }

        config.rules.questions_per_game = positive_or(
            &lookup,
            ENV_QUESTIONS_PER_GAME,
            config.rules.questions_per_game,
        );
        config.rules.max_hints = positive_or(&lookup, ENV_MAX_HINTS, config.rules.max_hints);
        config.rules.seconds_per_question = positive_or(
            &lookup,
            ENV_SECONDS_PER_QUESTION,
            config.rules.seconds_per_question,
        );

        config
    }
}

fn positive_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + PartialOrd + Default + Copy,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => value,
        _ => {
            logger::log(&format!(
                "Ignoring {}={:?}, expected a positive number",
                key, raw
            ));
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_game_constants() {
        let config = QuizConfig::from_lookup(|_| None);
        assert_eq!(config.rules.questions_per_game, 12);
        assert_eq!(config.rules.max_hints, 3);
        assert_eq!(config.rules.seconds_per_question, 15);
        assert_eq!(config.tick_interval, Duration::from_secs(1));
        assert!(config.questions_file.is_none());
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = QuizConfig::from_lookup(lookup_from(&[
            (ENV_QUESTIONS_FILE, "/tmp/myths.json"),
            (ENV_LOG_FILE, "quiz.log"),
            (ENV_QUESTIONS_PER_GAME, "5"),
            (ENV_MAX_HINTS, " 1 "),
            (ENV_SECONDS_PER_QUESTION, "30"),
        ]));
        assert_eq!(config.questions_file, Some(PathBuf::from("/tmp/myths.json")));
        assert_eq!(config.log_file, PathBuf::from("quiz.log"));
        assert_eq!(
            config.rules,
            GameRules {
                questions_per_game: 5,
                max_hints: 1,
                seconds_per_question: 30,
            }
        );
    }

    #[test]
    fn test_invalid_numbers_fall_back_to_defaults() {
        let config = QuizConfig::from_lookup(lookup_from(&[
            (ENV_QUESTIONS_PER_GAME, "many"),
            (ENV_MAX_HINTS, "0"),
            (ENV_SECONDS_PER_QUESTION, "-4"),
        ]));
        assert_eq!(config.rules, GameRules::default());
    }

    #[test]
    fn test_blank_paths_are_ignored() {
        let config = QuizConfig::from_lookup(lookup_from(&[(ENV_QUESTIONS_FILE, "  ")]));
        assert!(config.questions_file.is_none());
    }
}
