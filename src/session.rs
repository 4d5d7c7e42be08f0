use crate::bank::QuestionBank;
use crate::config::GameRules;
use crate::error::SessionError;
use crate::logger;
use crate::models::{AnswerOutcome, Difficulty, Question, Screen};
use crate::sampler::sample;
use crate::timer::{Countdown, TickOutcome, TimerTick};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// The quiz state machine.
///
/// Owns every piece of mutable game state. The presentation layer drives it
/// through the transition methods and renders from the read-only accessors.
#[derive(Debug)]
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    rules: GameRules,
    rng: StdRng,
    screen: Screen,
    selected_difficulty: Option<Difficulty>,
    timed_mode: bool,
    active_questions: Vec<Arc<Question>>,
    current_index: usize,
    selected_option: Option<String>,
    answers_locked: bool,
    score: usize,
    hints_used: u32,
    hints_remaining: u32,
    hint_revealed: bool,
    countdown: Countdown,
}

impl QuizSession {
    pub fn new(bank: Arc<QuestionBank>, rules: GameRules) -> Self {
        Self::with_rng(bank, rules, StdRng::from_entropy())
    }

    pub fn with_rng(bank: Arc<QuestionBank>, rules: GameRules, rng: StdRng) -> Self {
        Self {
            bank,
            rules,
            rng,
            screen: Screen::Home,
            selected_difficulty: None,
            timed_mode: false,
            active_questions: Vec::new(),
            current_index: 0,
            selected_option: None,
            answers_locked: false,
            score: 0,
            hints_used: 0,
            hints_remaining: rules.max_hints,
            hint_revealed: false,
            countdown: Countdown::new(rules.seconds_per_question),
        }
    }

    pub fn start_quiz_flow(&mut self) -> Result<(), SessionError> {
        self.require("start_quiz_flow", Screen::Home)?;
        self.go_to(Screen::LevelSelect);
        Ok(())
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> Result<(), SessionError> {
        self.require("select_difficulty", Screen::LevelSelect)?;
        self.selected_difficulty = Some(difficulty);
        self.active_questions = self.draw_questions(difficulty);
        self.go_to(Screen::ModeSelect);
        Ok(())
    }

    pub fn select_mode(&mut self, timed: bool) -> Result<(), SessionError> {
        self.require("select_mode", Screen::ModeSelect)?;
        if self.selected_difficulty.is_none() {
            return Err(SessionError::PreconditionNotMet {
                operation: "select_mode",
                reason: "no difficulty has been selected".to_string(),
            });
        }
        if self.active_questions.is_empty() {
            return Err(self.no_questions("select_mode"));
        }
        self.timed_mode = timed;
        logger::log(&format!(
            "Starting {} playthrough with {} questions",
            if timed { "timed" } else { "untimed" },
            self.active_questions.len()
        ));
        self.begin_playthrough();
        Ok(())
    }

    pub fn submit_answer(&mut self, option: &str) -> Result<AnswerOutcome, SessionError> {
        self.require("submit_answer", Screen::Quiz)?;
        if self.answers_locked {
            return Ok(AnswerOutcome::AlreadyAnswered);
        }
        if self.timed_mode && self.countdown.is_expired() {
            return Ok(AnswerOutcome::TimeExpired);
        }
        let Some(question) = self.active_questions.get(self.current_index).cloned() else {
            return Err(self.no_questions("submit_answer"));
        };

        self.countdown.stop();
        self.selected_option = Some(option.to_string());
        self.answers_locked = true;

        let outcome = if question.is_correct(option) {
            self.score += 1;
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect
        };
        logger::log(&format!(
            "Question {} answered: {:?} (score {})",
            self.current_index + 1,
            outcome,
            self.score
        ));
        Ok(outcome)
    }

    /// Moves to the next question, or to the result screen after the last one.
    /// Unanswered questions simply score nothing.
    pub fn advance_question(&mut self) -> Result<(), SessionError> {
        self.require("advance_question", Screen::Quiz)?;
        self.countdown.stop();

        if self.current_index + 1 < self.active_questions.len() {
            self.current_index += 1;
            self.start_question();
        } else {
            logger::log(&format!(
                "Playthrough finished: {}/{} with {} hints",
                self.score,
                self.active_questions.len(),
                self.hints_used
            ));
            self.selected_option = None;
            self.answers_locked = false;
            self.hint_revealed = false;
            self.go_to(Screen::Result);
        }
        Ok(())
    }

    /// Reveals the current question's hint. Returns `false` without changing
    /// anything when no hint can be spent; double presses are expected here
    /// and are not treated as errors.
    pub fn use_hint(&mut self) -> Result<bool, SessionError> {
        self.require("use_hint", Screen::Quiz)?;

        let has_hint = self
            .current_question()
            .is_some_and(|question| question.has_hint());
        if self.hints_remaining == 0
            || !has_hint
            || self.answers_locked
            || self.hint_revealed
            || self.is_time_up()
        {
            return Ok(false);
        }

        self.hints_remaining -= 1;
        self.hints_used += 1;
        self.hint_revealed = true;
        logger::log(&format!(
            "Hint used on question {} ({} left)",
            self.current_index + 1,
            self.hints_remaining
        ));
        Ok(true)
    }

    /// Replays at the stored difficulty and mode with a freshly drawn sample.
    pub fn play_again(&mut self) -> Result<(), SessionError> {
        self.require("play_again", Screen::Result)?;
        let Some(difficulty) = self.selected_difficulty else {
            return Err(SessionError::PreconditionNotMet {
                operation: "play_again",
                reason: "no difficulty has been selected".to_string(),
            });
        };

        let questions = self.draw_questions(difficulty);
        if questions.is_empty() {
            return Err(self.no_questions("play_again"));
        }
        self.active_questions = questions;
        self.begin_playthrough();
        Ok(())
    }

    pub fn back_to_home(&mut self) {
        self.discard_progress();
        self.selected_difficulty = None;
        self.active_questions.clear();
        self.go_to(Screen::Home);
    }

    pub fn back_to_level_select(&mut self) {
        self.discard_progress();
        self.go_to(Screen::LevelSelect);
    }

    pub fn back_to_mode_select(&mut self) {
        self.discard_progress();
        self.go_to(Screen::ModeSelect);
    }

    /// Applies a countdown tick. Ticks from a countdown that has since been
    /// stopped or re-armed come back as [`TickOutcome::Stale`].
    pub fn on_timer_tick(&mut self, tick: TimerTick) -> TickOutcome {
        if self.screen != Screen::Quiz || !self.timed_mode {
            return TickOutcome::Stale;
        }

        let outcome = self.countdown.tick(tick.generation);
        match outcome {
            TickOutcome::Expired => logger::log(&format!(
                "Time exhausted on question {}",
                self.current_index + 1
            )),
            TickOutcome::Stale => logger::log(&format!(
                "Ignored stale tick for generation {}",
                tick.generation
            )),
            TickOutcome::Ticked { .. } => {}
        }
        outcome
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selected_difficulty(&self) -> Option<Difficulty> {
        self.selected_difficulty
    }

    pub fn is_timed_mode(&self) -> bool {
        self.timed_mode
    }

    pub fn active_questions(&self) -> &[Arc<Question>] {
        &self.active_questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.active_questions
            .get(self.current_index)
            .map(|question| question.as_ref())
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.active_questions.len()
    }

    pub fn selected_option(&self) -> Option<&str> {
        self.selected_option.as_deref()
    }

    pub fn answers_locked(&self) -> bool {
        self.answers_locked
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    pub fn hints_remaining(&self) -> u32 {
        self.hints_remaining
    }

    pub fn revealed_hint(&self) -> Option<&str> {
        if !self.hint_revealed {
            return None;
        }
        self.current_question()
            .and_then(|question| question.hint.as_deref())
    }

    pub fn time_left(&self) -> u32 {
        self.countdown.time_left()
    }

    pub fn is_time_up(&self) -> bool {
        self.timed_mode && self.countdown.is_expired()
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn rules(&self) -> GameRules {
        self.rules
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    fn require(&self, operation: &'static str, expected: Screen) -> Result<(), SessionError> {
        if self.screen == expected {
            Ok(())
        } else {
            logger::log(&format!(
                "Rejected '{}' on the {} screen",
                operation, self.screen
            ));
            Err(SessionError::InvalidTransition {
                operation,
                screen: self.screen,
            })
        }
    }

    fn no_questions(&self, operation: &'static str) -> SessionError {
        let level = self
            .selected_difficulty
            .map(|d| d.label())
            .unwrap_or("the selected level");
        SessionError::PreconditionNotMet {
            operation,
            reason: format!("no questions available for {}", level),
        }
    }

    fn go_to(&mut self, screen: Screen) {
        logger::log(&format!("Screen {} -> {}", self.screen, screen));
        self.screen = screen;
    }

    fn draw_questions(&mut self, difficulty: Difficulty) -> Vec<Arc<Question>> {
        let pool = self.bank.questions_by_difficulty(difficulty);
        let questions = sample(&pool, self.rules.questions_per_game, &mut self.rng);
        logger::log(&format!(
            "Sampled {} of {} {} questions",
            questions.len(),
            pool.len(),
            difficulty
        ));
        questions
    }

    fn begin_playthrough(&mut self) {
        self.current_index = 0;
        self.score = 0;
        self.hints_used = 0;
        self.hints_remaining = self.rules.max_hints;
        self.go_to(Screen::Quiz);
        self.start_question();
    }

    fn start_question(&mut self) {
        self.selected_option = None;
        self.answers_locked = false;
        self.hint_revealed = false;
        if self.timed_mode {
            self.countdown.arm();
        } else {
            self.countdown.reset();
        }
    }

    fn discard_progress(&mut self) {
        self.countdown.reset();
        self.current_index = 0;
        self.selected_option = None;
        self.answers_locked = false;
        self.hint_revealed = false;
        self.score = 0;
        self.hints_used = 0;
        self.hints_remaining = self.rules.max_hints;
    }
}
