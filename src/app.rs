use crate::error::SessionError;
use crate::logger;
use crate::models::{AnswerOutcome, Difficulty, Screen};
use crate::session::QuizSession;
use crate::timer::{TickOutcome, TimerTick};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Terminal front-end state wrapped around a [`QuizSession`].
///
/// Cursors and the status line are presentation concerns only; all game
/// state lives in the session.
#[derive(Debug)]
pub struct App {
    pub session: QuizSession,
    pub level_cursor: usize,
    /// 0 = untimed, 1 = timed.
    pub mode_cursor: usize,
    pub option_cursor: usize,
    pub last_outcome: Option<AnswerOutcome>,
    pub status: Option<StatusMessage>,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            level_cursor: 0,
            mode_cursor: 0,
            option_cursor: 0,
            last_outcome: None,
            status: None,
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        self.status = None;
        let result = match self.session.screen() {
            Screen::Home => self.handle_home_key(key.code),
            Screen::LevelSelect => self.handle_level_key(key.code),
            Screen::ModeSelect => self.handle_mode_key(key.code),
            Screen::Quiz => self.handle_quiz_key(key.code),
            Screen::Result => self.handle_result_key(key.code),
        };
        self.report(result);
    }

    /// Feeds a countdown tick to the session; running out of time moves on
    /// to the next question.
    pub fn handle_tick(&mut self, tick: TimerTick) -> TickOutcome {
        let outcome = self.session.on_timer_tick(tick);
        if outcome == TickOutcome::Expired {
            let result = self.advance();
            self.report(result);
            if self.status.is_none() {
                self.status = Some(StatusMessage::new(StatusKind::Error, "⏰ Time's up!"));
            }
        }
        outcome
    }

    fn handle_home_key(&mut self, code: KeyCode) -> Result<(), SessionError> {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.session.start_quiz_flow(),
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn handle_level_key(&mut self, code: KeyCode) -> Result<(), SessionError> {
        let levels = Difficulty::ALL.len();
        match code {
            KeyCode::Up => {
                self.level_cursor = self.level_cursor.saturating_sub(1);
                Ok(())
            }
            KeyCode::Down => {
                if self.level_cursor + 1 < levels {
                    self.level_cursor += 1;
                }
                Ok(())
            }
            KeyCode::Char(c @ '1'..='3') => {
                self.level_cursor = (c as usize) - ('1' as usize);
                self.select_level()
            }
            KeyCode::Enter => self.select_level(),
            KeyCode::Esc => {
                self.session.back_to_home();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn select_level(&mut self) -> Result<(), SessionError> {
        let difficulty = Difficulty::ALL[self.level_cursor.min(Difficulty::ALL.len() - 1)];
        self.session.select_difficulty(difficulty)?;
        self.mode_cursor = 0;
        Ok(())
    }

    fn handle_mode_key(&mut self, code: KeyCode) -> Result<(), SessionError> {
        match code {
            KeyCode::Up | KeyCode::Left => {
                self.mode_cursor = 0;
                Ok(())
            }
            KeyCode::Down | KeyCode::Right => {
                self.mode_cursor = 1;
                Ok(())
            }
            KeyCode::Enter => {
                self.session.select_mode(self.mode_cursor == 1)?;
                self.reset_question_view();
                Ok(())
            }
            KeyCode::Esc => {
                self.session.back_to_level_select();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn handle_quiz_key(&mut self, code: KeyCode) -> Result<(), SessionError> {
        let option_count = self
            .session
            .current_question()
            .map(|question| question.options.len())
            .unwrap_or(0);
        let finished_question = self.session.answers_locked() || self.session.is_time_up();

        match code {
            KeyCode::Up if !finished_question => {
                self.option_cursor = self.option_cursor.saturating_sub(1);
                Ok(())
            }
            KeyCode::Down if !finished_question => {
                if self.option_cursor + 1 < option_count {
                    self.option_cursor += 1;
                }
                Ok(())
            }
            KeyCode::Enter if finished_question => self.advance(),
            KeyCode::Enter => self.submit(self.option_cursor),
            KeyCode::Char(c @ '1'..='9') if !finished_question => {
                let index = (c as usize) - ('1' as usize);
                if index < option_count {
                    self.option_cursor = index;
                    self.submit(index)
                } else {
                    Ok(())
                }
            }
            KeyCode::Char('h') => {
                if !self.session.use_hint()? {
                    self.status = Some(StatusMessage::new(
                        StatusKind::Info,
                        "No hint available for this question",
                    ));
                }
                Ok(())
            }
            KeyCode::Esc => {
                self.session.back_to_mode_select();
                self.reset_question_view();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn handle_result_key(&mut self, code: KeyCode) -> Result<(), SessionError> {
        match code {
            KeyCode::Char('r') | KeyCode::Enter => {
                self.session.play_again()?;
                self.reset_question_view();
                Ok(())
            }
            KeyCode::Esc => {
                self.session.back_to_level_select();
                Ok(())
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn submit(&mut self, index: usize) -> Result<(), SessionError> {
        let Some(option) = self
            .session
            .current_question()
            .and_then(|question| question.options.get(index))
            .cloned()
        else {
            return Ok(());
        };

        let outcome = self.session.submit_answer(&option)?;
        match outcome {
            AnswerOutcome::Correct | AnswerOutcome::Incorrect => self.last_outcome = Some(outcome),
            AnswerOutcome::AlreadyAnswered | AnswerOutcome::TimeExpired => {}
        }
        Ok(())
    }

    fn advance(&mut self) -> Result<(), SessionError> {
        self.session.advance_question()?;
        self.reset_question_view();
        Ok(())
    }

    fn reset_question_view(&mut self) {
        self.option_cursor = 0;
        self.last_outcome = None;
    }

    fn report(&mut self, result: Result<(), SessionError>) {
        let Err(err) = result else {
            return;
        };
        logger::log(&format!("Key handling failed: {}", err));
        match err {
            SessionError::InvalidTransition { .. } => {
                if cfg!(debug_assertions) {
                    self.status = Some(StatusMessage::new(StatusKind::Error, err.to_string()));
                }
            }
            SessionError::PreconditionNotMet { reason, .. } => {
                self.status = Some(StatusMessage::new(StatusKind::Error, reason));
            }
        }
    }
}
