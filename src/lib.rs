pub mod app;
pub mod bank;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod results;
pub mod sampler;
pub mod session;
pub mod timer;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use app::App;
pub use bank::QuestionBank;
pub use config::{GameRules, QuizConfig};
pub use error::{BankError, SessionError};
pub use models::{AnswerOutcome, Difficulty, Question, Screen};
pub use results::{Rank, ResultSummary};
pub use session::QuizSession;
pub use timer::{Countdown, TickOutcome, Ticker, TimerTick};
pub use ui::draw;
