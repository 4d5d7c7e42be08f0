use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// A tick delivered by [`Ticker`], stamped with the countdown generation it
/// was armed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTick {
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick belonged to a stopped or superseded countdown and was dropped.
    Stale,
    Ticked { time_left: u32 },
    /// Time ran out. Reported once per armed countdown.
    Expired,
}

/// Per-question countdown state.
///
/// Every arm or stop moves to a new generation, so a tick stamped with an
/// older generation can never touch the current question.
#[derive(Debug, Clone)]
pub struct Countdown {
    seconds_per_question: u32,
    time_left: u32,
    generation: u64,
    running: bool,
    expired: bool,
}

impl Countdown {
    pub fn new(seconds_per_question: u32) -> Self {
        Self {
            seconds_per_question,
            time_left: seconds_per_question,
            generation: 0,
            running: false,
            expired: false,
        }
    }

    /// Restarts from a full budget and returns the new generation.
    pub fn arm(&mut self) -> u64 {
        self.generation += 1;
        self.time_left = self.seconds_per_question;
        self.running = true;
        self.expired = false;
        self.generation
    }

    /// Resets the read-out without starting it (untimed play).
    pub fn reset(&mut self) {
        self.stop();
        self.time_left = self.seconds_per_question;
        self.expired = false;
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.generation += 1;
        }
    }

    pub fn tick(&mut self, generation: u64) -> TickOutcome {
        if !self.running || generation != self.generation {
            return TickOutcome::Stale;
        }

        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.running = false;
            self.expired = true;
            TickOutcome::Expired
        } else {
            TickOutcome::Ticked {
                time_left: self.time_left,
            }
        }
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }
}

/// Background task that sends one [`TimerTick`] per period for a single
/// countdown generation. Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    tx: UnboundedSender<TimerTick>,
    active: Option<(u64, JoinHandle<()>)>,
}

impl Ticker {
    pub fn new(period: Duration, tx: UnboundedSender<TimerTick>) -> Self {
        Self {
            period,
            tx,
            active: None,
        }
    }

    /// Aligns the background task with the countdown: arms it for a newly
    /// started generation and cancels it once the countdown stops.
    pub fn sync(&mut self, countdown: &Countdown) {
        if countdown.is_running() {
            if self.armed_generation() != Some(countdown.generation()) {
                self.arm(countdown.generation());
            }
        } else {
            self.cancel();
        }
    }

    pub fn arm(&mut self, generation: u64) {
        self.cancel();

        let tx = self.tx.clone();
        let period = self.period;
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(TimerTick { generation }).is_err() {
                    break;
                }
            }
        });
        self.active = Some((generation, handle));
    }

    pub fn cancel(&mut self) {
        if let Some((_, handle)) = self.active.take() {
            handle.abort();
        }
    }

    pub fn armed_generation(&self) -> Option<u64> {
        self.active.as_ref().map(|(generation, _)| *generation)
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
