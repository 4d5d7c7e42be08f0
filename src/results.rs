use crate::session::QuizSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    LegendaryHero,
    BraveHero,
    Apprentice,
    MereMortal,
}

impl Rank {
    /// Ranks on the exact share of correct answers, not the rounded one.
    pub fn from_score(score: usize, total: usize) -> Self {
        if total == 0 {
            return Rank::MereMortal;
        }
        let scaled = score * 100;
        if scaled >= 80 * total {
            Rank::LegendaryHero
        } else if scaled >= 60 * total {
            Rank::BraveHero
        } else if scaled >= 40 * total {
            Rank::Apprentice
        } else {
            Rank::MereMortal
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Rank::LegendaryHero => "Legendary Olympian Hero!",
            Rank::BraveHero => "Brave Greek Hero!",
            Rank::Apprentice => "Apprentice of the Gods",
            Rank::MereMortal => "Mere Mortal",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Rank::LegendaryHero => "You have won the favour of Zeus!",
            Rank::BraveHero => "The gods are impressed by your knowledge.",
            Rank::Apprentice => "Keep studying and you may yet become a hero.",
            Rank::MereMortal => "Even the gods started out as apprentices.",
        }
    }
}

/// What the result screen shows for a finished playthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSummary {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub rank: Rank,
    pub hints_used: u32,
    pub max_hints: u32,
}

impl ResultSummary {
    pub fn new(score: usize, total: usize, hints_used: u32, max_hints: u32) -> Self {
        Self {
            score,
            total,
            percentage: percentage(score, total),
            rank: Rank::from_score(score, total),
            hints_used,
            max_hints,
        }
    }

    pub fn from_session(session: &QuizSession) -> Self {
        Self::new(
            session.score(),
            session.active_questions().len(),
            session.hints_used(),
            session.rules().max_hints,
        )
    }

    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.score == self.total
    }

    /// `None` when no hint was spent.
    pub fn hints_line(&self) -> Option<String> {
        if self.hints_used == 0 {
            return None;
        }
        Some(format!(
            "You used {} hint{} of {} available",
            self.hints_used,
            if self.hints_used == 1 { "" } else { "s" },
            self.max_hints
        ))
    }
}

/// Rounded share of correct answers; 0 for an empty playthrough.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((score as f64 / total as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_rounds() {
        assert_eq!(percentage(12, 12), 100);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(0, 12), 0);
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn test_rank_thresholds() {
        assert_eq!(Rank::from_score(10, 10), Rank::LegendaryHero);
        assert_eq!(Rank::from_score(8, 10), Rank::LegendaryHero);
        assert_eq!(Rank::from_score(7, 10), Rank::BraveHero);
        assert_eq!(Rank::from_score(6, 10), Rank::BraveHero);
        assert_eq!(Rank::from_score(5, 10), Rank::Apprentice);
        assert_eq!(Rank::from_score(4, 10), Rank::Apprentice);
        assert_eq!(Rank::from_score(3, 10), Rank::MereMortal);
        assert_eq!(Rank::from_score(0, 0), Rank::MereMortal);
    }

    #[test]
    fn test_rank_ignores_rounding() {
        // 319/400 = 79.75% shows as 80% but is not yet legendary
        let summary = ResultSummary::new(319, 400, 0, 3);
        assert_eq!(summary.percentage, 80);
        assert_eq!(summary.rank, Rank::BraveHero);
    }

    #[test]
    fn test_perfect_score() {
        let summary = ResultSummary::new(12, 12, 0, 3);
        assert!(summary.is_perfect());
        assert_eq!(summary.rank.title(), "Legendary Olympian Hero!");
        assert!(!ResultSummary::new(0, 0, 0, 3).is_perfect());
    }

    #[test]
    fn test_hints_line() {
        assert_eq!(ResultSummary::new(5, 12, 0, 3).hints_line(), None);
        assert_eq!(
            ResultSummary::new(5, 12, 1, 3).hints_line().as_deref(),
            Some("You used 1 hint of 3 available")
        );
        assert_eq!(
            ResultSummary::new(5, 12, 3, 3).hints_line().as_deref(),
            Some("You used 3 hints of 3 available")
        );
    }
}
