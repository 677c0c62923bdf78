use crate::GameRules;

/// Computes the score for a solved word from how long it took and how
/// many submissions it needed. Pure; all state lives in the rules.
pub struct ScoreCalculator {
    rules: GameRules,
}

impl ScoreCalculator {
    pub fn new(rules: GameRules) -> Self {
        Self { rules }
    }

    /// Score a solve. `attempts` counts every submission including the
    /// winning one, so a first-try solve carries no attempt penalty.
    /// Time past the grace period costs one point per
    /// `time_penalty_divisor` seconds; the result floors at zero.
    pub fn score(&self, elapsed_secs: u64, attempts: u32) -> u32 {
        let time_penalty = elapsed_secs.saturating_sub(self.rules.grace_period_secs)
            / self.rules.time_penalty_divisor.max(1);
        let attempt_penalty = attempts.saturating_sub(1) as u64 * self.rules.attempt_penalty as u64;

        (self.rules.base_score as u64)
            .saturating_sub(time_penalty)
            .saturating_sub(attempt_penalty) as u32
    }
}

impl Default for ScoreCalculator {
    fn default() -> Self {
        Self::new(GameRules::default())
    }
}
