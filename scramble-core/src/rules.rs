use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Tuning constants for a session. The defaults match the classic
/// rules: 100 base points, a 30 second grace period, one point lost
/// per 5 seconds past the grace period, 10 points per extra attempt,
/// and 3 hints per word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRules {
    pub hints_per_word: u32,
    pub base_score: u32,
    pub grace_period_secs: u64,
    pub time_penalty_divisor: u64,
    pub attempt_penalty: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            hints_per_word: 3,
            base_score: 100,
            grace_period_secs: 30,
            time_penalty_divisor: 5,
            attempt_penalty: 10,
        }
    }
}

impl GameRules {
    /// Build rules from the environment, falling back to defaults for
    /// any variable that is unset. Set values must parse.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            hints_per_word: env_or("SCRAMBLE_HINTS_PER_WORD", defaults.hints_per_word)?,
            base_score: env_or("SCRAMBLE_BASE_SCORE", defaults.base_score)?,
            grace_period_secs: env_or("SCRAMBLE_GRACE_SECONDS", defaults.grace_period_secs)?,
            time_penalty_divisor: env_or(
                "SCRAMBLE_TIME_PENALTY_DIVISOR",
                defaults.time_penalty_divisor,
            )?,
            attempt_penalty: env_or("SCRAMBLE_ATTEMPT_PENALTY", defaults.attempt_penalty)?,
        })
    }
}

fn env_or<T: FromStr>(var: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(var) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("invalid value for {}: {}", var, value)),
        Err(_) => Ok(default),
    }
}
