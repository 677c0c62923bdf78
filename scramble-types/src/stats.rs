use serde::{Deserialize, Serialize};

/// Aggregate view over a session's history. Derived on demand, never
/// stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_games: usize,
    pub average_score: f64,
    pub best_score: u32,
    pub per_category: Vec<CategoryAverage>,
    /// Scores in chronological order, for trend charts.
    pub score_trend: Vec<u32>,
}

impl SessionStats {
    pub fn empty() -> Self {
        Self {
            total_games: 0,
            average_score: 0.0,
            best_score: 0,
            per_category: Vec::new(),
            score_trend: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAverage {
    pub category: String,
    pub games: usize,
    pub average_score: f64,
}
