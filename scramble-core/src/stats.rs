use scramble_types::{CategoryAverage, GameRecord, SessionStats};

/// Derive session statistics from the history. Pure and recomputed on
/// demand; no aggregate state is kept anywhere.
pub fn compute_stats(history: &[GameRecord]) -> SessionStats {
    if history.is_empty() {
        return SessionStats::empty();
    }

    let total_games = history.len();
    let score_sum: u64 = history.iter().map(|r| r.score as u64).sum();
    let best_score = history.iter().map(|r| r.score).max().unwrap_or(0);

    // Per-category averages, categories in order of first appearance
    let mut per_category: Vec<CategoryAverage> = Vec::new();
    for record in history {
        match per_category
            .iter_mut()
            .find(|c| c.category == record.category)
        {
            Some(entry) => {
                entry.average_score = (entry.average_score * entry.games as f64
                    + record.score as f64)
                    / (entry.games + 1) as f64;
                entry.games += 1;
            }
            None => per_category.push(CategoryAverage {
                category: record.category.clone(),
                games: 1,
                average_score: record.score as f64,
            }),
        }
    }

    SessionStats {
        total_games,
        average_score: score_sum as f64 / total_games as f64,
        best_score,
        per_category,
        score_trend: history.iter().map(|r| r.score).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, score: u32) -> GameRecord {
        GameRecord {
            date: "2024-01-01T00:00:00+00:00".to_string(),
            category: category.to_string(),
            word: "APPLE".to_string(),
            attempts: 1,
            time_taken: 5,
            score,
        }
    }

    #[test]
    fn test_empty_history() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, SessionStats::empty());
    }

    #[test]
    fn test_aggregates() {
        let history = vec![
            record("Fruits", 100),
            record("Fruits", 80),
            record("Sports", 60),
        ];
        let stats = compute_stats(&history);

        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.best_score, 100);
        assert!((stats.average_score - 80.0).abs() < f64::EPSILON);
        assert_eq!(stats.score_trend, vec![100, 80, 60]);

        assert_eq!(stats.per_category.len(), 2);
        assert_eq!(stats.per_category[0].category, "Fruits");
        assert_eq!(stats.per_category[0].games, 2);
        assert!((stats.per_category[0].average_score - 90.0).abs() < f64::EPSILON);
        assert_eq!(stats.per_category[1].category, "Sports");
        assert!((stats.per_category[1].average_score - 60.0).abs() < f64::EPSILON);
    }
}
