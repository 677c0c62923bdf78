use crate::WordCatalog;
use rand::Rng;
use rand::seq::SliceRandom;
use scramble_types::GameError;
use std::collections::HashSet;

/// Draw a word from the category, uniformly at random among words not
/// yet served this rotation. When every word in the category has been
/// played, the rotation resets and the whole list becomes eligible
/// again. The chosen word is recorded in `played` before returning.
pub fn select_word<R: Rng>(
    catalog: &WordCatalog,
    category: &str,
    played: &mut HashSet<String>,
    rng: &mut R,
) -> Result<String, GameError> {
    let words = catalog.words(category)?;

    let mut available: Vec<&String> = words.iter().filter(|w| !played.contains(*w)).collect();
    if available.is_empty() {
        // Full rotation served; start over
        played.clear();
        available = words.iter().collect();
    }

    // Catalogs never hold empty categories, so the pool is non-empty here
    let word = (*available.choose(rng).expect("category has words")).clone();
    played.insert(word.clone());
    Ok(word)
}
