use rand::Rng;
use rand::seq::SliceRandom;

/// Shuffle the letters of `word` until the result differs from the
/// original. Words with no differing arrangement (shorter than two
/// letters, or every letter identical) are returned unchanged, so
/// callers never loop forever on degenerate input.
pub fn scramble_word<R: Rng>(word: &str, rng: &mut R) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    if !has_distinct_arrangement(&letters) {
        return word.to_string();
    }

    loop {
        letters.shuffle(rng);
        let scrambled: String = letters.iter().collect();
        if scrambled != word {
            return scrambled;
        }
    }
}

fn has_distinct_arrangement(letters: &[char]) -> bool {
    letters.len() >= 2 && letters.iter().any(|&c| c != letters[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted(word: &str) -> Vec<char> {
        let mut chars: Vec<char> = word.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn test_scramble_is_permutation_and_differs() {
        let mut rng = StdRng::seed_from_u64(3);
        for word in ["OK", "APPLE", "STRAWBERRY", "ZEBRA"] {
            for _ in 0..20 {
                let scrambled = scramble_word(word, &mut rng);
                assert_eq!(sorted(&scrambled), sorted(word));
                assert_ne!(scrambled, word);
            }
        }
    }

    #[test]
    fn test_degenerate_words_returned_unchanged() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(scramble_word("", &mut rng), "");
        assert_eq!(scramble_word("A", &mut rng), "A");
        assert_eq!(scramble_word("AA", &mut rng), "AA");
        assert_eq!(scramble_word("AAAA", &mut rng), "AAAA");
    }
}
