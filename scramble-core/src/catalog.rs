use anyhow::{Result, anyhow};
use scramble_types::GameError;

#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    pub words: Vec<String>,
}

/// Ordered collection of word categories. Words are stored uppercase;
/// lookups by category name are case-sensitive and iteration preserves
/// insertion order so category menus render stably.
#[derive(Debug, Clone)]
pub struct WordCatalog {
    categories: Vec<Category>,
}

impl WordCatalog {
    /// Build a catalog from pre-assembled categories, applying the same
    /// normalization as [`WordCatalog::from_word_list`]: words are
    /// uppercased and deduplicated, words shorter than two letters are
    /// dropped, and categories left with no usable words are discarded.
    /// Every category in a catalog therefore has at least one word.
    pub fn new(categories: Vec<Category>) -> Self {
        let categories = categories
            .into_iter()
            .filter_map(|category| {
                let words = normalize_words(category.words.iter().map(String::as_str));
                (!words.is_empty()).then_some(Category {
                    name: category.name,
                    words,
                })
            })
            .collect();
        Self { categories }
    }

    /// Parse a catalog from a plaintext list, one category per line in
    /// the form `Name: WORD, WORD, ...`. Blank lines and `#` comments
    /// are skipped; words are uppercased, deduplicated, and words
    /// shorter than two letters are dropped since they cannot be
    /// scrambled into a different arrangement.
    pub fn from_word_list(list: &str) -> Result<Self> {
        let mut categories: Vec<Category> = Vec::new();

        for line in list.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (name, rest) = line
                .split_once(':')
                .ok_or_else(|| anyhow!("malformed category line: {}", line))?;
            let name = name.trim();
            if name.is_empty() {
                return Err(anyhow!("category with empty name: {}", line));
            }
            if categories.iter().any(|c| c.name == name) {
                return Err(anyhow!("duplicate category: {}", name));
            }

            let words = normalize_words(rest.split(','));
            if words.is_empty() {
                return Err(anyhow!("category {} has no usable words", name));
            }

            categories.push(Category {
                name: name.to_string(),
                words,
            });
        }

        if categories.is_empty() {
            return Err(anyhow!("word list contains no categories"));
        }

        Ok(Self { categories })
    }

    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c.name == category)
    }

    pub fn words(&self, category: &str) -> Result<&[String], GameError> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.words.as_slice())
            .ok_or_else(|| GameError::UnknownCategory {
                category: category.to_string(),
            })
    }

    pub fn word_count(&self, category: &str) -> usize {
        self.words(category).map(|w| w.len()).unwrap_or(0)
    }
}

impl Default for WordCatalog {
    fn default() -> Self {
        Self::new(vec![
            Category {
                name: "Animals".to_string(),
                words: to_words(&[
                    "ELEPHANT", "GIRAFFE", "PENGUIN", "KANGAROO", "DOLPHIN", "CHEETAH", "ZEBRA",
                    "LION", "TIGER", "MONKEY",
                ]),
            },
            Category {
                name: "Countries".to_string(),
                words: to_words(&[
                    "FRANCE", "JAPAN", "BRAZIL", "CANADA", "INDIA", "AUSTRALIA", "EGYPT", "ITALY",
                    "SPAIN", "MEXICO",
                ]),
            },
            Category {
                name: "Fruits".to_string(),
                words: to_words(&[
                    "APPLE",
                    "BANANA",
                    "ORANGE",
                    "MANGO",
                    "GRAPES",
                    "PINEAPPLE",
                    "STRAWBERRY",
                    "KIWI",
                    "PEACH",
                    "PLUM",
                ]),
            },
            Category {
                name: "Sports".to_string(),
                words: to_words(&[
                    "FOOTBALL",
                    "BASKETBALL",
                    "TENNIS",
                    "CRICKET",
                    "VOLLEYBALL",
                    "HOCKEY",
                    "BASEBALL",
                    "RUGBY",
                    "GOLF",
                    "BOXING",
                ]),
            },
        ])
    }
}

fn to_words(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn normalize_words<'a>(words: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::new();
    for word in words {
        let word = word.trim().to_uppercase();
        if word.len() < 2 || normalized.contains(&word) {
            continue;
        }
        normalized.push(word);
    }
    normalized
}
