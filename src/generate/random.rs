use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::sequence::Sequence;

use super::{list, list_tagged};

/// Synthetic documents of random words.
///
/// Each word is `word_length` ASCII letters: the first in either case, the
/// rest lowercase. A document is `words` words joined by spaces, capitalized
/// and ended with a period. All documents are drawn once, when the sequence
/// is built, so every restart replays the same texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomStrings {
    documents: usize,
    words: usize,
    word_length: usize,
    seed: Option<u64>,
    tagged: bool,
}

impl Default for RandomStrings {
    fn default() -> Self {
        Self {
            documents: 10,
            words: 15,
            word_length: 5,
            seed: None,
            tagged: false,
        }
    }
}

impl RandomStrings {
    pub fn new(documents: usize) -> Self {
        Self {
            documents,
            ..Self::default()
        }
    }

    pub fn words(mut self, words: usize) -> Self {
        self.words = words;
        self
    }

    pub fn word_length(mut self, word_length: usize) -> Self {
        self.word_length = word_length;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn tagged(mut self, tagged: bool) -> Self {
        self.tagged = tagged;
        self
    }

    pub fn generate(self) -> Sequence<String> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let documents: Vec<String> = (0..self.documents)
            .map(|_| self.document(&mut rng))
            .collect();
        log::debug!("generated {} random documents", documents.len());
        if self.tagged {
            list_tagged(documents)
        } else {
            list(documents)
        }
    }

    fn word(&self, rng: &mut impl Rng) -> String {
        (0..self.word_length)
            .map(|i| {
                let letter = char::from(b'a' + rng.random_range(0..26u8));
                if i == 0 && rng.random_bool(0.5) {
                    letter.to_ascii_uppercase()
                } else {
                    letter
                }
            })
            .collect()
    }

    fn document(&self, rng: &mut impl Rng) -> String {
        let text = (0..self.words)
            .map(|_| self.word(&mut *rng))
            .collect::<Vec<_>>()
            .join(" ");
        let mut chars = text.chars();
        match chars.next() {
            Some(first) => format!("{}{}.", first.to_ascii_uppercase(), chars.as_str()),
            None => ".".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::TagPath;

    #[test]
    fn test_shape() {
        let docs = RandomStrings::new(3).words(4).word_length(6).seed(7).generate().values();
        assert_eq!(docs.len(), 3);
        for doc in &docs {
            assert!(doc.ends_with('.'));
            assert!(doc.chars().next().unwrap().is_ascii_uppercase());
            let words: Vec<_> = doc.trim_end_matches('.').split(' ').collect();
            assert_eq!(words.len(), 4);
            for word in words {
                assert_eq!(word.len(), 6);
                assert!(word[1..].chars().all(|c| c.is_ascii_lowercase()));
            }
        }
    }

    #[test]
    fn test_default_document_length() {
        let docs = RandomStrings::new(1).seed(1).generate().values();
        assert_eq!(docs[0].split(' ').count(), 15);
        assert_eq!(docs[0].len(), 15 * 5 + 14 + 1);
    }

    #[test]
    fn test_restarts_replay_same_documents() {
        let seq = RandomStrings::new(5).generate();
        assert_eq!(seq.values(), seq.values());
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = RandomStrings::new(2).seed(42).generate().values();
        let b = RandomStrings::new(2).seed(42).generate().values();
        assert_eq!(a, b);
    }

    #[test]
    fn test_tagged_by_index() {
        let seq = RandomStrings::new(2).words(1).tagged(true).generate();
        let tags: Vec<_> = seq.iter().filter_map(|item| item.tag).collect();
        assert_eq!(tags, vec![TagPath::index(0), TagPath::index(1)]);
    }
}
