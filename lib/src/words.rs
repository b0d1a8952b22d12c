use crate::results::WordSearchError;
use std::io::BufRead;
use std::ops::Deref;

/// An ordered list of words to hide, normalized for placement.
///
/// Each entry has all whitespace removed (so phrases become a single token) and is upper-cased.
/// Blank entries are skipped. Duplicates are kept, and each copy is placed separately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Reads one word or phrase per line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<WordList, WordSearchError> {
        let lines = reader
            .lines()
            .collect::<std::io::Result<Vec<String>>>()?;
        Ok(WordList::from_iterator(lines))
    }

    /// Builds a list from the given words or phrases.
    ///
    /// ```
    /// use rs_word_search::WordList;
    ///
    /// let words = WordList::from_iterator(&["Ice cream", "  ", "dog"]);
    /// assert_eq!(&*words, &["ICECREAM".to_string(), "DOG".to_string()]);
    /// ```
    pub fn from_iterator<I, S>(iter: I) -> WordList
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        WordList {
            words: iter
                .into_iter()
                .filter_map(|phrase| normalize(phrase.as_ref()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length of the longest word, in characters.
    pub fn longest(&self) -> usize {
        self.words
            .iter()
            .map(|word| word.chars().count())
            .max()
            .unwrap_or(0)
    }
}

impl Deref for WordList {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

fn normalize(phrase: &str) -> Option<String> {
    let word: String = phrase
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect();
    if word.is_empty() {
        return None;
    }
    Some(word)
}
