use std::{
    borrow::Borrow,
    collections::{BTreeSet, btree_set},
    fmt::{self, Display},
    str::FromStr,
};

/// Errors returned when parsing a [`Word`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseWordError {
    /// The word has no letters.
    #[display("word is empty")]
    Empty,
    /// The word contains whitespace, which cannot be placed in a cell.
    #[display("word {word:?} contains whitespace")]
    Whitespace {
        /// The rejected word.
        word: String,
    },
}

/// A candidate word.
///
/// Words are non-empty, upper-cased and free of whitespace. Length and letter
/// indices count Unicode scalar values, so each letter occupies one cell.
///
/// # Examples
///
/// ```
/// use crossfill_core::Word;
///
/// let word: Word = "cat".parse()?;
/// assert_eq!(word.as_str(), "CAT");
/// assert_eq!(word.length(), 3);
/// assert_eq!(word.letter(1), Some('A'));
/// # Ok::<(), crossfill_core::ParseWordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
    letters: Box<[char]>,
}

impl Word {
    /// Returns the word as a string slice.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the number of letters.
    #[must_use]
    #[inline]
    pub fn length(&self) -> usize {
        self.letters.len()
    }

    /// Returns the letter at `index`, or `None` if the word is shorter.
    #[must_use]
    #[inline]
    pub fn letter(&self, index: usize) -> Option<char> {
        self.letters.get(index).copied()
    }

    /// Returns all letters in order.
    #[must_use]
    #[inline]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }
}

impl FromStr for Word {
    type Err = ParseWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseWordError::Empty);
        }
        if s.chars().any(char::is_whitespace) {
            return Err(ParseWordError::Whitespace { word: s.to_owned() });
        }
        let text = s.to_uppercase();
        let letters = text.chars().collect();
        Ok(Self { text, letters })
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Errors returned when parsing a [`Vocabulary`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid word on line {line}: {source}")]
pub struct ParseVocabularyError {
    /// 1-based line number of the offending word.
    pub line: usize,
    /// Why the word was rejected.
    pub source: ParseWordError,
}

/// The set of words available for filling a grid.
///
/// Duplicates collapse and iteration is in lexicographic order.
///
/// The text format has one word per line. Surrounding whitespace is trimmed,
/// blank lines are skipped and words are upper-cased.
///
/// # Examples
///
/// ```
/// use crossfill_core::Vocabulary;
///
/// let words: Vocabulary = "dog\ncat\n\nCAT\n".parse()?;
/// assert_eq!(words.len(), 2);
/// assert!(words.contains("CAT"));
/// # Ok::<(), crossfill_core::ParseVocabularyError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: BTreeSet<Word>,
}

impl Vocabulary {
    /// Creates an empty vocabulary.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words: BTreeSet::new(),
        }
    }

    /// Adds a word. Returns `false` if it was already present.
    pub fn insert(&mut self, word: Word) -> bool {
        self.words.insert(word)
    }

    /// Returns `true` if the (upper-cased) word is present.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns the number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if there are no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the words in lexicographic order.
    pub fn iter(&self) -> btree_set::Iter<'_, Word> {
        self.words.iter()
    }
}

impl FromStr for Vocabulary {
    type Err = ParseVocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = Self::new();
        for (i, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let word = line
                .parse()
                .map_err(|source| ParseVocabularyError { line: i + 1, source })?;
            words.insert(word);
        }
        Ok(words)
    }
}

impl FromIterator<Word> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a Word;
    type IntoIter = btree_set::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
