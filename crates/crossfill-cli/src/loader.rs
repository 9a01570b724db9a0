use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crossfill_core::{Crossword, ParseVocabularyError, StructuralError, Structure, Vocabulary};

/// Errors returned when reading input files.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[display("couldn't read {path:?}: {source}")]
    Read {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The structure file does not describe a valid grid.
    #[display("malformed structure file {path:?}: {source}")]
    Structure {
        /// Path of the file.
        path: PathBuf,
        /// What is wrong with the grid.
        source: StructuralError,
    },
    /// The words file contains an invalid word.
    #[display("malformed words file {path:?}: {source}")]
    Words {
        /// Path of the file.
        path: PathBuf,
        /// The rejected word.
        source: ParseVocabularyError,
    },
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_owned(),
        source,
    })
}

/// Reads a structure file: one row per line, `_` for open cells.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the file cannot be read and
/// [`LoadError::Structure`] if it is empty or its rows differ in width.
pub fn load_structure(path: &Path) -> Result<Structure, LoadError> {
    read(path)?
        .parse()
        .map_err(|source| LoadError::Structure {
            path: path.to_owned(),
            source,
        })
}

/// Reads a words file: one word per line.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the file cannot be read and
/// [`LoadError::Words`] if a line holds more than one word.
pub fn load_words(path: &Path) -> Result<Vocabulary, LoadError> {
    read(path)?.parse().map_err(|source| LoadError::Words {
        path: path.to_owned(),
        source,
    })
}

/// Reads both files and builds the crossword.
///
/// # Errors
///
/// Returns any error of [`load_structure`] or [`load_words`], or
/// [`LoadError::Structure`] if the derived slots are malformed.
pub fn load_crossword(structure_path: &Path, words_path: &Path) -> Result<Crossword, LoadError> {
    let structure = load_structure(structure_path)?;
    let words = load_words(words_path)?;
    log::info!(
        "loaded {}x{} structure from {} and {} words from {}",
        structure.width(),
        structure.height(),
        structure_path.display(),
        words.len(),
        words_path.display()
    );
    Crossword::new(structure, words).map_err(|source| LoadError::Structure {
        path: structure_path.to_owned(),
        source,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use crossfill_core::Position;

    use super::*;

    /// Writes `contents` to a file unique to this test process.
    pub(crate) fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("crossfill-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_structure() {
        let path = temp_file("structure-ok.txt", "#__\n___\n");
        let structure = load_structure(&path).unwrap();
        assert_eq!((structure.width(), structure.height()), (3, 2));
        assert!(!structure.is_open(Position::new(0, 0)));
        assert!(structure.is_open(Position::new(1, 0)));
    }

    #[test]
    fn test_load_structure_rejects_ragged_rows() {
        let path = temp_file("structure-ragged.txt", "___\n__\n");
        let err = load_structure(&path).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Structure {
                source: StructuralError::NonRectangular { row: 1, .. },
                ..
            }
        ));
    }

    #[test]
    fn test_load_words() {
        let path = temp_file("words-ok.txt", "cat\nCAT\ndog\n");
        let words = load_words(&path).unwrap();
        assert_eq!(words.len(), 2);
        assert!(words.contains("DOG"));
    }

    #[test]
    fn test_load_words_rejects_phrases() {
        let path = temp_file("words-bad.txt", "cat\nhot dog\n");
        let err = load_words(&path).unwrap_err();
        assert!(matches!(err, LoadError::Words { ref source, .. } if source.line == 2));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("crossfill-this-file-does-not-exist.txt");
        assert!(matches!(load_words(&path), Err(LoadError::Read { .. })));
        assert!(matches!(load_structure(&path), Err(LoadError::Read { .. })));
    }

    #[test]
    fn test_load_crossword() {
        let structure = temp_file("crossword-structure.txt", "___\n_##\n_##\n");
        let words = temp_file("crossword-words.txt", "cat\ncar\n");
        let crossword = load_crossword(&structure, &words).unwrap();
        assert_eq!(crossword.variables().len(), 2);
        assert_eq!(crossword.words().len(), 2);
    }
}
