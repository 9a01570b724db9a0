use std::{fs, io, path::PathBuf};

use crossfill_core::LetterGrid;

/// Error returned when the filled grid cannot be written.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("couldn't write {path:?}: {source}")]
pub struct SaveError {
    /// Path of the output file.
    pub path: PathBuf,
    /// Underlying I/O error.
    pub source: io::Error,
}

/// Writes the rendered grid to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`SaveError`] if the file cannot be written.
pub fn save(path: impl Into<PathBuf>, grid: &LetterGrid) -> Result<(), SaveError> {
    let path = path.into();
    match fs::write(&path, grid.to_string()) {
        Ok(()) => {
            log::info!("wrote filled grid to {}", path.display());
            Ok(())
        }
        Err(source) => Err(SaveError { path, source }),
    }
}

#[cfg(test)]
mod tests {
    use crossfill_core::{Assignment, Crossword, Direction, Variable};

    use super::*;
    use crate::loader::tests::temp_file;

    #[test]
    fn test_save_writes_rendered_grid() {
        let crossword =
            Crossword::new("___\n_##\n".parse().unwrap(), "CAT".parse().unwrap()).unwrap();
        let mut assignment = Assignment::new();
        assignment.assign(
            Variable::new(0, 0, Direction::Across, 3),
            "CAT".parse().unwrap(),
        );

        let path = temp_file("output.txt", "");
        save(&path, &crossword.letter_grid(&assignment)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "CAT\n ██\n");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let crossword = Crossword::new("__\n".parse().unwrap(), "AB".parse().unwrap()).unwrap();
        let path = std::env::temp_dir()
            .join("crossfill-missing-directory")
            .join("out.txt");
        let err = save(&path, &crossword.letter_grid(&Assignment::new())).unwrap_err();
        assert_eq!(err.path, path);
    }
}
