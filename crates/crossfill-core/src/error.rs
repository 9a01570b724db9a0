use crate::{Position, Variable};

/// Errors describing a malformed grid.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StructuralError {
    /// The structure has no cells.
    #[display("structure has no cells")]
    EmptyStructure,
    /// Rows of the structure have different widths.
    #[display("row {row} has width {found}, expected {expected}")]
    NonRectangular {
        /// 0-based index of the first row whose width differs from row 0.
        row: usize,
        /// Width of row 0.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A variable extends outside the grid.
    #[display("variable {variable} extends outside the grid")]
    OutOfBounds {
        /// The offending variable.
        variable: Variable,
    },
    /// A variable covers a blocked cell.
    #[display("variable {variable} covers blocked cell {position}")]
    BlockedCell {
        /// The offending variable.
        variable: Variable,
        /// The blocked cell.
        position: Position,
    },
    /// Two variables share more than one cell.
    #[display("variables {first} and {second} share more than one cell")]
    MultipleOverlap {
        /// The first variable of the pair.
        first: Variable,
        /// The second variable of the pair.
        second: Variable,
    },
}
