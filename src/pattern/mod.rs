//! The closed set of on/off cell patterns
//!
//! A pattern is a pure predicate over integer cell coordinates local to a
//! block. Cell coordinates reset at every block's top-left corner, so the
//! pattern phase is deliberately discontinuous across block boundaries.

use crate::io::error::{BinpixError, Result};

/// One of the four recognized cell patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// Alternates on the sum of both coordinates
    Checkerboard,
    /// Alternates on the difference of the coordinates
    Diagonal,
    /// Alternating rows, independent of column
    Horizontal,
    /// Alternating columns, independent of row
    Vertical,
}

impl PatternKind {
    /// All recognized patterns, in the order shown to users
    pub const ALL: [Self; 4] = [
        Self::Checkerboard,
        Self::Diagonal,
        Self::Horizontal,
        Self::Vertical,
    ];

    /// Resolve a pattern from its name, matched case-insensitively
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` when the name is not one of the four
    /// recognized identifiers.
    pub fn from_name(name: &str) -> Result<Self> {
        let lowered = name.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == lowered)
            .ok_or_else(|| BinpixError::InvalidConfiguration {
                parameter: "pattern",
                value: name.to_string(),
                reason: format!("expected one of: {}", Self::name_list()),
            })
    }

    /// Canonical lower-case name of the pattern
    pub const fn name(self) -> &'static str {
        match self {
            Self::Checkerboard => "checkerboard",
            Self::Diagonal => "diagonal",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    /// Evaluate the pattern at a cell coordinate
    ///
    /// Cell coordinates are 0-based and local to the current block. The
    /// coordinates are never negative in practice, but the parity is taken
    /// with `rem_euclid` so the result stays in {0, 1} for any input.
    pub const fn is_on(self, cell_x: i64, cell_y: i64) -> bool {
        match self {
            Self::Checkerboard => (cell_x + cell_y).rem_euclid(2) == 0,
            Self::Diagonal => (cell_x - cell_y).rem_euclid(2) == 0,
            Self::Horizontal => cell_y.rem_euclid(2) == 0,
            Self::Vertical => cell_x.rem_euclid(2) == 0,
        }
    }

    fn name_list() -> String {
        Self::ALL
            .iter()
            .map(|kind| kind.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
