//! The closed cell-kind vocabulary and its character mapping.

/// The kind of a single maze cell.
///
/// `Wall`, `Open`, `Start` and `End` come from input characters; `Visited`
/// and `Path` are search-time annotations and never appear in raw input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Wall,
    #[default]
    Open,
    Start,
    End,
    /// Touched during search, still passable.
    Visited,
    /// Confirmed on the final path.
    Path,
}

impl CellKind {
    /// Map an input character to a cell kind. Returns `None` for any
    /// character outside the input vocabulary.
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Self::Wall),
            ' ' => Some(Self::Open),
            '^' => Some(Self::Start),
            'E' => Some(Self::End),
            _ => None,
        }
    }

    /// The character used to render this kind.
    pub const fn symbol(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Open => ' ',
            Self::Start => '^',
            Self::End => 'E',
            Self::Visited => 'x',
            Self::Path => 'O',
        }
    }

    /// Whether a cell of this kind can be walked through.
    pub const fn passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}
