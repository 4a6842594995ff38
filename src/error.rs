/// Why a probability table could not be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    Empty,
    ZeroSum,
    Overflow { index: usize },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::Empty => write!(f, "weights are empty"),
            TableError::ZeroSum => write!(f, "sum of non-negative weights is zero"),
            TableError::Overflow { index } => {
                write!(f, "total weight overflows i32 when adding weight at index {index}")
            }
        }
    }
}

impl std::error::Error for TableError {}
