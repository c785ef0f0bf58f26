//! Errors raised while setting up or drawing a [`ProgressBar`](crate::ProgressBar).

/// Everything that can go wrong with a [`ProgressBar`](crate::ProgressBar).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A bar needs at least one step to measure progress against.
    #[error("progress total must be greater than zero")]
    ZeroTotal,
    /// The terminal size could not be determined, usually because the output
    /// is not a terminal.
    #[error("unable to query the terminal size")]
    NotATerminal,
    /// The terminal can't fit the prefix text and margin.
    #[error("terminal is {columns} columns wide but at least {required} are needed")]
    TooNarrow { columns: usize, required: usize },
    /// Pinning the last row leaves no room to scroll.
    #[error("terminal has {rows} rows but at least 2 are needed")]
    TooShort { rows: u16 },
    /// The bar has already released the terminal.
    #[error("progress bar has been cleared")]
    Cleared,
    /// Writing to the output failed.
    #[error("failed to write progress bar: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
