use thiserror::Error;

// Unified error type for tmatrix

#[derive(Error, Debug)]
pub enum TmError {
    #[error("invalid size {size}: must be in 1..={max}")]
    InvalidSize { size: usize, max: usize },
    #[error("index {index} out of range for size {size}")]
    IndexOutOfRange { index: usize, size: usize },
    #[error("size mismatch: {left} vs {right}")]
    SizeMismatch { left: usize, right: usize },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("container was moved out and is no longer valid")]
    UseAfterMove,
    #[error("cannot parse token {token:?}")]
    Parse { token: String },
    #[error("unexpected end of input: expected {expected} tokens, read {read}")]
    UnexpectedEof { expected: usize, read: usize },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TmError>;
