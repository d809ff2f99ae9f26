use thiserror::Error;

#[derive(Error, Debug)]
pub enum TermError {
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Logger error: {0}")]
    Logger(String),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, TermError>;
