use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Terminal error: {0}")]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Term(#[from] tintterm::TermError),

    #[error("Color error: {0}")]
    Color(#[from] tintmark::ColorParseError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;
