use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq)]
pub enum BorderError {
    InvalidParameter(String),
    InvalidColor(String),
    InvalidLength(String),
}

impl Display for BorderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BorderError::InvalidParameter(token) => write!(f, "invalid parameter: {}", token),
            BorderError::InvalidColor(token) => write!(f, "invalid color: {}", token),
            BorderError::InvalidLength(token) => write!(f, "invalid length: {}", token),
        }
    }
}

impl Error for BorderError {

}

pub type BorderResult<T> = Result<T, BorderError>;
