pub mod matches;

use std::fmt::Display;

#[derive(Debug)]
pub enum ParsingError {
    InvalidType(String),
}

impl Display for ParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParsingError::InvalidType(field) => {
                write!(f, "Unexpected type or missing field: {}", field)
            }
        }
    }
}
