pub mod assets;
pub mod formatter;
pub mod parsing;
