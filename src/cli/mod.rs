//! CLI command implementations

pub mod cmd;
pub mod inspect;
pub mod parse;
