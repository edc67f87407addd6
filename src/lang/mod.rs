/*!
# Rust Language Module

This Rust module provides the token table and lexical analysis of Oto.

*/

#[macro_use]
mod error;
mod lex;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::tokenize;
pub use token::{Class, Operator, Symbol, TokenCode, TokenTable, Word};

/// Source line, counted from 1. `None` for errors not tied to a line.
pub type LineNumber = Option<usize>;
pub type Column = std::ops::Range<usize>;
