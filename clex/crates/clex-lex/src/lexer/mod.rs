//! Scanner module.
//!
//! This module organizes the scanner implementation into smaller, focused components:
//! - `core` - Scanner struct, state machine and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Number literal lexing
//! - `string` - String and character literal lexing
//! - `operator` - Operator and punctuation lexing
//! - `comment` - Whitespace and comment skipping

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{Scanner, State};
