//! The path-data mini-language (`d` attribute).
//!
//! A standalone grammar, distinct from the surrounding XML: a compact stream
//! of single-letter commands with fixed-arity numeric arguments, absolute and
//! relative variants, terminated by a close command. The supported subset is
//! {move, line, horizontal-line, vertical-line, cubic-curve, close}; arcs and
//! smooth/shorthand curves are out of scope, as are sub-path holes.

mod command;
mod cursor;
mod lexer;
mod parser;

pub use command::{linearize, make_command, PathCommand};
pub use cursor::Cursor;
pub use lexer::{read_number, read_separator};
pub use parser::{parse, COMMAND_CODES};
