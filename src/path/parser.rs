//! Command interpreter: the dispatch loop over a path-data string.

use crate::error::PathError;

use super::command::{make_command, PathCommand};
use super::cursor::Cursor;
use super::lexer::{read_number, read_separator};

/// The full command alphabet.
pub const COMMAND_CODES: [char; 12] =
    ['M', 'm', 'L', 'l', 'H', 'h', 'V', 'v', 'C', 'c', 'Z', 'z'];

/// Number of numeric arguments each command carries.
fn arity(code: char) -> usize {
    match code {
        'M' | 'm' | 'L' | 'l' => 2,
        'H' | 'h' | 'V' | 'v' => 1,
        'C' | 'c' => 6,
        _ => 0,
    }
}

/// Read one command letter.
///
/// An unknown character is left unconsumed; end of input means the stream
/// ran out before a close command.
fn read_command(cur: &mut Cursor) -> Result<char, PathError> {
    match cur.peek() {
        Some(c) if COMMAND_CODES.contains(&c) => {
            cur.bump();
            Ok(c)
        }
        Some(c) => Err(PathError::UnknownCommand(c)),
        None => Err(PathError::UnterminatedPath),
    }
}

/// Parse a whole path-data string into its command list.
///
/// Loop shape: consume separator, read command, read the command's fixed
/// arity with an optional separator before each argument. A close command
/// terminates the parse; anything but separators after it is trailing data.
pub fn parse(data: &str) -> Result<Vec<PathCommand>, PathError> {
    let mut cur = Cursor::new(data);
    let mut commands = Vec::new();

    loop {
        read_separator(&mut cur);
        let code = read_command(&mut cur)?;

        let mut args = [0.0; 6];
        let wanted = arity(code);
        for slot in args[..wanted].iter_mut() {
            read_separator(&mut cur);
            *slot = read_number(&mut cur)?;
        }

        let command = make_command(code, &args[..wanted])?;
        let closed = command == PathCommand::Close;
        commands.push(command);

        if closed {
            read_separator(&mut cur);
            if let Some(c) = cur.peek() {
                return Err(PathError::TrailingData(c));
            }
            return Ok(commands);
        }
    }
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod parser_test;
