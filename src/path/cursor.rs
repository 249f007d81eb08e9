//! Character cursor over a path-data string.
//!
//! Lexers need one character of non-committal lookahead. Instead of a
//! push-back primitive, `peek` never consumes and `bump` commits, which keeps
//! consumed-vs-unconsumed reasoning local to the call site.

#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    /// Look at the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Consume and return the next character.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.rest = &self.rest[c.len_utf8()..];
        Some(c)
    }

    pub fn at_end(&self) -> bool {
        self.rest.is_empty()
    }
}

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;
