use std::str::Chars;

/// Character reader over a single source line.
///
/// `pos` is the number of characters consumed so far, so the character
/// returned by `next` carries its own 1-based column.
pub struct Cursor<'a> {
    iter: Chars<'a>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            iter: line.chars(),
            pos: 0,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.iter.clone().next()
    }

    /// Skips whitespace and returns the first other character.
    pub fn skip_whitespace_then_next(&mut self) -> Option<(char, usize)> {
        self.find(|(ch, _)| !ch.is_whitespace())
    }
}

impl Iterator for Cursor<'_> {
    type Item = (char, usize);

    fn next(&mut self) -> Option<(char, usize)> {
        let ch = self.iter.next()?;
        self.pos += 1;
        Some((ch, self.pos))
    }
}
