use std::fmt::Display;

use super::{check_tail, drive, is_symbol_char, Step};
use crate::{cursor::Cursor, error::ParseError};

/// Jump target declared as `(NAME)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label(pub String);

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy)]
enum State {
    Start,
    First,
    Body,
    Tail,
}

pub struct LabelParser<'a> {
    cursor: Cursor<'a>,
    name: String,
    label: Option<Label>,
}

impl<'a> LabelParser<'a> {
    /// Parses `(NAME)` followed by an optional comment.
    /// A blank line yields `Ok(None)`.
    pub fn parse(line: &'a str) -> Result<Option<Label>, ParseError> {
        let mut parser = LabelParser {
            cursor: Cursor::new(line),
            name: String::new(),
            label: None,
        };
        drive(State::Start, |state| parser.step(state))?;
        Ok(parser.label)
    }

    fn step(&mut self, state: State) -> Result<Step<State>, ParseError> {
        match state {
            State::Start => match self.cursor.skip_whitespace_then_next() {
                None => Ok(Step::Done),
                Some(('(', _)) => Ok(Step::Next(State::First)),
                Some((ch, pos)) => Err(ParseError::new(
                    pos,
                    format!("Unexpected start of label '{}'", ch),
                )),
            },
            State::First => match self.cursor.next() {
                None => Err(self.unterminated()),
                Some((ch, _)) if ch.is_alphabetic() || ch == '_' => {
                    self.name.push(ch);
                    Ok(Step::Next(State::Body))
                }
                Some((ch, pos)) => Err(ParseError::new(
                    pos,
                    format!("Unexpected character '{}': Label must begin with a letter", ch),
                )),
            },
            State::Body => loop {
                match self.cursor.next() {
                    None => return Err(self.unterminated()),
                    Some((')', _)) => {
                        self.label = Some(Label(std::mem::take(&mut self.name)));
                        return Ok(Step::Next(State::Tail));
                    }
                    Some((ch, pos)) if ch.is_whitespace() => {
                        return Err(ParseError::new(pos, "Label cannot contain spaces"))
                    }
                    Some((ch, _)) if is_symbol_char(ch) => self.name.push(ch),
                    Some((ch, pos)) => {
                        return Err(ParseError::new(
                            pos,
                            format!("Unexpected character '{}' in label", ch),
                        ))
                    }
                }
            },
            State::Tail => {
                check_tail(&mut self.cursor)?;
                Ok(Step::Done)
            }
        }
    }

    fn unterminated(&self) -> ParseError {
        ParseError::new(self.cursor.pos(), "Label should finish with ')'")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_ok {
        ($($name:ident: $line:expr => $want:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let label = LabelParser::parse($line).unwrap();
                    assert_eq!(label, Some(Label($want.to_string())));
                }
            )*
        }
    }

    macro_rules! test_err {
        ($($name:ident: $line:expr => $pos:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let err = LabelParser::parse($line).unwrap_err();
                    assert_eq!(err.pos, $pos, "{}", err);
                }
            )*
        }
    }

    test_ok! {
        plain: "(LABEL)" => "LABEL",
        padded: " (LABEL)  " => "LABEL",
        with_digit: "(L1)" => "L1",
        lower: "(lab1)" => "lab1",
        with_comment: "(lab1) //Comment" => "lab1",
        underscore_first: "(_start)" => "_start",
        vm_style: "(Main.loop$ret.1)" => "Main.loop$ret.1",
    }

    test_err! {
        unterminated: "(Label" => 6,
        space_after_open: "( Label)" => 2,
        space_inside: "(Lab el)" => 5,
        space_before_close: "(Label )" => 7,
        reopened: "(Label(" => 7,
        digit_first: "(1Label)" => 2,
        trailing_word: "(Label) a" => 9,
        single_slash: "(Label) /a" => 10,
        not_a_label: "Label)" => 1,
        bad_char: "(La-bel)" => 4,
        empty_name: "()" => 2,
    }

    #[test]
    fn blank_line_has_no_label() {
        assert_eq!(LabelParser::parse(""), Ok(None));
        assert_eq!(LabelParser::parse("  \t"), Ok(None));
    }
}
