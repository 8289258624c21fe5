use super::{check_tail, drive, is_symbol_char, Step};
use crate::{cursor::Cursor, error::ParseError};

/// `@value`: either a decimal literal or a symbol reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressInstruction {
    pub is_symbolic: bool,
    pub value: String,
}

impl AddressInstruction {
    pub fn literal(value: &str) -> Self {
        Self {
            is_symbolic: false,
            value: value.to_string(),
        }
    }

    pub fn symbol(value: &str) -> Self {
        Self {
            is_symbolic: true,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum State {
    Start,
    First,
    Number,
    Symbol,
    Tail,
}

pub struct AddressParser<'a> {
    cursor: Cursor<'a>,
    token: String,
    instr: Option<AddressInstruction>,
}

impl<'a> AddressParser<'a> {
    /// Parses `@token` followed by an optional comment.
    /// A blank line yields `Ok(None)`.
    pub fn parse(line: &'a str) -> Result<Option<AddressInstruction>, ParseError> {
        let mut parser = AddressParser {
            cursor: Cursor::new(line),
            token: String::with_capacity(15),
            instr: None,
        };
        drive(State::Start, |state| parser.step(state))?;
        Ok(parser.instr)
    }

    fn step(&mut self, state: State) -> Result<Step<State>, ParseError> {
        match state {
            State::Start => match self.cursor.skip_whitespace_then_next() {
                None => Ok(Step::Done),
                Some(('@', _)) => Ok(Step::Next(State::First)),
                Some((_, pos)) => Err(ParseError::new(pos, "Unexpected start of A-Instruction")),
            },
            State::First => match self.cursor.next() {
                None => Err(ParseError::new(
                    self.cursor.pos(),
                    "A-Instruction ends unexpectedly",
                )),
                Some((ch, _)) if ch.is_ascii_digit() => {
                    self.token.push(ch);
                    Ok(Step::Next(State::Number))
                }
                Some((ch, _)) if ch.is_alphabetic() || ch == '_' => {
                    self.token.push(ch);
                    Ok(Step::Next(State::Symbol))
                }
                Some((ch, pos)) => Err(ParseError::new(
                    pos,
                    format!("Unexpected first symbol '{}'", ch),
                )),
            },
            State::Number => self.read_token(false, |ch| ch.is_ascii_digit()),
            State::Symbol => self.read_token(true, is_symbol_char),
            State::Tail => {
                check_tail(&mut self.cursor)?;
                Ok(Step::Done)
            }
        }
    }

    /// Accumulates token characters up to whitespace or end of line.
    fn read_token(
        &mut self,
        is_symbolic: bool,
        accept: impl Fn(char) -> bool,
    ) -> Result<Step<State>, ParseError> {
        let next = loop {
            match self.cursor.next() {
                None => break Step::Done,
                Some((ch, _)) if ch.is_whitespace() => break Step::Next(State::Tail),
                Some((ch, _)) if accept(ch) => self.token.push(ch),
                Some((ch, pos)) => {
                    return Err(ParseError::new(
                        pos,
                        format!("Unexpected character in A-Instruction '{}'", ch),
                    ))
                }
            }
        };
        self.instr = Some(AddressInstruction {
            is_symbolic,
            value: std::mem::take(&mut self.token),
        });
        Ok(next)
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
                    assert_eq!(AddressParser::parse($line), Ok(Some($want)));
                }
            )*
        }
    }

    macro_rules! test_err {
        ($($name:ident: $line:expr => $pos:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let err = AddressParser::parse($line).unwrap_err();
                    assert_eq!(err.pos, $pos, "{}", err);
                }
            )*
        }
    }

    test_ok! {
        zero: "@0" => AddressInstruction::literal("0"),
        padded: "  @0  " => AddressInstruction::literal("0"),
        number: "@123" => AddressInstruction::literal("123"),
        leading_zero: "@0123" => AddressInstruction::literal("0123"),
        single_letter: "@i" => AddressInstruction::symbol("i"),
        word: "@variable1" => AddressInstruction::symbol("variable1"),
        letter_then_digits: "@v123" => AddressInstruction::symbol("v123"),
        with_comment: "@var //Comment" => AddressInstruction::symbol("var"),
        with_underscore: "@A_B" => AddressInstruction::symbol("A_B"),
        underscore_first: "@_tmp" => AddressInstruction::symbol("_tmp"),
        vm_label: "@Main.loop$ret.1" => AddressInstruction::symbol("Main.loop$ret.1"),
        tab_before_comment: "@10\t// ten" => AddressInstruction::literal("10"),
    }

    test_err! {
        no_at: "A" => 1,
        no_token: "@" => 1,
        double_at: "@@0" => 2,
        at_after_digit: "@0@" => 3,
        letter_in_number: "@0DD" => 3,
        comment_without_space: "@123//C" => 5,
        single_slash_after_number: "@123/" => 5,
        second_word: "@A B" => 4,
        single_slash_comment: "@A /B" => 5,
        dash: "@A-B" => 3,
        slash_underscore: "@A /_" => 5,
        space_after_at: "@ 1" => 2,
    }

    #[test]
    fn blank_line_has_no_instruction() {
        assert_eq!(AddressParser::parse(""), Ok(None));
        assert_eq!(AddressParser::parse("   "), Ok(None));
    }
}
