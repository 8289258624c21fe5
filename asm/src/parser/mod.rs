pub mod ainst;
pub mod cinst;
pub mod label;

pub use ainst::{AddressInstruction, AddressParser};
pub use cinst::{ComputeInstruction, ComputeParser};
pub use label::{Label, LabelParser};

use crate::{cursor::Cursor, error::ParseError};

/// Outcome of one state-machine transition.
pub(crate) enum Step<S> {
    Next(S),
    Done,
}

/// Runs a state machine until it reports `Step::Done`.
pub(crate) fn drive<S>(
    mut state: S,
    mut step: impl FnMut(S) -> Result<Step<S>, ParseError>,
) -> Result<(), ParseError> {
    while let Step::Next(next) = step(state)? {
        state = next;
    }
    Ok(())
}

/// Characters allowed after the first one of a label or symbol.
pub(crate) fn is_symbol_char(ch: char) -> bool {
    ch.is_alphabetic() || ch.is_ascii_digit() || matches!(ch, '_' | '.' | '$')
}

/// The rest of the line must be blank or a `//` comment.
pub(crate) fn check_tail(cursor: &mut Cursor) -> Result<(), ParseError> {
    let (ch, pos) = match cursor.skip_whitespace_then_next() {
        Some(next) => next,
        None => return Ok(()),
    };
    if ch != '/' {
        return Err(ParseError::new(pos, format!("Unexpected character '{}'", ch)));
    }
    match cursor.next() {
        Some(('/', _)) => Ok(()),
        Some((ch, pos)) => Err(ParseError::new(pos, format!("Unexpected character '{}'", ch))),
        None => Err(ParseError::new(cursor.pos(), "Unexpected end of line after '/'")),
    }
}
