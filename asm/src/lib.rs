//! Two-pass assembler for the Hack machine language.

pub mod assemble;
pub mod cursor;
pub mod encode;
pub mod error;
pub mod line;
pub mod parser;
pub mod symbol;
pub mod util;

pub use assemble::{assemble, Encoded, Program};
pub use error::{EncodeError, Error, ParseError};
pub use symbol::{SymbolKind, SymbolTable};
