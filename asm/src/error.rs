use color_print::ceprintln;
use thiserror::Error;

/// Malformed label, A-instruction or C-instruction syntax.
/// `pos` counts the characters consumed from the trimmed line (1-based).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Parsing error at position {pos}: {msg}")]
pub struct ParseError {
    pub pos: usize,
    pub msg: String,
}

impl ParseError {
    pub fn new(pos: usize, msg: impl Into<String>) -> Self {
        ParseError {
            pos,
            msg: msg.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Cannot encode {0} as it is out of bound")]
    OutOfRange(i64),

    #[error("Cannot parse `{0}` as a number")]
    InvalidLiteral(String),

    #[error("Cannot encode dest `{0}`")]
    UnknownDest(String),

    #[error("Cannot encode comp `{0}`")]
    UnknownComp(String),

    #[error("Cannot encode jump `{0}`")]
    UnknownJump(String),

    #[error("User RAM ran out. Address {0} is reserved")]
    RamExhausted(u16),

    #[error("Re-defined symbol: `{0}`")]
    Redefined(String),

    #[error("Undefined symbol: `{0}`")]
    Undefined(String),

    #[error("Label `{0}` has ROM address {1} out of bound")]
    LabelOutOfRange(String, usize),

    #[error("Program does not fit in ROM: instruction {0} is out of bound")]
    RomExhausted(usize),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("{source}")]
    Parse {
        line: usize,
        text: String,
        source: ParseError,
    },

    #[error("{source}")]
    Encode {
        line: usize,
        text: String,
        source: EncodeError,
    },

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read line")]
    FileRead(#[source] std::io::Error),

    #[error("Failed to create directory: {0}")]
    DirCreate(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to write symbol map: {0}")]
    SymbolDump(String, #[source] serde_yaml::Error),
}

pub const EXIT_PARSE: u8 = 3;
pub const EXIT_ENCODE: u8 = 4;
pub const EXIT_IO: u8 = 5;
pub const EXIT_OTHER: u8 = 99;

impl Error {
    /// Process exit status for this error category.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Parse { .. } => EXIT_PARSE,
            Error::Encode { .. } => EXIT_ENCODE,
            Error::FileOpen(..)
            | Error::FileRead(..)
            | Error::DirCreate(..)
            | Error::FileCreate(..)
            | Error::FileWrite(..) => EXIT_IO,
            Error::SymbolDump(..) => EXIT_OTHER,
        }
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str) {
        ceprintln!("<red,bold>error</>: {}", self);

        let (line, text, pos) = match self {
            Error::Parse { line, text, source } => (*line, text, Some(source.pos)),
            Error::Encode { line, text, .. } => (*line, text, None),
            _ => return,
        };

        ceprintln!("     <blue>--></> <underline>{}:{}</>", file, line);
        ceprintln!("      <blue>|</>");
        ceprintln!(" <blue>{:>4} |</> {}", line, text);
        match pos {
            Some(pos) => ceprintln!(
                "      <blue>|</> {}<red,bold>^</>",
                " ".repeat(pos.saturating_sub(1))
            ),
            None => ceprintln!("      <blue>|</>"),
        }
    }
}
