use std::io::{BufRead, Write};

use arch::mem::ROM_MAX;

use crate::{
    encode::{encode_address_instruction, encode_compute_instruction},
    error::{EncodeError, Error, ParseError},
    line::{LineKind, SourceLine},
    parser::{AddressParser, ComputeParser, Label, LabelParser},
    symbol::SymbolTable,
};

/// One translated instruction and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub line: SourceLine,
    pub rom: u16,
    pub bin: String,
}

/// Result of a complete translation run.
#[derive(Debug, Clone)]
pub struct Program {
    pub lines: Vec<Encoded>,
    pub symbols: SymbolTable,
}

impl Program {
    /// Writes one binary word per line.
    pub fn write_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        for encoded in &self.lines {
            writeln!(writer, "{}", encoded.bin)?;
        }
        writer.flush()
    }
}

fn parse_error(line: &SourceLine, source: ParseError) -> Error {
    Error::Parse {
        line: line.no,
        text: line.text.clone(),
        source,
    }
}

fn encode_error(line: &SourceLine, source: EncodeError) -> Error {
    Error::Encode {
        line: line.no,
        text: line.text.clone(),
        source,
    }
}

pub fn read_source<R: BufRead>(reader: R) -> Result<Vec<SourceLine>, Error> {
    reader
        .lines()
        .enumerate()
        .map(|(idx, raw)| {
            let raw = raw.map_err(Error::FileRead)?;
            Ok(SourceLine::new(idx + 1, &raw))
        })
        .collect()
}

/// Pass 1: binds every label to the ROM address of the instruction that
/// follows it and returns the instruction lines.
pub fn collect_labels(
    lines: Vec<SourceLine>,
    table: &mut SymbolTable,
) -> Result<Vec<SourceLine>, Error> {
    let mut retained = vec![];
    for line in lines {
        if line.text.is_empty() {
            continue;
        }
        match line.kind() {
            LineKind::Comment => {}
            LineKind::Label => {
                let label = LabelParser::parse(&line.text).map_err(|e| parse_error(&line, e))?;
                if let Some(Label(name)) = label {
                    table
                        .add_label(&name, retained.len())
                        .map_err(|e| encode_error(&line, e))?;
                }
            }
            LineKind::Address | LineKind::Compute => retained.push(line),
        }
    }
    Ok(retained)
}

/// Pass 2: encodes the instruction lines, allocating variables on the way.
pub fn translate(lines: Vec<SourceLine>, table: &mut SymbolTable) -> Result<Vec<Encoded>, Error> {
    let mut encoded = Vec::with_capacity(lines.len());
    for (idx, line) in lines.into_iter().enumerate() {
        let rom = match u16::try_from(idx) {
            Ok(rom) if rom <= ROM_MAX => rom,
            _ => return Err(encode_error(&line, EncodeError::RomExhausted(idx))),
        };
        let bin = match line.kind() {
            LineKind::Address => {
                let instr = AddressParser::parse(&line.text).map_err(|e| parse_error(&line, e))?;
                match instr {
                    Some(instr) => encode_address_instruction(&instr, table),
                    None => continue,
                }
            }
            _ => {
                let instr = ComputeParser::parse(&line.text).map_err(|e| parse_error(&line, e))?;
                encode_compute_instruction(&instr)
            }
        }
        .map_err(|e| encode_error(&line, e))?;
        encoded.push(Encoded { line, rom, bin });
    }
    Ok(encoded)
}

/// Runs both passes over `reader`. Nothing is produced unless every line
/// translates.
pub fn assemble<R: BufRead>(reader: R) -> Result<Program, Error> {
    let mut symbols = SymbolTable::new();
    let source = read_source(reader)?;
    let instructions = collect_labels(source, &mut symbols)?;
    let lines = translate(instructions, &mut symbols)?;
    Ok(Program { lines, symbols })
}
