use std::{fs::File, io::BufWriter, path::Path};

use arch::inst::Inst;
use color_print::cformat;
use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    assemble::{Encoded, Program},
    error::Error,
    symbol::{SymbolKind, SymbolTable},
};

const RULE: &str = "-----------------------+-----------------------------------------------------";

fn split_comment(text: &str) -> (&str, Option<&str>) {
    match text.find("//") {
        Some(idx) => (text[..idx].trim_end(), Some(&text[idx..])),
        None => (text, None),
    }
}

fn format_line(encoded: &Encoded) -> String {
    let (code, comment) = split_comment(&encoded.line.text);
    let inst = u16::from_str_radix(&encoded.bin, 2)
        .ok()
        .and_then(Inst::from_bin)
        .map(|inst| inst.cformat())
        .unwrap_or_else(|| cformat!("<r,s>{}</>", code));
    let comment = comment.map(|c| format!(" {}", c)).unwrap_or_default();
    let symbol = match code.strip_prefix('@') {
        Some(name) if !name.starts_with(|c: char| c.is_ascii_digit()) => {
            cformat!(" <m>({})</>", name)
        }
        _ => String::new(),
    };
    format!(
        "[{:04X}] {} | {:>4}:   {}{}{}",
        encoded.rom, encoded.bin, encoded.line.no, inst, symbol, comment
    )
}

/// Prints the translated program: ROM address, machine word, source line
/// number and the decoded instruction. Labels appear above the instruction
/// they point at.
pub fn print_dump(program: &Program) {
    let mut labels: IndexMap<u16, Vec<&str>> = IndexMap::new();
    for (name, kind, addr) in program.symbols.iter() {
        if kind == SymbolKind::Label {
            labels.entry(addr).or_default().push(name);
        }
    }
    let print_labels = |rom: u16| {
        for name in labels.get(&rom).into_iter().flatten() {
            println!("{:23}|       {}", "", cformat!("<g>({})</>", name));
        }
    };

    println!("{}", RULE);
    for encoded in &program.lines {
        print_labels(encoded.rom);
        println!("{}", format_line(encoded));
    }
    if let Ok(end) = u16::try_from(program.lines.len()) {
        print_labels(end);
    }
    println!("{}", RULE);
}

/// User-defined symbols grouped by kind, in definition order.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct SymbolMap {
    pub labels: IndexMap<String, u16>,
    pub variables: IndexMap<String, u16>,
}

impl SymbolMap {
    pub fn collect(table: &SymbolTable) -> Self {
        let mut map = SymbolMap::default();
        for (name, kind, addr) in table.iter() {
            match kind {
                SymbolKind::Label => map.labels.insert(name.to_string(), addr),
                SymbolKind::Variable => map.variables.insert(name.to_string(), addr),
                SymbolKind::Predefined => continue,
            };
        }
        map
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

pub fn write_symbols(path: &Path, table: &SymbolTable) -> Result<(), Error> {
    let name = path.display().to_string();
    let file = File::create(path).map_err(|e| Error::FileCreate(name.clone(), e))?;
    serde_yaml::to_writer(BufWriter::new(file), &SymbolMap::collect(table))
        .map_err(|e| Error::SymbolDump(name, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::assemble;

    #[test]
    fn comment_is_split_off() {
        assert_eq!(split_comment("@1 // one"), ("@1", Some("// one")));
        assert_eq!(split_comment("D=A"), ("D=A", None));
    }

    #[test]
    fn symbol_map_skips_predefined() {
        let program = assemble("(LOOP)\n@i\nM=0\n@sum\n@LOOP\n0;JMP\n(END)\n".as_bytes()).unwrap();
        let map = SymbolMap::collect(&program.symbols);
        assert_eq!(
            map.labels.into_iter().collect::<Vec<_>>(),
            vec![("LOOP".to_string(), 0), ("END".to_string(), 5)]
        );
        assert_eq!(
            map.variables.into_iter().collect::<Vec<_>>(),
            vec![("i".to_string(), 16), ("sum".to_string(), 17)]
        );
    }

    #[test]
    fn symbol_map_yaml() {
        let program = assemble("(START)\n@x\nD=M\n".as_bytes()).unwrap();
        let yaml = SymbolMap::collect(&program.symbols).to_yaml().unwrap();
        assert_eq!(yaml, "labels:\n  START: 0\nvariables:\n  x: 16\n");
    }

    #[test]
    fn empty_symbol_map_yaml() {
        let program = assemble("@0\n".as_bytes()).unwrap();
        let yaml = SymbolMap::collect(&program.symbols).to_yaml().unwrap();
        assert_eq!(yaml, "labels: {}\nvariables: {}\n");
    }

    #[test]
    fn listing_line() {
        let program = assemble("@i // counter\n".as_bytes()).unwrap();
        let line = format_line(&program.lines[0]);
        assert!(line.starts_with("[0000] 0000000000010000 |    1:   "));
        assert!(line.contains("// counter"));
    }
}
