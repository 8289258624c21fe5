use arch::mem::{PREDEFINED, ROM_MAX, VAR_BASE, VAR_MAX};
use indexmap::IndexMap;
use serde::Serialize;

use crate::error::EncodeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Predefined,
    Label,
    Variable,
}

/// Labels (ROM) and variables (RAM) share one namespace with the predefined
/// symbols. A name is bound once and never rebound.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    table: IndexMap<String, (SymbolKind, u16)>,
    next_var: u16,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        let table = PREDEFINED
            .iter()
            .map(|(name, addr)| (name.to_string(), (SymbolKind::Predefined, *addr)))
            .collect();
        SymbolTable {
            table,
            next_var: VAR_BASE,
        }
    }

    pub fn exists(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Binds `name` to the next free RAM word and returns it.
    pub fn add_variable(&mut self, name: &str) -> Result<u16, EncodeError> {
        if self.next_var > VAR_MAX {
            return Err(EncodeError::RamExhausted(self.next_var));
        }
        if self.exists(name) {
            return Err(EncodeError::Redefined(name.to_string()));
        }
        let addr = self.next_var;
        self.table
            .insert(name.to_string(), (SymbolKind::Variable, addr));
        self.next_var += 1;
        Ok(addr)
    }

    pub fn get(&self, name: &str) -> Result<u16, EncodeError> {
        self.table
            .get(name)
            .map(|(_, addr)| *addr)
            .ok_or_else(|| EncodeError::Undefined(name.to_string()))
    }

    /// Binds `name` to the ROM address `addr`.
    pub fn add_label(&mut self, name: &str, addr: usize) -> Result<u16, EncodeError> {
        if self.exists(name) {
            return Err(EncodeError::Redefined(name.to_string()));
        }
        let rom = match u16::try_from(addr) {
            Ok(rom) if rom <= ROM_MAX => rom,
            _ => return Err(EncodeError::LabelOutOfRange(name.to_string(), addr)),
        };
        self.table.insert(name.to_string(), (SymbolKind::Label, rom));
        Ok(rom)
    }

    /// Entries in definition order, predefined symbols first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, SymbolKind, u16)> {
        self.table
            .iter()
            .map(|(name, (kind, addr))| (name.as_str(), *kind, *addr))
    }
}
