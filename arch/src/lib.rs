//! Hack instruction set: C-instruction field tables, instruction words and
//! the fixed memory map.

pub mod alu;
pub mod inst;
pub mod jump;
pub mod mem;
pub mod reg;
