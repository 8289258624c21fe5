use crate::{alu::Comp, jump::Jump, mem::IMM_MAX, reg::Dest};

use color_print::cformat;

/// A resolved Hack instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    /// `@value`: load a 15-bit constant or address into A.
    A(u16),
    /// `dest=comp;jump`
    C { dest: Dest, comp: Comp, jump: Jump },
}

const C_PREFIX: u16 = 0b111 << 13;

impl Inst {
    pub fn to_bin(&self) -> u16 {
        match *self {
            Inst::A(value) => value & IMM_MAX,
            Inst::C { dest, comp, jump } => {
                C_PREFIX
                    | (comp.bits() as u16) << 6
                    | (dest.bits() as u16) << 3
                    | jump.bits() as u16
            }
        }
    }

    /// Decodes a machine word. Returns `None` for words whose C-instruction
    /// fields do not name a known operation.
    pub fn from_bin(bin: u16) -> Option<Inst> {
        if bin & 0x8000 == 0 {
            return Some(Inst::A(bin));
        }
        if bin & C_PREFIX != C_PREFIX {
            return None;
        }
        let comp = Comp::try_from(((bin >> 6) & 0x7F) as u8).ok()?;
        let dest = Dest::try_from(((bin >> 3) & 0x7) as u8).ok()?;
        let jump = Jump::try_from((bin & 0x7) as u8).ok()?;
        Some(Inst::C { dest, comp, jump })
    }

    /// Fixed-width binary text, MSB first.
    pub fn to_bin_string(&self) -> String {
        format!("{:016b}", self.to_bin())
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        match self {
            Inst::A(value) => cformat!("<red>@</><yellow>{}</>", value),
            Inst::C { dest, comp, jump } => {
                let dest = match dest {
                    Dest::NULL => String::new(),
                    d => cformat!("<blue>{}</>=", d),
                };
                let comp = if comp.reads_memory() {
                    cformat!("<cyan>{}</>", comp)
                } else {
                    cformat!("<green>{}</>", comp)
                };
                let jump = match jump {
                    Jump::NULL => String::new(),
                    j => cformat!(";<red>{}</>", j),
                };
                format!("{}{}{}", dest, comp, jump)
            }
        }
    }
}
