use bimap::BiMap;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use once_cell::sync::Lazy;
use std::fmt::Display;
use strum::EnumIter;

/// Jump condition of a C-instruction (`j1 j2 j3`: out < 0, out = 0, out > 0).
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, EnumIter, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Jump {
    NULL = 0b000,
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}

static JUMP_STR: Lazy<BiMap<Jump, &'static str>> = Lazy::new(|| {
    let mut map: BiMap<Jump, &'static str> = BiMap::new();
    map.insert(Jump::NULL, "");
    map.insert(Jump::JGT, "JGT");
    map.insert(Jump::JEQ, "JEQ");
    map.insert(Jump::JGE, "JGE");
    map.insert(Jump::JLT, "JLT");
    map.insert(Jump::JNE, "JNE");
    map.insert(Jump::JLE, "JLE");
    map.insert(Jump::JMP, "JMP");
    map
});

impl Jump {
    pub fn parse(s: &str) -> Option<Jump> {
        JUMP_STR.get_by_right(s).copied()
    }

    pub fn mnemonic(&self) -> &'static str {
        JUMP_STR.get_by_left(self).copied().unwrap_or("?")
    }

    pub fn bits(self) -> u8 {
        self.into()
    }
}

impl Display for Jump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
