use bimap::BiMap;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use once_cell::sync::Lazy;
use std::fmt::Display;
use strum::EnumIter;

/// ALU operation of a C-instruction.
///
/// The discriminant is the 7-bit `a c1 c2 c3 c4 c5 c6` field. The `a` bit
/// selects the second operand: `0` reads the A register, `1` reads `M`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, EnumIter, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Comp {
    Zero = 0b0101010,
    One = 0b0111111,
    NegOne = 0b0111010,
    D = 0b0001100,
    A = 0b0110000,
    M = 0b1110000,
    NotD = 0b0001101,
    NotA = 0b0110001,
    NotM = 0b1110001,
    NegD = 0b0001111,
    NegA = 0b0110011,
    NegM = 0b1110011,
    DPlusOne = 0b0011111,
    APlusOne = 0b0110111,
    MPlusOne = 0b1110111,
    DMinusOne = 0b0001110,
    AMinusOne = 0b0110010,
    MMinusOne = 0b1110010,
    DPlusA = 0b0000010,
    DPlusM = 0b1000010,
    DMinusA = 0b0010011,
    DMinusM = 0b1010011,
    AMinusD = 0b0000111,
    MMinusD = 0b1000111,
    DAndA = 0b0000000,
    DAndM = 0b1000000,
    DOrA = 0b0010101,
    DOrM = 0b1010101,
}

static COMP_STR: Lazy<BiMap<Comp, &'static str>> = Lazy::new(|| {
    let mut map: BiMap<Comp, &'static str> = BiMap::new();
    map.insert(Comp::Zero, "0");
    map.insert(Comp::One, "1");
    map.insert(Comp::NegOne, "-1");
    map.insert(Comp::D, "D");
    map.insert(Comp::A, "A");
    map.insert(Comp::M, "M");
    map.insert(Comp::NotD, "!D");
    map.insert(Comp::NotA, "!A");
    map.insert(Comp::NotM, "!M");
    map.insert(Comp::NegD, "-D");
    map.insert(Comp::NegA, "-A");
    map.insert(Comp::NegM, "-M");
    map.insert(Comp::DPlusOne, "D+1");
    map.insert(Comp::APlusOne, "A+1");
    map.insert(Comp::MPlusOne, "M+1");
    map.insert(Comp::DMinusOne, "D-1");
    map.insert(Comp::AMinusOne, "A-1");
    map.insert(Comp::MMinusOne, "M-1");
    map.insert(Comp::DPlusA, "D+A");
    map.insert(Comp::DPlusM, "D+M");
    map.insert(Comp::DMinusA, "D-A");
    map.insert(Comp::DMinusM, "D-M");
    map.insert(Comp::AMinusD, "A-D");
    map.insert(Comp::MMinusD, "M-D");
    map.insert(Comp::DAndA, "D&A");
    map.insert(Comp::DAndM, "D&M");
    map.insert(Comp::DOrA, "D|A");
    map.insert(Comp::DOrM, "D|M");
    map
});

impl Comp {
    pub fn parse(s: &str) -> Option<Comp> {
        COMP_STR.get_by_right(s).copied()
    }

    pub fn mnemonic(&self) -> &'static str {
        COMP_STR.get_by_left(self).copied().unwrap_or("?")
    }

    pub fn bits(self) -> u8 {
        self.into()
    }

    /// True when the second operand comes from memory (`a` bit set).
    pub fn reads_memory(&self) -> bool {
        self.bits() & 0b1000000 != 0
    }
}

impl Display for Comp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
