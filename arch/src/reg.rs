use bimap::BiMap;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use once_cell::sync::Lazy;
use std::fmt::Display;
use strum::EnumIter;

/// Destination registers of a C-instruction, encoded as the `d1 d2 d3` bits
/// (A, D, M).
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, EnumIter, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Dest {
    NULL = 0b000,
    M = 0b001,
    D = 0b010,
    MD = 0b011,
    A = 0b100,
    AM = 0b101,
    AD = 0b110,
    AMD = 0b111,
}

static DEST_STR: Lazy<BiMap<Dest, &'static str>> = Lazy::new(|| {
    let mut map: BiMap<Dest, &'static str> = BiMap::new();
    map.insert(Dest::NULL, "");
    map.insert(Dest::M, "M");
    map.insert(Dest::D, "D");
    map.insert(Dest::MD, "MD");
    map.insert(Dest::A, "A");
    map.insert(Dest::AM, "AM");
    map.insert(Dest::AD, "AD");
    map.insert(Dest::AMD, "AMD");
    map
});

impl Dest {
    /// Looks up the destination exactly as written, e.g. `"AMD"`.
    /// The empty string is the null destination.
    pub fn parse(s: &str) -> Option<Dest> {
        DEST_STR.get_by_right(s).copied()
    }

    pub fn mnemonic(&self) -> &'static str {
        DEST_STR.get_by_left(self).copied().unwrap_or("?")
    }

    pub fn bits(self) -> u8 {
        self.into()
    }
}

impl Display for Dest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
