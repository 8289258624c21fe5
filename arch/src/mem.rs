// Hack memory map.

/// Highest instruction address (ROM is 32K words).
pub const ROM_MAX: u16 = 0x7FFF;

/// Largest value an A-instruction can load (15 bits).
pub const IMM_MAX: u16 = 0x7FFF;

/// First RAM word handed out to user variables.
pub const VAR_BASE: u16 = 16;

/// Last RAM word available to user variables; the screen map begins after it.
pub const VAR_MAX: u16 = 16383;

pub const SCREEN: u16 = 16384;
pub const KBD: u16 = 24576;

/// Symbols every program can use without declaring them.
pub const PREDEFINED: [(&str, u16); 23] = [
    // Virtual machine segment pointers
    ("SP", 0),
    ("LCL", 1),
    ("ARG", 2),
    ("THIS", 3),
    ("THAT", 4),
    // General registers
    ("R0", 0),
    ("R1", 1),
    ("R2", 2),
    ("R3", 3),
    ("R4", 4),
    ("R5", 5),
    ("R6", 6),
    ("R7", 7),
    ("R8", 8),
    ("R9", 9),
    ("R10", 10),
    ("R11", 11),
    ("R12", 12),
    ("R13", 13),
    ("R14", 14),
    ("R15", 15),
    // Memory mapped I/O
    ("SCREEN", SCREEN),
    ("KBD", KBD),
];
