//! Life list
//!
//! Each wrong guess costs one programming language. The last entry, Assembly, is what remains
//! when everything else is gone, so it never counts as a life.

/// A 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Build a color from a `0xRRGGBB` literal
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

/// One life entry with its theme colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub name: &'static str,
    pub background_color: Rgb,
    pub color: Rgb,
}

impl Language {
    #[must_use]
    pub const fn new(name: &'static str, background_color: u32, color: u32) -> Self {
        Self {
            name,
            background_color: Rgb::from_hex(background_color),
            color: Rgb::from_hex(color),
        }
    }
}

const LIGHT: u32 = 0x00F9_F4DA;
const DARK: u32 = 0x001E_1E1E;

/// Default life list, in the order languages are lost
pub const LANGUAGES: &[Language] = &[
    Language::new("HTML", 0x00E2_680F, LIGHT),
    Language::new("CSS", 0x0032_8AF1, LIGHT),
    Language::new("JavaScript", 0x00F4_EB13, DARK),
    Language::new("React", 0x002E_D3E9, DARK),
    Language::new("TypeScript", 0x0029_8EC6, LIGHT),
    Language::new("Node.js", 0x0059_9137, LIGHT),
    Language::new("Python", 0x00FF_D742, DARK),
    Language::new("Ruby", 0x00D0_2B2B, LIGHT),
    Language::new("Assembly", 0x002D_519F, LIGHT),
];

/// Wrong guesses allowed before the game is lost
#[must_use]
pub const fn max_lives(lives: &[Language]) -> usize {
    lives.len().saturating_sub(1)
}
