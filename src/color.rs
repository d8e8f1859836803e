// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
//! - <https://stackoverflow.com/questions/4842424/list-of-ansi-color-escape-sequences>

use strum_macros::EnumCount;

/// The 3-bit ANSI color domain, plus the "no color" sentinel.
///
/// Discriminant 0 is [`AnsiColor::None`], meaning "no color applied". It is
/// deliberately NOT black, so that a zeroed / default style stays unstyled.
/// The terminal's wire slot 0 (black) is reachable through [`AnsiColor::Black`]
/// at discriminant 8, which [`Self::wire_code`] folds back onto 0 with a
/// modulo-8 reduction. Domain value 0 and wire code 0 are different things.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumCount)]
pub enum AnsiColor {
    #[default]
    None = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    Black = 8,
}

impl AnsiColor {
    /// Returns `true` for the "no color applied" sentinel.
    #[must_use]
    pub const fn is_none(&self) -> bool { matches!(self, AnsiColor::None) }

    /// The 3-bit code this color occupies on the wire, in `0..=7`.
    ///
    /// Meaningless for [`AnsiColor::None`] (which never reaches the wire);
    /// callers must check [`Self::is_none`] first.
    #[must_use]
    pub const fn wire_code(&self) -> u8 { (*self as u8) % 8 }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::EnumCount as _;
    use test_case::test_case;

    use super::AnsiColor;

    #[test]
    fn default_is_none() {
        assert_eq!(AnsiColor::default(), AnsiColor::None);
        assert!(AnsiColor::default().is_none());
        assert!(!AnsiColor::Black.is_none());
    }

    #[test]
    fn nine_variants() {
        assert_eq!(AnsiColor::COUNT, 9);
    }

    #[test_case(AnsiColor::Red, 1)]
    #[test_case(AnsiColor::Green, 2)]
    #[test_case(AnsiColor::Yellow, 3)]
    #[test_case(AnsiColor::Blue, 4)]
    #[test_case(AnsiColor::Magenta, 5)]
    #[test_case(AnsiColor::Cyan, 6)]
    #[test_case(AnsiColor::White, 7)]
    fn wire_code_passthrough(color: AnsiColor, expected: u8) {
        assert_eq!(color.wire_code(), expected);
    }

    /// Discriminant 8 folds onto the terminal's 0 slot. This is the one place
    /// where "black" and "no color" would collide if `None` were not reserved
    /// at 0.
    #[test]
    fn black_folds_onto_slot_zero() {
        assert_eq!(AnsiColor::Black as u8, 8);
        assert_eq!(AnsiColor::Black.wire_code(), 0);
    }
}
