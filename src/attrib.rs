// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Text attributes and the bit set that combines them.

use std::ops::{Add, AddAssign, BitOr};

use strum_macros::{EnumCount, EnumIter};

use crate::SgrCode;

/// One text attribute. The variant declaration order is load bearing: it is
/// the fixed order in which attributes are encoded (via [`strum::IntoEnumIterator`]),
/// so two equal styles always produce byte-identical sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCount, EnumIter)]
pub enum Attrib {
    Bold,
    Underline,
    Blink,
    Inverse,
}

impl Attrib {
    #[must_use]
    pub const fn bit(&self) -> u8 {
        match self {
            Attrib::Bold => 1 << 0,
            Attrib::Underline => 1 << 1,
            Attrib::Blink => 1 << 2,
            Attrib::Inverse => 1 << 3,
        }
    }

    /// The SGR code that turns this attribute on.
    #[must_use]
    pub const fn on_code(&self) -> SgrCode {
        match self {
            Attrib::Bold => SgrCode::Bold,
            Attrib::Underline => SgrCode::Underline,
            Attrib::Blink => SgrCode::Blink,
            Attrib::Inverse => SgrCode::Invert,
        }
    }

    /// The SGR code that turns this attribute (and only this attribute) off.
    #[must_use]
    pub const fn off_code(&self) -> SgrCode {
        match self {
            Attrib::Bold => SgrCode::BoldOff,
            Attrib::Underline => SgrCode::UnderlineOff,
            Attrib::Blink => SgrCode::BlinkOff,
            Attrib::Inverse => SgrCode::InvertOff,
        }
    }
}

/// A bit set of [Attrib]s.
///
/// Combine attributes with `+` or `|` in either direction:
///
/// ```rust
/// use ansi_attr::{Attrib, Attribs};
///
/// let bold_underline: Attribs = Attrib::Bold + Attrib::Underline;
/// assert!(bold_underline.contains(Attrib::Bold));
/// assert!(!bold_underline.contains(Attrib::Blink));
///
/// let mut attribs = Attribs::default();
/// attribs += Attrib::Inverse;
/// assert!(attribs.contains(Attrib::Inverse));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attribs(u8);

impl Attribs {
    const MASK: u8 = Attrib::Bold.bit()
        | Attrib::Underline.bit()
        | Attrib::Blink.bit()
        | Attrib::Inverse.bit();

    pub const EMPTY: Attribs = Attribs(0);

    /// Build from raw bits. Bits outside the four defined attributes are
    /// silently ignored, never an error.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self { Attribs(bits & Self::MASK) }

    #[must_use]
    pub const fn bits(&self) -> u8 { self.0 }

    #[must_use]
    pub const fn contains(&self, attrib: Attrib) -> bool {
        self.0 & attrib.bit() != 0
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool { self.0 == 0 }

    #[must_use]
    pub const fn with(self, attrib: Attrib) -> Self {
        Attribs(self.0 | attrib.bit())
    }
}

impl From<Attrib> for Attribs {
    fn from(attrib: Attrib) -> Self { Attribs(attrib.bit()) }
}

impl Add for Attrib {
    type Output = Attribs;

    fn add(self, rhs: Self) -> Attribs { Attribs(self.bit() | rhs.bit()) }
}

impl Add<Attrib> for Attribs {
    type Output = Attribs;

    fn add(self, rhs: Attrib) -> Attribs { Attribs(self.0 | rhs.bit()) }
}

impl Add for Attribs {
    type Output = Attribs;

    fn add(self, rhs: Self) -> Attribs { Attribs(self.0 | rhs.0) }
}

impl AddAssign<Attrib> for Attribs {
    fn add_assign(&mut self, rhs: Attrib) { self.0 |= rhs.bit(); }
}

impl BitOr for Attrib {
    type Output = Attribs;

    fn bitor(self, rhs: Self) -> Attribs { self + rhs }
}

impl BitOr for Attribs {
    type Output = Attribs;

    fn bitor(self, rhs: Self) -> Attribs { self + rhs }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator as _;

    use super::{Attrib, Attribs};

    #[test]
    fn combine_and_query() {
        let attribs = Attrib::Bold + Attrib::Blink;
        assert!(attribs.contains(Attrib::Bold));
        assert!(attribs.contains(Attrib::Blink));
        assert!(!attribs.contains(Attrib::Underline));
        assert!(!attribs.contains(Attrib::Inverse));
        assert!(!attribs.is_empty());
        assert!(Attribs::EMPTY.is_empty());
    }

    #[test]
    fn plus_and_pipe_agree() {
        assert_eq!(Attrib::Bold + Attrib::Inverse, Attrib::Bold | Attrib::Inverse);
        let mut lhs = Attribs::default();
        lhs += Attrib::Underline;
        assert_eq!(lhs, Attribs::from(Attrib::Underline));
    }

    #[test]
    fn undefined_bits_are_ignored() {
        let attribs = Attribs::from_bits(0xF0 | Attrib::Bold.bit());
        assert_eq!(attribs, Attribs::from(Attrib::Bold));
        assert_eq!(Attribs::from_bits(0xF0), Attribs::EMPTY);
    }

    /// The declaration order is the encode order the rest of the crate relies
    /// on.
    #[test]
    fn iteration_order_is_fixed() {
        let order: Vec<Attrib> = Attrib::iter().collect();
        assert_eq!(
            order,
            vec![Attrib::Bold, Attrib::Underline, Attrib::Blink, Attrib::Inverse]
        );
    }
}
