// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>

use std::fmt::{Display, Formatter, Result};

/// One SGR parameter, rendered as a complete `ESC [ .. m` sequence by the
/// [Display] impl.
///
/// Attribute codes come in on/off pairs. Every attribute has its own distinct
/// off code (22, 24, 25, 27), so styles that overlap on the same stream can be
/// taken down one bit at a time without touching bits they did not set.
/// [`SgrCode::Reset`] (code 0) clears everything at once and is reserved for
/// [`crate::StyleResetGuard`].
///
/// The payload of [`SgrCode::Foreground`] / [`SgrCode::Background`] is a wire
/// code in `0..=7`; see [`crate::AnsiColor::wire_code`] for how domain colors
/// fold onto it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Bold,
    BoldOff,
    Underline,
    UnderlineOff,
    Blink,
    BlinkOff,
    Invert,
    InvertOff,
    /// Set foreground color; payload is a folded wire code in `0..=7`.
    Foreground(u8),
    /// Set background color; payload is a folded wire code in `0..=7`.
    Background(u8),
    /// Revert foreground to the terminal default (code 39).
    ForegroundDefault,
    /// Revert background to the terminal default (code 49).
    BackgroundDefault,
}

pub mod sgr_code_impl {
    use super::*;

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Reset             => write!(f, "{CSI}0{SGR}"),
                SgrCode::Bold              => write!(f, "{CSI}1{SGR}"),
                SgrCode::BoldOff           => write!(f, "{CSI}22{SGR}"),
                SgrCode::Underline         => write!(f, "{CSI}4{SGR}"),
                SgrCode::UnderlineOff      => write!(f, "{CSI}24{SGR}"),
                SgrCode::Blink             => write!(f, "{CSI}5{SGR}"),
                SgrCode::BlinkOff          => write!(f, "{CSI}25{SGR}"),
                SgrCode::Invert            => write!(f, "{CSI}7{SGR}"),
                SgrCode::InvertOff         => write!(f, "{CSI}27{SGR}"),
                SgrCode::Foreground(code)  => write!(f, "{CSI}3{code}{SGR}"),
                SgrCode::Background(code)  => write!(f, "{CSI}4{code}{SGR}"),
                SgrCode::ForegroundDefault => write!(f, "{CSI}39{SGR}"),
                SgrCode::BackgroundDefault => write!(f, "{CSI}49{SGR}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::SgrCode;

    #[test]
    fn reset() {
        let sgr_code = SgrCode::Reset;
        assert_eq!(sgr_code.to_string(), "\x1b[0m");
    }

    #[test]
    fn bold() {
        let sgr_code = SgrCode::Bold;
        assert_eq!(sgr_code.to_string(), "\x1b[1m");
    }

    #[test]
    fn bold_off() {
        let sgr_code = SgrCode::BoldOff;
        assert_eq!(sgr_code.to_string(), "\x1b[22m");
    }

    #[test]
    fn underline() {
        let sgr_code = SgrCode::Underline;
        assert_eq!(sgr_code.to_string(), "\x1b[4m");
    }

    #[test]
    fn underline_off() {
        let sgr_code = SgrCode::UnderlineOff;
        assert_eq!(sgr_code.to_string(), "\x1b[24m");
    }

    #[test]
    fn blink() {
        let sgr_code = SgrCode::Blink;
        assert_eq!(sgr_code.to_string(), "\x1b[5m");
    }

    #[test]
    fn blink_off() {
        let sgr_code = SgrCode::BlinkOff;
        assert_eq!(sgr_code.to_string(), "\x1b[25m");
    }

    #[test]
    fn invert() {
        let sgr_code = SgrCode::Invert;
        assert_eq!(sgr_code.to_string(), "\x1b[7m");
    }

    #[test]
    fn invert_off() {
        let sgr_code = SgrCode::InvertOff;
        assert_eq!(sgr_code.to_string(), "\x1b[27m");
    }

    #[test_case(0, "\x1b[30m"; "black slot")]
    #[test_case(1, "\x1b[31m"; "red")]
    #[test_case(7, "\x1b[37m"; "white")]
    fn fg_color(code: u8, expected: &str) {
        assert_eq!(SgrCode::Foreground(code).to_string(), expected);
    }

    #[test_case(0, "\x1b[40m"; "black slot")]
    #[test_case(3, "\x1b[43m"; "yellow")]
    #[test_case(7, "\x1b[47m"; "white")]
    fn bg_color(code: u8, expected: &str) {
        assert_eq!(SgrCode::Background(code).to_string(), expected);
    }

    #[test]
    fn fg_default() {
        let sgr_code = SgrCode::ForegroundDefault;
        assert_eq!(sgr_code.to_string(), "\x1b[39m");
    }

    #[test]
    fn bg_default() {
        let sgr_code = SgrCode::BackgroundDefault;
        assert_eq!(sgr_code.to_string(), "\x1b[49m");
    }
}
