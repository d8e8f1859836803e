// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [Style] value and its encoding into paired on/off SGR sequences.

use smallstr::SmallString;
use smallvec::SmallVec;

use crate::{AnsiColor, Attrib, Attribs, SgrCode};

pub mod sizing {
    use strum::EnumCount as _;

    use super::*;

    /// Worst case is both colors plus all four attributes.
    pub const MAX_SGR_CODES_PER_STYLE: usize = Attrib::COUNT + 2;
    pub type InlineVecSgrCodes = SmallVec<[SgrCode; MAX_SGR_CODES_PER_STYLE]>;

    /// Longest encoding is the off-sequence with everything set:
    /// `ESC[39m ESC[49m ESC[22m ESC[24m ESC[25m ESC[27m` = 30 bytes.
    pub const MAX_STYLE_SEQ_BYTE_SIZE: usize = 32;
    pub type InlineString = SmallString<[u8; MAX_STYLE_SEQ_BYTE_SIZE]>;

    // PERF: If you make this number too large it defeats the point of the
    // inline storage; longer renderings just spill to the heap.
    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;
    pub type InlineRendering = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;
}

use sizing::{InlineString, InlineVecSgrCodes};

/// A compact, immutable styling value: an attribute bit set plus optional
/// foreground and background colors.
///
/// `Copy`, freely shareable across threads, and total to encode: there is no
/// malformed `Style`.
///
/// # Example usage:
///
/// ```rust
/// use ansi_attr::{Attrib, AnsiColor, Style};
///
/// let style = Style::new()
///     .fg(AnsiColor::Red)
///     .attrib(Attrib::Bold);
/// assert_eq!(style.on_str().as_str(), "\x1b[31m\x1b[1m");
/// assert_eq!(style.off_str().as_str(), "\x1b[39m\x1b[22m");
///
/// // Or start from a preset.
/// assert_eq!(ansi_attr::RED_BOLD, style);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub attribs: Attribs,
    pub fg: AnsiColor,
    pub bg: AnsiColor,
}

impl Style {
    #[must_use]
    pub const fn new() -> Self {
        Style {
            attribs: Attribs::EMPTY,
            fg: AnsiColor::None,
            bg: AnsiColor::None,
        }
    }

    #[must_use]
    pub const fn fg(mut self, color: AnsiColor) -> Self {
        self.fg = color;
        self
    }

    #[must_use]
    pub const fn bg(mut self, color: AnsiColor) -> Self {
        self.bg = color;
        self
    }

    #[must_use]
    pub const fn attrib(mut self, attrib: Attrib) -> Self {
        self.attribs = self.attribs.with(attrib);
        self
    }

    /// Returns `true` if encoding this style produces no bytes at all.
    #[must_use]
    pub const fn is_plain(&self) -> bool {
        self.attribs.is_empty() && self.fg.is_none() && self.bg.is_none()
    }
}

mod encode_impl {
    use std::fmt::Write as _;

    use strum::IntoEnumIterator as _;

    use super::*;

    impl Style {
        /// The SGR codes that activate this style, in the fixed order:
        /// foreground, background, then attributes in [Attrib] declaration
        /// order. The order matters only for reproducibility; terminals
        /// accept the codes in any order.
        #[must_use]
        pub fn on_codes(&self) -> InlineVecSgrCodes {
            let mut acc = InlineVecSgrCodes::new();
            if !self.fg.is_none() {
                acc.push(SgrCode::Foreground(self.fg.wire_code()));
            }
            if !self.bg.is_none() {
                acc.push(SgrCode::Background(self.bg.wire_code()));
            }
            for attrib in Attrib::iter() {
                if self.attribs.contains(attrib) {
                    acc.push(attrib.on_code());
                }
            }
            acc
        }

        /// The SGR codes that deactivate this style, mirroring
        /// [`Self::on_codes`]. Each attribute is taken down with its own off
        /// code rather than a blanket reset, so deactivation never clobbers
        /// bits that some enclosing style still has on.
        #[must_use]
        pub fn off_codes(&self) -> InlineVecSgrCodes {
            let mut acc = InlineVecSgrCodes::new();
            if !self.fg.is_none() {
                acc.push(SgrCode::ForegroundDefault);
            }
            if !self.bg.is_none() {
                acc.push(SgrCode::BackgroundDefault);
            }
            for attrib in Attrib::iter() {
                if self.attribs.contains(attrib) {
                    acc.push(attrib.off_code());
                }
            }
            acc
        }

        /// The activation escape sequence as an inline (stack allocated)
        /// string. Empty for a plain style.
        #[must_use]
        pub fn on_str(&self) -> InlineString {
            render(&self.on_codes())
        }

        /// The deactivation escape sequence as an inline (stack allocated)
        /// string. Empty for a plain style.
        #[must_use]
        pub fn off_str(&self) -> InlineString {
            render(&self.off_codes())
        }
    }

    fn render(codes: &[SgrCode]) -> InlineString {
        let mut acc = InlineString::new();
        for code in codes {
            // Writing into an in-memory string can't fail.
            let _unused = write!(acc, "{code}");
        }
        acc
    }
}

/// Preset styles matching the classic single-color / bold-color pairs.
pub mod presets {
    use super::*;

    pub const RED: Style = Style::new().fg(AnsiColor::Red);
    pub const GREEN: Style = Style::new().fg(AnsiColor::Green);
    pub const YELLOW: Style = Style::new().fg(AnsiColor::Yellow);
    pub const BLUE: Style = Style::new().fg(AnsiColor::Blue);
    pub const MAGENTA: Style = Style::new().fg(AnsiColor::Magenta);
    pub const CYAN: Style = Style::new().fg(AnsiColor::Cyan);
    pub const WHITE: Style = Style::new().fg(AnsiColor::White);
    pub const BLACK: Style = Style::new().fg(AnsiColor::Black);

    pub const RED_BOLD: Style = RED.attrib(Attrib::Bold);
    pub const GREEN_BOLD: Style = GREEN.attrib(Attrib::Bold);
    pub const YELLOW_BOLD: Style = YELLOW.attrib(Attrib::Bold);
    pub const BLUE_BOLD: Style = BLUE.attrib(Attrib::Bold);
    pub const MAGENTA_BOLD: Style = MAGENTA.attrib(Attrib::Bold);
    pub const CYAN_BOLD: Style = CYAN.attrib(Attrib::Bold);
    pub const WHITE_BOLD: Style = WHITE.attrib(Attrib::Bold);
    pub const BLACK_BOLD: Style = BLACK.attrib(Attrib::Bold);
}
