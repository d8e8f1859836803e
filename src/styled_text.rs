// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::style::sizing;
use crate::{AnsiColor, Attrib, Style};

/// A piece of text bracketed by a [Style].
///
/// The [Display] impl renders `activation sequence + text + deactivation
/// sequence`, so the styled text drops into any formatting machinery
/// (`println!`, `format!`, a `write!` into an arbitrary sink). For a plain
/// style both sequences are empty and the text passes through untouched.
///
/// # Example usage:
///
/// ```rust
/// use ansi_attr::{red, AnsiColor, Attrib, Style, StyledText};
///
/// // Using the constructor functions.
/// let error_label = red("error").style(|s| s.attrib(Attrib::Bold));
/// assert_eq!(error_label.to_string(), "\x1b[31m\x1b[1merror\x1b[39m\x1b[22m");
///
/// // Verbose struct construction.
/// let warning = StyledText {
///     text: "warning",
///     style: Style::new().fg(AnsiColor::Yellow),
/// };
/// println!("{warning}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledText<'a> {
    pub text: &'a str,
    pub style: Style,
}

mod styled_text_impl {
    use super::*;

    impl<'a> StyledText<'a> {
        #[must_use]
        pub const fn new(text: &'a str, style: Style) -> Self {
            StyledText { text, style }
        }

        /// Rework the style through a closure, keeping the text.
        #[must_use]
        pub fn style(mut self, mutate: impl FnOnce(Style) -> Style) -> Self {
            self.style = mutate(self.style);
            self
        }

        /// Print to stdout via the [Display] impl. Errors on stdout are not
        /// observable here; use [`crate::OutputDevice`] when they matter.
        pub fn print(&self) {
            print!("{self}");
        }

        /// Like [`Self::print`], with the newline placed between the content
        /// and the deactivation sequence (same shape as
        /// [`crate::OutputDevice::writeln_styled`]).
        pub fn println(&self) {
            print!("{}", self.to_line_string());
        }

        /// This is different from `to_string()` in that it does not allocate
        /// on the heap for short renderings; the buffer starts on the stack
        /// and spills only when it outgrows
        /// [`sizing::DEFAULT_STRING_STORAGE_SIZE`].
        #[must_use]
        pub fn to_inline_string(&self) -> sizing::InlineRendering {
            format!("{self}").into()
        }

        /// Rendering with a trailing newline between the content and the
        /// deactivation sequence.
        #[must_use]
        pub fn to_line_string(&self) -> sizing::InlineRendering {
            let mut acc = sizing::InlineRendering::new();
            acc.push_str(&self.style.on_str());
            acc.push_str(self.text);
            acc.push('\n');
            acc.push_str(&self.style.off_str());
            acc
        }
    }
}

mod display_trait_impl {
    use super::*;

    impl Display for StyledText<'_> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            for code in self.style.on_codes() {
                write!(f, "{code}")?;
            }
            write!(f, "{}", self.text)?;
            for code in self.style.off_codes() {
                write!(f, "{code}")?;
            }
            Ok(())
        }
    }
}

pub fn red(text: &str) -> StyledText<'_> {
    StyledText::new(text, Style::new().fg(AnsiColor::Red))
}

pub fn green(text: &str) -> StyledText<'_> {
    StyledText::new(text, Style::new().fg(AnsiColor::Green))
}

pub fn yellow(text: &str) -> StyledText<'_> {
    StyledText::new(text, Style::new().fg(AnsiColor::Yellow))
}

pub fn blue(text: &str) -> StyledText<'_> {
    StyledText::new(text, Style::new().fg(AnsiColor::Blue))
}

pub fn magenta(text: &str) -> StyledText<'_> {
    StyledText::new(text, Style::new().fg(AnsiColor::Magenta))
}

pub fn cyan(text: &str) -> StyledText<'_> {
    StyledText::new(text, Style::new().fg(AnsiColor::Cyan))
}

pub fn white(text: &str) -> StyledText<'_> {
    StyledText::new(text, Style::new().fg(AnsiColor::White))
}

/// The 8-slot black, not the "no color" sentinel; encodes as `ESC[30m`.
pub fn black(text: &str) -> StyledText<'_> {
    StyledText::new(text, Style::new().fg(AnsiColor::Black))
}

pub fn bold(text: &str) -> StyledText<'_> {
    StyledText::new(text, Style::new().attrib(Attrib::Bold))
}

pub fn underline(text: &str) -> StyledText<'_> {
    StyledText::new(text, Style::new().attrib(Attrib::Underline))
}

pub fn blink(text: &str) -> StyledText<'_> {
    StyledText::new(text, Style::new().attrib(Attrib::Blink))
}

pub fn inverse(text: &str) -> StyledText<'_> {
    StyledText::new(text, Style::new().attrib(Attrib::Inverse))
}
