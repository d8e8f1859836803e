// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # ansi_attr
//!
//! <!-- When you change this, make sure to update `README.md` and `Cargo.toml` as well. -->
//!
//! This crate brackets text with paired ANSI SGR escape sequences: an
//! activation sequence before the content (foreground/background color plus
//! any of bold, underline, blink, inverse) and a mirrored deactivation
//! sequence after it, so the terminal returns to its default styling. Every
//! attribute is taken down with its own off code rather than a blanket
//! `ESC[0m`, which keeps nested styles on the same stream from clobbering
//! each other.
//!
//! What's in the box:
//! - [Style], [AnsiColor], [Attrib] / [Attribs]: the compact style value and
//!   its pure encoding into on/off sequences ([`Style::on_str`] /
//!   [`Style::off_str`]).
//! - [StyledText]: `Display`-driven `on + text + off` rendering, stdout
//!   conveniences, and constructor functions ([red()], [bold()], ...).
//! - [OutputDevice]: cloneable handle over stdout or any `Write + Send`
//!   sink, with error-reporting write wrappers and an opt-in serialization
//!   policy that keeps concurrent calls' segments contiguous.
//! - [StyleResetGuard]: RAII guard that emits a full `ESC[0m` reset when the
//!   process winds down, so an aborted error path can't leave the terminal
//!   stuck in a styled state.
//!
//! # Example usage:
//!
//! ```rust
//! use ansi_attr::{red, AnsiColor, Attrib, OutputDevice, Style, StyleResetGuard};
//!
//! let device = OutputDevice::new_stdout().serialized();
//! let _guard = StyleResetGuard::new(&device);
//!
//! // Quick one-off styling via constructor functions.
//! red("this is red").println();
//!
//! // Or build a style and push it through a device, observing write errors.
//! let style = Style::new().fg(AnsiColor::Cyan).attrib(Attrib::Bold);
//! if let Err(e) = device.writeln_styled(style, "bold cyan line") {
//!     eprintln!("stdout write failed: {e}");
//! }
//!
//! // Pure encoding, no I/O.
//! assert_eq!(style.on_str().as_str(), "\x1b[36m\x1b[1m");
//! assert_eq!(style.off_str().as_str(), "\x1b[39m\x1b[22m");
//! ```

// Attach sources.
pub mod attrib;
pub mod color;
pub mod output_device;
pub mod sgr_code;
pub mod stdout_mock;
pub mod style;
pub mod style_reset_guard;
pub mod styled_text;
pub mod write_error;

// Re-export.
pub use attrib::*;
pub use color::*;
pub use output_device::*;
pub use sgr_code::*;
pub use stdout_mock::*;
pub use style::presets::*;
pub use style::*;
pub use style_reset_guard::*;
pub use styled_text::*;
pub use write_error::*;
