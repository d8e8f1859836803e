// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RAII guard that restores default terminal styling on the way out.

use crate::{OutputDevice, SgrCode};

/// Guard that writes a full SGR reset (`ESC[0m`) to its device when dropped.
///
/// Create one near the top of `main` and keep it alive for the life of the
/// process; normal termination (including unwinding panics) then leaves the
/// terminal unstyled even when some deactivation write was skipped along an
/// error path. The reset is best-effort: by the time the guard runs there is
/// nobody left to hand an error to.
///
/// ```rust
/// use ansi_attr::{OutputDevice, StyleResetGuard, RED};
///
/// let device = OutputDevice::new_stdout();
/// let _guard = StyleResetGuard::new(&device);
/// let _unused = device.write_styled(RED, "working...");
/// // `ESC[0m` is written when `_guard` drops, however this scope exits.
/// ```
#[allow(missing_debug_implementations)]
pub struct StyleResetGuard {
    device: OutputDevice,
}

impl StyleResetGuard {
    /// The guard holds a clone of `device`, sharing its sink.
    #[must_use]
    pub fn new(device: &OutputDevice) -> Self {
        StyleResetGuard {
            device: device.clone(),
        }
    }
}

impl Default for StyleResetGuard {
    /// Guard over a fresh stdout device.
    fn default() -> Self { Self::new(&OutputDevice::new_stdout()) }
}

impl Drop for StyleResetGuard {
    fn drop(&mut self) {
        let mut sink = self.device.lock_ignore_poison();
        let _unused = write!(sink, "{}", SgrCode::Reset);
        let _unused = sink.flush();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::StyleResetGuard;
    use crate::{OutputDevice, RED};

    #[test]
    fn drop_writes_full_reset() {
        let (device, mock) = OutputDevice::new_mock();
        {
            let _guard = StyleResetGuard::new(&device);
        }
        assert_eq!(mock.get_copy_of_buffer_as_string(), "\x1b[0m");
    }

    #[test]
    fn reset_lands_after_earlier_styled_output() {
        let (device, mock) = OutputDevice::new_mock();
        {
            let _guard = StyleResetGuard::new(&device);
            device.write_styled(RED, "x").expect("mock never fails");
        }
        assert_eq!(
            mock.get_copy_of_buffer_as_string(),
            "\x1b[31mx\x1b[39m\x1b[0m"
        );
    }
}
