// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use thiserror::Error;

/// The single failure class in this crate: the underlying sink refused a
/// write.
///
/// The source [`std::io::Error`] is carried verbatim (never classified or
/// wrapped further). `bytes_written` counts everything that actually landed on
/// the sink across all attempted segments of the call, including best-effort
/// segments written after the failure.
#[derive(Debug, Error)]
#[error("sink write failed after {bytes_written} bytes")]
pub struct WriteError {
    pub bytes_written: usize,
    #[source]
    pub source: std::io::Error,
}

/// Result of every sink-writing operation: total bytes written on success,
/// [`WriteError`] (with its partial count) on failure.
pub type WriteResult = std::result::Result<usize, WriteError>;
