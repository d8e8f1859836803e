// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Result, Write};
use std::sync::Arc;

use smallvec::SmallVec;

use crate::StdMutex;

mod sizing {
    use super::*;

    pub const MAX_INLINE_CHUNKS: usize = 8;
    pub type ChunkList = SmallVec<[Vec<u8>; MAX_INLINE_CHUNKS]>;
}

/// In-memory sink that records every `write()` call as its own chunk, so
/// tests can assert not just the bytes that landed but also the call
/// boundaries between them (which is how segment contiguity under a
/// serialized [`crate::OutputDevice`] is verified).
///
/// You can safely clone this struct; the inner buffer is shared through the
/// [Arc], not copied.
#[derive(Clone)]
#[allow(missing_debug_implementations)]
pub struct StdoutMock {
    chunks: Arc<StdMutex<sizing::ChunkList>>,
}

impl Default for StdoutMock {
    fn default() -> Self {
        Self {
            chunks: Arc::new(StdMutex::new(sizing::ChunkList::new())),
        }
    }
}

impl StdoutMock {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// All recorded bytes, concatenated across write calls.
    ///
    /// # Panics
    ///
    /// Panics if the recorded bytes are not valid UTF-8 or the mutex is
    /// poisoned.
    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        let chunks = self.chunks.lock().unwrap();
        let flat: Vec<u8> = chunks.iter().flatten().copied().collect();
        String::from_utf8(flat).expect("utf8")
    }

    /// One string per recorded write call, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the recorded bytes are not valid UTF-8 or the mutex is
    /// poisoned.
    #[must_use]
    pub fn get_copy_of_chunks_as_strings(&self) -> Vec<String> {
        let chunks = self.chunks.lock().unwrap();
        chunks
            .iter()
            .map(|chunk| String::from_utf8(chunk.clone()).expect("utf8"))
            .collect()
    }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.chunks.lock().unwrap().push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}
