// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Concurrency contract: with a serialized device, the segments of one styled
//! write never interleave with another call's segments, even across cloned
//! handles on different threads.

use std::thread;

use ansi_attr::{AnsiColor, OutputDevice, Style};
use pretty_assertions::assert_eq;

const THREADS: usize = 8;
const ON: &str = "\x1b[32m";
const OFF: &str = "\x1b[39m";

#[test]
fn serialized_writes_keep_segments_contiguous() {
    let (device, mock) = OutputDevice::new_mock();
    let device = device.serialized();
    let style = Style::new().fg(AnsiColor::Green);

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_number| {
            let device = device.clone();
            thread::spawn(move || {
                let content = format!("message from thread {thread_number}");
                device
                    .writeln_styled(style, &content)
                    .expect("mock never fails");
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("writer thread panicked");
    }

    // Each writeln is four write calls: on, content, newline, off. The mock
    // records call boundaries, so contiguity shows up as exact runs of four.
    let chunks = mock.get_copy_of_chunks_as_strings();
    assert_eq!(chunks.len(), THREADS * 4);

    let mut seen_contents = Vec::new();
    for run in chunks.chunks(4) {
        assert_eq!(run[0], ON, "run must start with the activation sequence");
        assert_eq!(run[2], "\n");
        assert_eq!(run[3], OFF, "run must end with the deactivation sequence");
        seen_contents.push(run[1].clone());
    }

    seen_contents.sort();
    let mut expected: Vec<String> = (0..THREADS)
        .map(|thread_number| format!("message from thread {thread_number}"))
        .collect();
    expected.sort();
    assert_eq!(seen_contents, expected);
}

/// Without serialization there is no contiguity guarantee, but every byte of
/// every call must still land exactly once.
#[test]
fn unserialized_writes_lose_no_bytes() {
    let (device, mock) = OutputDevice::new_mock();
    let style = Style::new().fg(AnsiColor::Green);

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_number| {
            let device = device.clone();
            thread::spawn(move || {
                let content = format!("message from thread {thread_number}");
                device
                    .writeln_styled(style, &content)
                    .expect("mock never fails");
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("writer thread panicked");
    }

    let mut chunks = mock.get_copy_of_chunks_as_strings();
    assert_eq!(chunks.len(), THREADS * 4);

    chunks.sort();
    let mut expected: Vec<String> = (0..THREADS)
        .flat_map(|thread_number| {
            vec![
                ON.to_string(),
                format!("message from thread {thread_number}"),
                "\n".to_string(),
                OFF.to_string(),
            ]
        })
        .collect();
    expected.sort();
    assert_eq!(chunks, expected);
}
