// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use ansi_attr::{blue, bold, inverse, red, underline, AnsiColor, Attrib, OutputDevice,
                Style, StyleResetGuard, StyledText, GREEN_BOLD, YELLOW};

fn main() {
    let device = OutputDevice::new_stdout().serialized();
    let _guard = StyleResetGuard::new(&device);

    // Constructor functions for quick one-off styling.
    {
        red("This is red text.").println();
        bold("This is bold text.").println();
        underline("This is underlined text.").println();
        inverse("This is inverted text.").println();
        blue("Blue text, reworked to also blink.")
            .style(|s| s.attrib(Attrib::Blink))
            .println();
    }

    // Preset styles matching the classic color / bold-color pairs.
    {
        StyledText::new("Yellow preset.", YELLOW).println();
        StyledText::new("Green bold preset.", GREEN_BOLD).println();
    }

    // Verbose struct construction with a fully loaded style.
    {
        StyledText {
            text: "Bold, underlined, white on magenta.",
            style: Style::new()
                .fg(AnsiColor::White)
                .bg(AnsiColor::Magenta)
                .attrib(Attrib::Bold)
                .attrib(Attrib::Underline),
        }
        .println();
    }

    // Device writes report errors and byte counts instead of swallowing them.
    {
        let style = Style::new().fg(AnsiColor::Cyan).attrib(Attrib::Bold);
        match device.writeln_styled(style, "Written through the output device.") {
            Ok(count) => {
                let note = format!("({count} bytes, escape sequences included)");
                device
                    .writeln_styled(Style::new(), &note)
                    .expect("stdout write");
            }
            Err(e) => eprintln!("stdout write failed: {e}"),
        }
    }
}
