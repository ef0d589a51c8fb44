use std::io::{self, Write};

use emu8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use emu8_core::FrameBuffer;

const ON: &str = "██";
const OFF: &str = "  ";
/// Move the cursor to the top left corner of the terminal
const CURSOR_HOME: &str = "\x1b[H";
const CLEAR_SCREEN: &str = "\x1b[2J";

/// # Display
/// The Chip-8 display is composed of 64x32 pixels black/white pixels.
/// Frames are drawn as text, two characters per pixel so the aspect ratio stays roughly
/// square in a terminal.
///
/// With `in_place` each frame overwrites the previous one using ANSI escapes; otherwise
/// frames are written one after another, which is what you want when piping to a file.
pub struct Display<W: Write> {
    out: W,
    in_place: bool,
    drawn: bool,
}

impl<W: Write> Display<W> {
    /// Creates a new display that writes frames to `out`.
    ///
    /// # Arguments
    /// * `out` where frames are written, usually stdout
    /// * `in_place` whether each frame should overwrite the last one
    pub fn new(out: W, in_place: bool) -> Self {
        Display {
            out,
            in_place,
            drawn: false,
        }
    }

    /// Formats a Chip-8 FrameBuffer as text.
    ///
    /// Each row of the frame becomes one line; the frame is row-major so every
    /// DISPLAY_WIDTH pixels start a new line.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn frame_to_text(frame: &FrameBuffer) -> String {
        let mut text = String::with_capacity(DISPLAY_HEIGHT * (DISPLAY_WIDTH * ON.len() + 1));
        for row in frame.chunks(DISPLAY_WIDTH) {
            for &pixel in row {
                text.push_str(if pixel { ON } else { OFF });
            }
            text.push('\n');
        }
        text
    }

    /// Formats the Chip-8 FrameBuffer as text and writes it out.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn render(&mut self, frame: &FrameBuffer) -> io::Result<()> {
        if self.in_place {
            if !self.drawn {
                self.out.write_all(CLEAR_SCREEN.as_bytes())?;
            }
            self.out.write_all(CURSOR_HOME.as_bytes())?;
        }
        self.out.write_all(Self::frame_to_text(frame).as_bytes())?;
        self.drawn = true;
        self.out.flush()
    }

    /// Gives back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank() -> FrameBuffer {
        [false; DISPLAY_WIDTH * DISPLAY_HEIGHT]
    }

    #[test]
    fn test_frame_to_text() {
        let mut frame = blank();
        frame[1] = true;
        frame[DISPLAY_WIDTH] = true;
        let text = Display::<Vec<u8>>::frame_to_text(&frame);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), DISPLAY_HEIGHT);
        assert!(lines[0].starts_with("  ██  "));
        assert!(lines[1].starts_with("██    "));
        assert_eq!(lines[2], " ".repeat(DISPLAY_WIDTH * 2));
    }

    #[test]
    fn test_render_appends_frames() {
        let mut display = Display::new(Vec::new(), false);
        display.render(&blank()).unwrap();
        display.render(&blank()).unwrap();
        let out = String::from_utf8(display.into_inner()).unwrap();
        assert_eq!(out.lines().count(), DISPLAY_HEIGHT * 2);
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_render_in_place_homes_the_cursor() {
        let mut display = Display::new(Vec::new(), true);
        display.render(&blank()).unwrap();
        display.render(&blank()).unwrap();
        let out = String::from_utf8(display.into_inner()).unwrap();
        assert!(out.starts_with(CLEAR_SCREEN));
        assert_eq!(out.matches(CLEAR_SCREEN).count(), 1);
        assert_eq!(out.matches(CURSOR_HOME).count(), 2);
    }
}
