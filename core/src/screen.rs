use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// The FrameBuffer is row-major: pixel (x, y) lives at index `x + DISPLAY_WIDTH * y`
pub type FrameBuffer = [bool; DISPLAY_WIDTH * DISPLAY_HEIGHT];

/// # Screen
/// The 64x32 monochrome display buffer.
///
/// Only `clear` and `draw` change it; everything else gets a copy via `frame`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    pixels: FrameBuffer,
}

impl Screen {
    pub fn new() -> Self {
        Screen {
            pixels: [false; DISPLAY_WIDTH * DISPLAY_HEIGHT],
        }
    }

    /// Turns every pixel off
    pub fn clear(&mut self) {
        self.pixels = [false; DISPLAY_WIDTH * DISPLAY_HEIGHT];
    }

    /// XORs a sprite onto the screen with its top left corner at (x, y).
    ///
    /// Each byte of `sprite` is one row of 8 pixels, most significant bit leftmost.
    /// Coordinates wrap around both edges of the screen rather than clipping.
    ///
    /// Returns true if any pixel that was on got turned off.
    pub fn draw(&mut self, x: u8, y: u8, sprite: &[u8]) -> bool {
        let mut collision = false;
        for (row, byte) in sprite.iter().enumerate() {
            let py = (y as usize + row) % DISPLAY_HEIGHT;
            for bit in 0..8 {
                if byte & (0x80 >> bit) == 0 {
                    continue;
                }
                let px = (x as usize + bit) % DISPLAY_WIDTH;
                let pixel = &mut self.pixels[px + DISPLAY_WIDTH * py];
                collision |= *pixel;
                *pixel = !*pixel;
            }
        }
        collision
    }

    /// Whether the pixel at (x, y) is on; coordinates wrap like `draw`
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels[x % DISPLAY_WIDTH + DISPLAY_WIDTH * (y % DISPLAY_HEIGHT)]
    }

    /// A copy of the current frame
    pub fn frame(&self) -> FrameBuffer {
        self.pixels
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}
