use crate::constants::KEY_COUNT;
use crate::error::{Chip8Error, Result};

/// # Keypad
/// Chip-8 input is generated with a hexadecimal keypad.
/// ```text
/// |1|2|3|C|
/// |4|5|6|D|
/// |7|8|9|E|
/// |A|0|B|F|
/// ```
/// Written only by the host through `set`; instructions only read it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Keypad {
    pressed: [bool; KEY_COUNT],
}

impl Keypad {
    pub fn new() -> Self {
        Keypad::default()
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the index of the key on the keypad, 0x0..=0xF
    /// * `pressed` whether the key is now held down
    pub fn set(&mut self, key: u8, pressed: bool) -> Result<()> {
        let slot = self
            .pressed
            .get_mut(key as usize)
            .ok_or(Chip8Error::InvalidKeyIndex { index: key })?;
        *slot = pressed;
        Ok(())
    }

    /// Keys outside the keypad are never pressed
    pub fn is_pressed(&self, key: u8) -> bool {
        self.pressed.get(key as usize).copied().unwrap_or(false)
    }

    /// The lowest-numbered key currently held down
    pub fn first_pressed(&self) -> Option<u8> {
        self.pressed
            .iter()
            .position(|&pressed| pressed)
            .map(|key| key as u8)
    }
}
