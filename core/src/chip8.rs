use std::io::Read;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{MAX_PROGRAM_SIZE, PROGRAM_START};
use crate::error::{Chip8Error, Result};
use crate::instruction::Instruction;
use crate::keypad::Keypad;
use crate::screen::FrameBuffer;
use crate::state::State;

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - `keypad` with public interfaces for manipulating it
///  - the random number source used by `CXKK`
///
/// Supplies interfaces for:
/// - resetting and loading roms
/// - pressing and releasing keys
/// - advancing the CPU one instruction at a time
/// - advancing its timers
/// - inspecting its frame buffer for rendering by some display
///
/// It has no notion of wall-clock time; the host decides how many `step`s happen per
/// `tick_timers` (conventionally `STEPS_PER_TIMER_TICK`).
pub struct Chip8 {
    state: State,
    keypad: Keypad,
    rng: StdRng,
}

impl Chip8 {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A Chip8 whose random numbers are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Chip8 {
            state: State::new(),
            keypad: Keypad::new(),
            rng,
        }
    }

    /// Discards all state: memory, registers, stack, screen, keypad and timers.
    /// The sprite sheet is restored and the pc points at the start of the program area.
    pub fn reset(&mut self) {
        log::debug!("reset");
        self.state = State::new();
        self.keypad = Keypad::new();
    }

    /// Copies a program into memory at 0x200.
    ///
    /// Nothing else is touched, so this is normally preceded by `reset`. Programs that
    /// don't fit in memory are rejected without writing anything.
    ///
    /// # Arguments
    /// * `rom` the raw program bytes
    pub fn load(&mut self, rom: &[u8]) -> Result<()> {
        if rom.len() > MAX_PROGRAM_SIZE {
            return Err(Chip8Error::RomTooLarge {
                size: rom.len(),
                max_size: MAX_PROGRAM_SIZE,
            });
        }
        self.state.write(PROGRAM_START as usize, rom)?;
        log::debug!("loaded {} byte rom at {:#06X}", rom.len(), PROGRAM_START);
        Ok(())
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a file reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<()> {
        let mut rom = Vec::new();
        reader.read_to_end(&mut rom)?;
        self.load(&rom)
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the keypad index, 0x0..=0xF
    /// * `pressed` true when the key goes down, false when it's released
    pub fn keypress(&mut self, key: u8, pressed: bool) -> Result<()> {
        self.keypad.set(key, pressed)
    }

    /// Advances the CPU by a single instruction
    /// - fetches the opcode at the pc and moves the pc on
    /// - decodes and executes it
    ///
    /// Either the whole instruction happens or, on error, none of it does. Errors are fatal
    /// to the running program: stepping again will fail the same way.
    pub fn step(&mut self) -> Result<()> {
        let mut fetched = self.state;
        let op = fetched.fetch()?;
        log::trace!(
            "{} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.state.v,
            self.state.i,
            self.state.pc
        );

        let next = Instruction::decode(op)
            .and_then(|instruction| instruction.execute(&fetched, &self.keypad, &mut self.rng))
            .map_err(|err| {
                log::debug!("halted at {:04X}: {}", self.state.pc, err);
                err
            })?;
        self.state = next;
        Ok(())
    }

    /// Decrements the delay and sound timers
    ///
    /// # Arguments
    /// * `on_beep` called when the sound timer runs out on this tick
    pub fn tick_timers<F: FnOnce()>(&mut self, on_beep: F) {
        self.state.timers.tick(on_beep)
    }

    /// A copy of the current frame
    pub fn screen(&self) -> FrameBuffer {
        self.state.screen.frame()
    }

    /// Read-only view of registers, memory, stack and timers
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
