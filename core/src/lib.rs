//! An interpreter for the Chip-8 virtual machine.
//!
//! The interpreter only transitions state: rendering, sound, input mapping and pacing are
//! left to the host, which talks to it through `Chip8::screen`, the `tick_timers` beep
//! callback and `Chip8::keypress`.

pub use chip8::Chip8;
pub use constants::{STEPS_PER_TIMER_TICK, TIMER_HZ};
pub use error::{Chip8Error, Result};
pub use instruction::Instruction;
pub use keypad::Keypad;
pub use opcode::Opcode;
pub use screen::{FrameBuffer, Screen};
pub use state::State;
pub use timers::Timers;

mod chip8;
pub mod constants;
mod error;
mod instruction;
mod keypad;
mod opcode;
mod operations;
mod screen;
mod state;
mod timers;
