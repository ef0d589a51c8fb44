use crate::constants::{MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET, STACK_DEPTH};
use crate::error::{Chip8Error, Result};
use crate::opcode::Opcode;
use crate::screen::Screen;
use crate::timers::Timers;

/// A snapshot of the Chip8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry flag
/// - (i) a 16-bit memory address register; never masked to 12 bits
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Pointer
/// - (sp) the number of return addresses on the stack, 0..=16
///
/// Timers
/// - 2 8-bit timers (delay & sound)
///
/// ## Memory
/// - 16 slot stack
///     - stores return addresses when subroutines are called
/// - 4096 bytes of addressable memory
///     - 0x000..0x050 holds the hex digit sprite sheet
///     - programs are loaded from 0x200
/// - 64x32 screen
///
/// A State is plain data: instructions build the next State from the previous one, so a
/// failing instruction can simply be discarded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub timers: Timers,
    pub stack: [u16; STACK_DEPTH],
    pub memory: [u8; MEMORY_SIZE],
    pub screen: Screen,
}

impl State {
    pub fn new() -> Self {
        // 0x000 - 0x050 is reserved for a sprite sheet
        let mut memory = [0; MEMORY_SIZE];
        memory[0..SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            timers: Timers::new(),
            stack: [0; STACK_DEPTH],
            memory,
            screen: Screen::new(),
        }
    }

    /// Borrows `len` bytes of memory starting at `address`
    pub fn read(&self, address: usize, len: usize) -> Result<&[u8]> {
        if len == 0 {
            return Ok(&[]);
        }
        self.memory
            .get(address..address + len)
            .ok_or_else(|| out_of_bounds(address))
    }

    /// Copies `bytes` into memory starting at `address`
    pub fn write(&mut self, address: usize, bytes: &[u8]) -> Result<()> {
        if bytes.is_empty() {
            return Ok(());
        }
        self.memory
            .get_mut(address..address + bytes.len())
            .ok_or_else(|| out_of_bounds(address))?
            .copy_from_slice(bytes);
        Ok(())
    }

    /// Reads the opcode at the pc and moves the pc on to the next one.
    ///
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    pub fn fetch(&mut self) -> Result<Opcode> {
        let bytes = self.read(self.pc as usize, 2)?;
        let op = Opcode::from_bytes(bytes[0], bytes[1]);
        self.pc += 0x2;
        Ok(op)
    }

    /// STACK.push(addr)
    pub fn push(&mut self, addr: u16) -> Result<()> {
        let depth = self.sp as usize;
        if depth == STACK_DEPTH {
            return Err(Chip8Error::StackOverflow { pc: self.pc, depth });
        }
        self.stack[depth] = addr;
        self.sp += 0x1;
        Ok(())
    }

    /// STACK.pop()
    pub fn pop(&mut self) -> Result<u16> {
        if self.sp == 0 {
            return Err(Chip8Error::StackUnderflow { pc: self.pc });
        }
        self.sp -= 0x1;
        Ok(self.stack[self.sp as usize])
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// The first address of a failed access that falls outside memory
fn out_of_bounds(address: usize) -> Chip8Error {
    Chip8Error::OutOfBounds {
        address: address.max(MEMORY_SIZE),
    }
}
