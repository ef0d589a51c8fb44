use rand::Rng;

use crate::error::{Chip8Error, Result};
use crate::keypad::Keypad;
use crate::opcode::Opcode;
use crate::operations;
use crate::state::State;

/// A decoded Opcode.
///
/// `x` and `y` name registers, `kk` is an immediate byte, `addr` a 12-bit address and `n`
/// a sprite height.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    Nop,
    Clear,
    Return,
    Jump { addr: u16 },
    Call { addr: u16 },
    SkipEqByte { x: u8, kk: u8 },
    SkipNeByte { x: u8, kk: u8 },
    SkipEqReg { x: u8, y: u8 },
    SkipNeReg { x: u8, y: u8 },
    LoadByte { x: u8, kk: u8 },
    AddByte { x: u8, kk: u8 },
    Move { x: u8, y: u8 },
    Or { x: u8, y: u8 },
    And { x: u8, y: u8 },
    Xor { x: u8, y: u8 },
    AddReg { x: u8, y: u8 },
    Sub { x: u8, y: u8 },
    ShiftRight { x: u8, y: u8 },
    SubN { x: u8, y: u8 },
    ShiftLeft { x: u8, y: u8 },
    LoadIndex { addr: u16 },
    JumpOffset { addr: u16 },
    Random { x: u8, kk: u8 },
    Draw { x: u8, y: u8, n: u8 },
    SkipPressed { x: u8 },
    SkipNotPressed { x: u8 },
    LoadDelay { x: u8 },
    WaitKey { x: u8 },
    SetDelay { x: u8 },
    SetSound { x: u8 },
    AddIndex { x: u8 },
    LoadGlyph { x: u8 },
    StoreBcd { x: u8 },
    StoreRegisters { x: u8 },
    LoadRegisters { x: u8 },
}

impl Instruction {
    /// Selects the correct Instruction for a given Opcode
    pub fn decode(op: Opcode) -> Result<Self> {
        use Instruction::*;

        let (x, y, kk, addr) = (op.x(), op.y(), op.kk(), op.addr());
        let instruction = match op.nibbles() {
            (0x0, 0x0, 0x0, 0x0) => Nop,
            (0x0, 0x0, 0xE, 0x0) => Clear,
            (0x0, 0x0, 0xE, 0xE) => Return,
            (0x1, ..) => Jump { addr },
            (0x2, ..) => Call { addr },
            (0x3, ..) => SkipEqByte { x, kk },
            (0x4, ..) => SkipNeByte { x, kk },
            (0x5, .., 0x0) => SkipEqReg { x, y },
            (0x6, ..) => LoadByte { x, kk },
            (0x7, ..) => AddByte { x, kk },
            (0x8, .., 0x0) => Move { x, y },
            (0x8, .., 0x1) => Or { x, y },
            (0x8, .., 0x2) => And { x, y },
            (0x8, .., 0x3) => Xor { x, y },
            (0x8, .., 0x4) => AddReg { x, y },
            (0x8, .., 0x5) => Sub { x, y },
            (0x8, .., 0x6) => ShiftRight { x, y },
            (0x8, .., 0x7) => SubN { x, y },
            (0x8, .., 0xE) => ShiftLeft { x, y },
            (0x9, .., 0x0) => SkipNeReg { x, y },
            (0xA, ..) => LoadIndex { addr },
            (0xB, ..) => JumpOffset { addr },
            (0xC, ..) => Random { x, kk },
            (0xD, ..) => Draw { x, y, n: op.n() },
            (0xE, _, 0x9, 0xE) => SkipPressed { x },
            (0xE, _, 0xA, 0x1) => SkipNotPressed { x },
            (0xF, _, 0x0, 0x7) => LoadDelay { x },
            (0xF, _, 0x0, 0xA) => WaitKey { x },
            (0xF, _, 0x1, 0x5) => SetDelay { x },
            (0xF, _, 0x1, 0x8) => SetSound { x },
            (0xF, _, 0x1, 0xE) => AddIndex { x },
            (0xF, _, 0x2, 0x9) => LoadGlyph { x },
            (0xF, _, 0x3, 0x3) => StoreBcd { x },
            (0xF, _, 0x5, 0x5) => StoreRegisters { x },
            (0xF, _, 0x6, 0x5) => LoadRegisters { x },
            nibbles => {
                return Err(Chip8Error::UnimplementedOpcode {
                    opcode: op.word(),
                    nibbles,
                })
            }
        };
        Ok(instruction)
    }

    /// Builds the State that follows this Instruction.
    ///
    /// `state` must already have its pc moved past the instruction. On error nothing has
    /// been changed; the caller still holds the untouched `state`.
    pub fn execute<R: Rng + ?Sized>(
        self,
        state: &State,
        keypad: &Keypad,
        rng: &mut R,
    ) -> Result<State> {
        use Instruction::*;

        let next = match self {
            Nop => operations::nop(state),
            Clear => operations::clr(state),
            Return => operations::rts(state)?,
            Jump { addr } => operations::jump(state, addr),
            Call { addr } => operations::call(state, addr)?,
            SkipEqByte { x, kk } => operations::ske(state, x, kk),
            SkipNeByte { x, kk } => operations::skne(state, x, kk),
            SkipEqReg { x, y } => operations::skre(state, x, y),
            SkipNeReg { x, y } => operations::skrne(state, x, y),
            LoadByte { x, kk } => operations::load(state, x, kk),
            AddByte { x, kk } => operations::add(state, x, kk),
            Move { x, y } => operations::mv(state, x, y),
            Or { x, y } => operations::or(state, x, y),
            And { x, y } => operations::and(state, x, y),
            Xor { x, y } => operations::xor(state, x, y),
            AddReg { x, y } => operations::addr(state, x, y),
            Sub { x, y } => operations::sub(state, x, y),
            ShiftRight { x, y } => operations::shr(state, x, y),
            SubN { x, y } => operations::subn(state, x, y),
            ShiftLeft { x, y } => operations::shl(state, x, y),
            LoadIndex { addr } => operations::loadi(state, addr),
            JumpOffset { addr } => operations::jumpi(state, addr),
            Random { x, kk } => operations::rand(state, x, kk, rng.gen()),
            Draw { x, y, n } => operations::draw(state, x, y, n)?,
            SkipPressed { x } => operations::skpr(state, keypad, x),
            SkipNotPressed { x } => operations::skup(state, keypad, x),
            LoadDelay { x } => operations::moved(state, x),
            WaitKey { x } => operations::keyd(state, keypad, x),
            SetDelay { x } => operations::loads(state, x),
            SetSound { x } => operations::ld(state, x),
            AddIndex { x } => operations::addi(state, x),
            LoadGlyph { x } => operations::ldspr(state, x),
            StoreBcd { x } => operations::bcd(state, x)?,
            StoreRegisters { x } => operations::stor(state, x)?,
            LoadRegisters { x } => operations::read(state, x)?,
        };
        Ok(next)
    }
}
