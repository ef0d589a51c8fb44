//! One function per instruction.
//!
//! Every operation receives the State as it is after the fetch (so `pc` already points at
//! the next instruction) and builds the State that follows it.

use crate::constants::{FLAG_REGISTER, GLYPH_SIZE, INDEX_WRAP};
use crate::error::Result;
use crate::keypad::Keypad;
use crate::state::State;

/// pc += 2 if `condition` holds
fn skip_if(state: &State, condition: bool) -> State {
    let pc = if condition { state.pc + 0x2 } else { state.pc };
    State { pc, ..*state }
}

/// Vx = value; VF = flag
///
/// The flag is written last so it wins when x is VF.
fn set_with_flag(state: &State, x: u8, value: u8, flag: bool) -> State {
    let mut v = state.v;
    v[x as usize] = value;
    v[FLAG_REGISTER] = flag as u8;
    State { v, ..*state }
}

/// Vx = f(Vx, Vy)
fn combine(state: &State, x: u8, y: u8, f: impl Fn(u8, u8) -> u8) -> State {
    let mut v = state.v;
    v[x as usize] = f(v[x as usize], v[y as usize]);
    State { v, ..*state }
}

/// nop
pub fn nop(state: &State) -> State {
    *state
}

/// clear
pub fn clr(state: &State) -> State {
    let mut screen = state.screen;
    screen.clear();
    State { screen, ..*state }
}

/// PC = STACK.pop()
pub fn rts(state: &State) -> Result<State> {
    let mut next = *state;
    next.pc = next.pop()?;
    Ok(next)
}

/// PC = addr
pub fn jump(state: &State, addr: u16) -> State {
    State { pc: addr, ..*state }
}

/// STACK.push(PC); PC = addr
pub fn call(state: &State, addr: u16) -> Result<State> {
    let mut next = *state;
    next.push(state.pc)?;
    next.pc = addr;
    Ok(next)
}

/// if Vx == kk then pc += 2
pub fn ske(state: &State, x: u8, kk: u8) -> State {
    skip_if(state, state.v[x as usize] == kk)
}

/// if Vx != kk then pc += 2
pub fn skne(state: &State, x: u8, kk: u8) -> State {
    skip_if(state, state.v[x as usize] != kk)
}

/// if Vx == Vy then pc += 2
pub fn skre(state: &State, x: u8, y: u8) -> State {
    skip_if(state, state.v[x as usize] == state.v[y as usize])
}

/// if Vx != Vy then pc += 2
pub fn skrne(state: &State, x: u8, y: u8) -> State {
    skip_if(state, state.v[x as usize] != state.v[y as usize])
}

/// Vx = kk
pub fn load(state: &State, x: u8, kk: u8) -> State {
    let mut v = state.v;
    v[x as usize] = kk;
    State { v, ..*state }
}

/// Vx += kk
/// Add kk to Vx; allow for overflow but implicitly drop it
pub fn add(state: &State, x: u8, kk: u8) -> State {
    let mut v = state.v;
    v[x as usize] = v[x as usize].wrapping_add(kk);
    State { v, ..*state }
}

/// Vx = Vy
pub fn mv(state: &State, x: u8, y: u8) -> State {
    combine(state, x, y, |_, vy| vy)
}

/// Vx |= Vy
pub fn or(state: &State, x: u8, y: u8) -> State {
    combine(state, x, y, |vx, vy| vx | vy)
}

/// Vx &= Vy
pub fn and(state: &State, x: u8, y: u8) -> State {
    combine(state, x, y, |vx, vy| vx & vy)
}

/// Vx ^= Vy
pub fn xor(state: &State, x: u8, y: u8) -> State {
    combine(state, x, y, |vx, vy| vx ^ vy)
}

/// Vx += Vy; VF = overflow
pub fn addr(state: &State, x: u8, y: u8) -> State {
    let (res, over) = state.v[x as usize].overflowing_add(state.v[y as usize]);
    set_with_flag(state, x, res, over)
}

/// Vx -= Vy; VF = !underflow
pub fn sub(state: &State, x: u8, y: u8) -> State {
    let (res, under) = state.v[x as usize].overflowing_sub(state.v[y as usize]);
    set_with_flag(state, x, res, !under)
}

/// Vx = Vy >> 1; VF = lsb(Vy)
pub fn shr(state: &State, x: u8, y: u8) -> State {
    let vy = state.v[y as usize];
    set_with_flag(state, x, vy >> 1, vy & 0x1 == 0x1)
}

/// Vx = Vy - Vx; VF = !underflow
pub fn subn(state: &State, x: u8, y: u8) -> State {
    let (res, under) = state.v[y as usize].overflowing_sub(state.v[x as usize]);
    set_with_flag(state, x, res, !under)
}

/// Vx = Vy << 1; VF = msb(Vy)
pub fn shl(state: &State, x: u8, y: u8) -> State {
    let vy = state.v[y as usize];
    set_with_flag(state, x, vy << 1, vy & 0x80 == 0x80)
}

/// I = addr
pub fn loadi(state: &State, addr: u16) -> State {
    State { i: addr, ..*state }
}

/// PC = V0 + addr
pub fn jumpi(state: &State, addr: u16) -> State {
    State {
        pc: u16::from(state.v[0x0]) + addr,
        ..*state
    }
}

/// Vx = rand_byte & kk
pub fn rand(state: &State, x: u8, kk: u8, rand_byte: u8) -> State {
    load(state, x, rand_byte & kk)
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory i..i+n at position Vx, Vy on the screen with wrapping.
/// Sets VF if any pixels were erased
pub fn draw(state: &State, x: u8, y: u8, n: u8) -> Result<State> {
    let sprite = state.read(state.i as usize, n as usize)?;
    let mut screen = state.screen;
    let collision = screen.draw(state.v[x as usize], state.v[y as usize], sprite);

    let mut v = state.v;
    v[FLAG_REGISTER] = collision as u8;
    Ok(State { v, screen, ..*state })
}

/// if Vx.pressed then pc += 2
pub fn skpr(state: &State, keypad: &Keypad, x: u8) -> State {
    skip_if(state, keypad.is_pressed(state.v[x as usize]))
}

/// if !Vx.pressed then pc += 2
pub fn skup(state: &State, keypad: &Keypad, x: u8) -> State {
    skip_if(state, !keypad.is_pressed(state.v[x as usize]))
}

/// Vx = DT
pub fn moved(state: &State, x: u8) -> State {
    load(state, x, state.timers.delay)
}

/// await keypress for Vx
/// If nothing is pressed the pc is wound back so this instruction runs again next cycle
pub fn keyd(state: &State, keypad: &Keypad, x: u8) -> State {
    match keypad.first_pressed() {
        Some(key) => load(state, x, key),
        None => State {
            pc: state.pc - 0x2,
            ..*state
        },
    }
}

/// DT = Vx
pub fn loads(state: &State, x: u8) -> State {
    let mut timers = state.timers;
    timers.delay = state.v[x as usize];
    State { timers, ..*state }
}

/// ST = Vx
pub fn ld(state: &State, x: u8) -> State {
    let mut timers = state.timers;
    timers.sound = state.v[x as usize];
    State { timers, ..*state }
}

/// I = (I + Vx) % 0x8000
pub fn addi(state: &State, x: u8) -> State {
    let i = (u32::from(state.i) + u32::from(state.v[x as usize])) % INDEX_WRAP;
    State {
        i: i as u16,
        ..*state
    }
}

/// I = Vx * 5
/// Set I to the memory address of the sprite for Vx
/// See constants::SPRITE_SHEET for more details
pub fn ldspr(state: &State, x: u8) -> State {
    State {
        i: u16::from(state.v[x as usize]) * GLYPH_SIZE,
        ..*state
    }
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(state: &State, x: u8) -> Result<State> {
    let vx = state.v[x as usize];
    let mut next = *state;
    next.write(state.i as usize, &[vx / 100 % 10, vx / 10 % 10, vx % 10])?;
    Ok(next)
}

/// mem[I..=I+x] = V0..=Vx; I += x + 1
pub fn stor(state: &State, x: u8) -> Result<State> {
    let count = x as usize + 1;
    let mut next = *state;
    next.write(state.i as usize, &state.v[..count])?;
    next.i += count as u16;
    Ok(next)
}

/// V0..=Vx = mem[I..=I+x]; I += x + 1
pub fn read(state: &State, x: u8) -> Result<State> {
    let count = x as usize + 1;
    let mut v = state.v;
    v[..count].copy_from_slice(state.read(state.i as usize, count)?);
    Ok(State {
        v,
        i: state.i + count as u16,
        ..*state
    })
}
