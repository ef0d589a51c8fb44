/// Width of the frame buffer in pixels
pub const DISPLAY_WIDTH: usize = 64;
/// Height of the frame buffer in pixels
pub const DISPLAY_HEIGHT: usize = 32;

/// Bytes of addressable memory
pub const MEMORY_SIZE: usize = 4096;
/// Where programs are loaded into memory and where execution begins
pub const PROGRAM_START: u16 = 0x200;
/// The largest program that fits between PROGRAM_START and the end of memory
pub const MAX_PROGRAM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Number of return addresses the call stack can hold
pub const STACK_DEPTH: usize = 16;
/// Number of keys on the hexadecimal keypad
pub const KEY_COUNT: usize = 16;
/// Register used as the carry, borrow and collision flag
pub const FLAG_REGISTER: usize = 0xF;

/// FX1E wraps I at this value rather than at 0x10000
pub const INDEX_WRAP: u32 = 0x8000;

/// Timers are decremented at 60Hz
pub const TIMER_HZ: u32 = 60;
/// Conventional number of CPU steps between timer ticks (~600Hz CPU)
pub const STEPS_PER_TIMER_TICK: u32 = 10;

/// Bytes per glyph in the SPRITE_SHEET
pub const GLYPH_SIZE: u16 = 5;

/// Built-in glyphs for the hex digits 0..F, stored from address 0x000.
///
/// Each glyph is 4 pixels wide and 5 tall; only the high nibble of each byte is used.
/// ```text
/// 0xF0 1111....
/// 0x90 1..1....
/// 0x90 1..1....
/// 0x90 1..1....
/// 0xF0 1111....
/// ```
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
