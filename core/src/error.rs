use thiserror::Error;

/// Everything that can stop a Chip-8 program.
///
/// Apart from `InvalidKeyIndex`, `RomTooLarge` and `Io` (which are rejected at the
/// host boundary) these halt the running program; the state is left as it was
/// before the failing step.
#[derive(Debug, Error)]
pub enum Chip8Error {
    #[error("unimplemented opcode {opcode:#06X} (nibbles {})", hex_nibbles(.nibbles))]
    UnimplementedOpcode { opcode: u16, nibbles: (u8, u8, u8, u8) },

    #[error("memory access out of bounds at address {address:#06X}")]
    OutOfBounds { address: usize },

    #[error("stack overflow: call at {pc:#06X} with {depth} return addresses already stored")]
    StackOverflow { pc: u16, depth: usize },

    #[error("stack underflow: return at {pc:#06X} with an empty call stack")]
    StackUnderflow { pc: u16 },

    #[error("invalid key index {index}, expected 0..=15")]
    InvalidKeyIndex { index: u8 },

    #[error("ROM is too large ({size} bytes), max size is {max_size} bytes")]
    RomTooLarge { size: usize, max_size: usize },

    #[error("unable to read ROM: {0}")]
    Io(#[from] std::io::Error),
}

fn hex_nibbles(nibbles: &(u8, u8, u8, u8)) -> String {
    format!(
        "{:X} {:X} {:X} {:X}",
        nibbles.0, nibbles.1, nibbles.2, nibbles.3
    )
}

pub type Result<T> = std::result::Result<T, Chip8Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unimplemented_opcode_reports_nibbles() {
        let err = Chip8Error::UnimplementedOpcode {
            opcode: 0x5AB3,
            nibbles: (0x5, 0xA, 0xB, 0x3),
        };
        assert_eq!(
            err.to_string(),
            "unimplemented opcode 0x5AB3 (nibbles 5 A B 3)"
        );
    }

    #[test]
    fn test_out_of_bounds_reports_address() {
        let err = Chip8Error::OutOfBounds { address: 0x1000 };
        assert_eq!(
            err.to_string(),
            "memory access out of bounds at address 0x1000"
        );
    }
}
