//! # Opcode Table
//!
//! The fixed mapping from byte value to instruction identity. Only the
//! accumulator-load family (six addressing-mode variants) and the subroutine
//! call are defined; every other byte value decodes to `None` and the
//! execution loop treats it as a single-cycle no-op.

use crate::addressing::AddressingMode;

/// Decoded instruction identity.
///
/// Discriminant values are the opcode byte encodings, so an opcode can be
/// written into program memory with `Opcode::LdaImmediate as u8`.
///
/// # Examples
///
/// ```
/// use cpu6502::{AddressingMode, Opcode};
///
/// let op = Opcode::from_byte(0xA9).unwrap();
/// assert_eq!(op, Opcode::LdaImmediate);
/// assert_eq!(op.addressing_mode(), AddressingMode::Immediate);
/// assert_eq!(op.mnemonic(), "LDA");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    /// LDA #oper
    LdaImmediate = 0xA9,
    /// LDA $oper
    LdaZeroPage = 0xA5,
    /// LDA $oper,X
    LdaZeroPageX = 0xB5,
    /// LDA $oper (16-bit)
    LdaAbsolute = 0xAD,
    /// LDA $oper,X (16-bit)
    LdaAbsoluteX = 0xBD,
    /// LDA $oper,Y (16-bit)
    LdaAbsoluteY = 0xB9,
    /// JSR $oper
    Jsr = 0x20,
}

impl Opcode {
    /// Decodes an opcode byte, returning `None` for unrecognized bytes.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0xA9 => Some(Opcode::LdaImmediate),
            0xA5 => Some(Opcode::LdaZeroPage),
            0xB5 => Some(Opcode::LdaZeroPageX),
            0xAD => Some(Opcode::LdaAbsolute),
            0xBD => Some(Opcode::LdaAbsoluteX),
            0xB9 => Some(Opcode::LdaAbsoluteY),
            0x20 => Some(Opcode::Jsr),
            _ => None,
        }
    }

    /// Three-letter instruction mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::LdaImmediate
            | Opcode::LdaZeroPage
            | Opcode::LdaZeroPageX
            | Opcode::LdaAbsolute
            | Opcode::LdaAbsoluteX
            | Opcode::LdaAbsoluteY => "LDA",
            Opcode::Jsr => "JSR",
        }
    }

    /// Addressing mode for this instruction.
    pub fn addressing_mode(self) -> AddressingMode {
        match self {
            Opcode::LdaImmediate => AddressingMode::Immediate,
            Opcode::LdaZeroPage => AddressingMode::ZeroPage,
            Opcode::LdaZeroPageX => AddressingMode::ZeroPageX,
            Opcode::LdaAbsolute | Opcode::Jsr => AddressingMode::Absolute,
            Opcode::LdaAbsoluteX => AddressingMode::AbsoluteX,
            Opcode::LdaAbsoluteY => AddressingMode::AbsoluteY,
        }
    }
}
