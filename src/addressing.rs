//! # Addressing Modes
//!
//! This module defines the addressing modes used by the modeled instruction
//! subset. Each mode determines how the CPU interprets operand bytes and
//! calculates effective addresses.

/// Addressing mode enumeration for the modeled instruction subset.
///
/// # Operand Sizes
///
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// 8-bit constant operand in the instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from 0x0080 + X, wraps within zero page)
    ZeroPageX,

    /// Full 16-bit address.
    ///
    /// Example: LDA $1234 (load from address 0x1234)
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X (load from 0x1234 + X)
    /// Incurs a +1 cycle penalty if the add crosses a page boundary.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y (load from 0x1234 + Y)
    /// Incurs a +1 cycle penalty if the add crosses a page boundary.
    AbsoluteY,
}
