//! # Memory
//!
//! A fixed-size flat 64KB address space with byte read/write access and a
//! little-endian word-write helper that debits cycle cost.
//!
//! ## Design Principles
//!
//! Addresses are `u16`, matching the 6502's 16-bit address bus. Because the
//! address space is exactly 2^16 bytes, a single-byte access can never be out
//! of range; the bounds contract is enforced by the type rather than by a
//! runtime assertion. The one access that can still run off the end of the
//! address space — the high byte of a word write at 0xFFFF — is surfaced as a
//! typed [`MemoryError`] instead of silently wrapping to address 0x0000.

use thiserror::Error;

/// Errors produced by memory operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// A word write at this address would place its high byte past the end
    /// of the address space.
    #[error("word write at 0x{0:04X} runs past the end of the address space")]
    OutOfBounds(u16),
}

/// 64KB flat memory.
///
/// All 65536 addresses (0x0000-0xFFFF) map to a single contiguous array,
/// allocated once per emulation session and zero-filled.
///
/// # Examples
///
/// ```
/// use cpu6502::Memory;
///
/// let mut mem = Memory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
pub struct Memory {
    /// 64KB contiguous memory array
    data: Box<[u8; Memory::CAPACITY]>,
}

impl Memory {
    /// Size of the address space in bytes.
    pub const CAPACITY: usize = 64 * 1024;

    /// Creates a new memory with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; Memory::CAPACITY]),
        }
    }

    /// Zero-fills the entire address space.
    ///
    /// May be called repeatedly; the CPU calls this on every reset.
    pub fn initialise(&mut self) {
        self.data.fill(0);
    }

    /// Reads the byte at `addr`.
    pub fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    /// Writes a byte at `addr`.
    pub fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    /// Writes a 16-bit value across `addr` and `addr + 1` in little-endian
    /// order and debits 2 cycles.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] when `addr` is 0xFFFF, where the
    /// high byte would land past the end of the address space. No byte is
    /// written and no cycles are debited in that case.
    pub fn write_word(
        &mut self,
        cycles: &mut i32,
        value: u16,
        addr: u16,
    ) -> Result<(), MemoryError> {
        let high_addr = addr.checked_add(1).ok_or(MemoryError::OutOfBounds(addr))?;
        self.data[addr as usize] = (value & 0xFF) as u8;
        self.data[high_addr as usize] = (value >> 8) as u8;
        *cycles -= 2;
        Ok(())
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
