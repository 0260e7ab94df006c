//! # CPU State and Execution
//!
//! This module contains the [`Cpu`] struct representing processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next instruction
//! - **Stack pointer** (SP): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Status flags**: C, Z, I, D, B, V, N (individual bool fields)
//!
//! ## Execution Model
//!
//! [`Cpu::execute`] runs a cycle-budget-driven loop: it fetches and
//! dispatches whole instructions until the remaining cycle count drops to
//! zero or below, checking the budget only between instructions. The CPU
//! never owns memory; a [`Memory`] is borrowed per operation, modeling a CPU
//! chip driving an external bus.

use log::warn;

use crate::addressing::AddressingMode;
use crate::memory::{Memory, MemoryError};
use crate::opcodes::Opcode;

/// Address the program counter is set to on reset.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Base address of the stack page. The full stack address is
/// `STACK_PAGE | sp`; the stack grows downward from 0x01FF.
pub const STACK_PAGE: u16 = 0x0100;

/// Stack pointer offset after reset (top of the stack page).
const SP_INIT: u8 = 0xFF;

/// 6502 CPU registers and status flags.
///
/// Constructed in the power-on reset state via [`Cpu::new`], or with
/// arbitrary register/flag overrides via [`Cpu::builder`] (used by test
/// fixtures to arrange starting states). After construction, state changes
/// only through [`Cpu::reset`] and [`Cpu::execute`]; every register and flag
/// remains readable through accessors.
///
/// # Examples
///
/// ```
/// use cpu6502::{Cpu, Memory, Opcode};
///
/// let mut memory = Memory::new();
/// let mut cpu = Cpu::new();
/// cpu.reset(&mut memory);
///
/// // Program starts at the reset vector: LDA #$42
/// memory.write(0xFFFC, Opcode::LdaImmediate as u8);
/// memory.write(0xFFFD, 0x42);
///
/// let used = cpu.execute(2, &mut memory).unwrap();
/// assert_eq!(used, 2);
/// assert_eq!(cpu.a(), 0x42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cpu {
    /// Program counter (address of next instruction)
    pc: u16,

    /// Stack pointer (STACK_PAGE | sp gives the full stack address)
    sp: u8,

    /// Accumulator register
    a: u8,

    /// X index register
    x: u8,

    /// Y index register
    y: u8,

    /// Carry flag
    flag_c: bool,

    /// Zero flag (set if the result is zero)
    flag_z: bool,

    /// Interrupt disable flag
    flag_i: bool,

    /// Decimal mode flag
    flag_d: bool,

    /// Break flag
    flag_b: bool,

    /// Overflow flag
    flag_v: bool,

    /// Negative flag (set if bit 7 of the result is 1)
    flag_n: bool,
}

impl Cpu {
    /// Creates a CPU in the power-on reset state: PC at the reset vector,
    /// SP at the top of the stack page, registers and flags zeroed.
    pub fn new() -> Self {
        Self {
            pc: RESET_VECTOR,
            sp: SP_INIT,
            a: 0,
            x: 0,
            y: 0,
            flag_c: false,
            flag_z: false,
            flag_i: false,
            flag_d: false,
            flag_b: false,
            flag_v: false,
            flag_n: false,
        }
    }

    /// Returns a builder for arranging an arbitrary starting state.
    pub fn builder() -> CpuBuilder {
        CpuBuilder { cpu: Cpu::new() }
    }

    /// Resets the CPU and re-initializes memory.
    ///
    /// Sets PC to [`RESET_VECTOR`], SP to the top of the stack page, zeroes
    /// all general registers and all seven flags, and zero-fills `memory`.
    /// Cannot fail.
    pub fn reset(&mut self, memory: &mut Memory) {
        *self = Cpu::new();
        memory.initialise();
    }

    /// Runs the fetch-decode-execute loop until the cycle budget is
    /// exhausted, returning the number of cycles actually consumed.
    ///
    /// The budget is checked only between whole instructions, so a single
    /// instruction that overdraws the budget still completes in full: the
    /// return value may exceed `cycles`, and is never less than a completed
    /// instruction's cost. A budget of zero or less performs no fetch and
    /// returns 0.
    ///
    /// An unrecognized opcode is reported through the `log` facade and
    /// treated as a no-op; the cycle already debited for fetching it stands,
    /// so the loop always makes progress on malformed input.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError`] if a subroutine call would push its return
    /// address past the end of the address space.
    pub fn execute(&mut self, cycles: i32, memory: &mut Memory) -> Result<i32, MemoryError> {
        let requested = cycles;
        let mut cycles = cycles;

        while cycles > 0 {
            let instruction = self.fetch_byte(&mut cycles, memory);
            match Opcode::from_byte(instruction) {
                Some(Opcode::Jsr) => self.jsr(&mut cycles, memory)?,
                Some(op) => self.lda(&mut cycles, op.addressing_mode(), memory),
                None => {
                    warn!(
                        "instruction not handled: 0x{:02X} at 0x{:04X}",
                        instruction,
                        self.pc.wrapping_sub(1)
                    );
                }
            }
        }

        Ok(requested - cycles)
    }

    /// Fetches the byte at PC, advancing PC and debiting 1 cycle.
    fn fetch_byte(&mut self, cycles: &mut i32, memory: &Memory) -> u8 {
        let data = memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        *cycles -= 1;
        data
    }

    /// Fetches a little-endian word at PC, advancing PC by 2 and debiting
    /// 2 cycles.
    fn fetch_word(&mut self, cycles: &mut i32, memory: &Memory) -> u16 {
        let low = u16::from(self.fetch_byte(cycles, memory));
        let high = u16::from(self.fetch_byte(cycles, memory));
        (high << 8) | low
    }

    /// Reads the byte at an already-computed address, debiting 1 cycle.
    /// Does not touch PC.
    fn read_byte(cycles: &mut i32, addr: u16, memory: &Memory) -> u8 {
        *cycles -= 1;
        memory.read(addr)
    }

    /// Loads the accumulator via the given addressing mode and applies the
    /// shared status rule: Z = (A == 0), N = bit 7 of A. No other flag is
    /// touched.
    fn lda(&mut self, cycles: &mut i32, mode: AddressingMode, memory: &Memory) {
        let value = match mode {
            AddressingMode::Immediate => self.fetch_byte(cycles, memory),
            AddressingMode::ZeroPage => {
                let addr = u16::from(self.fetch_byte(cycles, memory));
                Self::read_byte(cycles, addr, memory)
            }
            AddressingMode::ZeroPageX => {
                // The index add wraps within the zero page and costs a cycle.
                let base = self.fetch_byte(cycles, memory);
                let addr = u16::from(base.wrapping_add(self.x));
                *cycles -= 1;
                Self::read_byte(cycles, addr, memory)
            }
            AddressingMode::Absolute => {
                let addr = self.fetch_word(cycles, memory);
                Self::read_byte(cycles, addr, memory)
            }
            AddressingMode::AbsoluteX => self.read_absolute_indexed(cycles, self.x, memory),
            AddressingMode::AbsoluteY => self.read_absolute_indexed(cycles, self.y, memory),
        };

        self.a = value;
        self.flag_z = value == 0;
        self.flag_n = (value & 0x80) != 0;
    }

    /// Reads from a 16-bit base address plus an index register, debiting an
    /// extra cycle only when the add crosses a 256-byte page boundary.
    fn read_absolute_indexed(&mut self, cycles: &mut i32, index: u8, memory: &Memory) -> u8 {
        let base = self.fetch_word(cycles, memory);
        let addr = base.wrapping_add(u16::from(index));
        if page_crossed(base, addr) {
            *cycles -= 1;
        }
        Self::read_byte(cycles, addr, memory)
    }

    /// JSR: pushes the return address (the address of the last byte of the
    /// JSR instruction) to the stack page, decrements SP by 2, and jumps to
    /// the fetched target. Fixed 6-cycle cost, no flags touched.
    fn jsr(&mut self, cycles: &mut i32, memory: &mut Memory) -> Result<(), MemoryError> {
        let target = self.fetch_word(cycles, memory);

        // Little-endian push across [sp-1, sp] leaves the high byte at the
        // higher address, matching the hardware push order.
        let return_addr = self.pc.wrapping_sub(1);
        let stack_addr = STACK_PAGE | u16::from(self.sp.wrapping_sub(1));
        memory.write_word(cycles, return_addr, stack_addr)?;
        self.sp = self.sp.wrapping_sub(2);

        self.pc = target;
        *cycles -= 1;
        Ok(())
    }

    // ========== Register and Flag Accessors ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: the full stack address is `STACK_PAGE | sp`.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

/// True when `base` and `effective` fall in different 256-byte pages.
fn page_crossed(base: u16, effective: u16) -> bool {
    (base & 0xFF00) != (effective & 0xFF00)
}

/// Builder for a [`Cpu`] with explicit register/flag overrides.
///
/// Defaults every field to the reset state, so a fixture only names the
/// state it cares about:
///
/// ```
/// use cpu6502::Cpu;
///
/// let cpu = Cpu::builder().x(0x05).flag_c(true).build();
/// assert_eq!(cpu.x(), 0x05);
/// assert!(cpu.flag_c());
/// assert_eq!(cpu.pc(), 0xFFFC);
/// ```
#[derive(Debug, Clone)]
pub struct CpuBuilder {
    cpu: Cpu,
}

impl CpuBuilder {
    /// Sets the initial program counter.
    pub fn pc(mut self, pc: u16) -> Self {
        self.cpu.pc = pc;
        self
    }

    /// Sets the initial stack pointer.
    pub fn sp(mut self, sp: u8) -> Self {
        self.cpu.sp = sp;
        self
    }

    /// Sets the initial accumulator value.
    pub fn a(mut self, a: u8) -> Self {
        self.cpu.a = a;
        self
    }

    /// Sets the initial X index register value.
    pub fn x(mut self, x: u8) -> Self {
        self.cpu.x = x;
        self
    }

    /// Sets the initial Y index register value.
    pub fn y(mut self, y: u8) -> Self {
        self.cpu.y = y;
        self
    }

    /// Sets the initial Carry flag.
    pub fn flag_c(mut self, set: bool) -> Self {
        self.cpu.flag_c = set;
        self
    }

    /// Sets the initial Zero flag.
    pub fn flag_z(mut self, set: bool) -> Self {
        self.cpu.flag_z = set;
        self
    }

    /// Sets the initial Interrupt Disable flag.
    pub fn flag_i(mut self, set: bool) -> Self {
        self.cpu.flag_i = set;
        self
    }

    /// Sets the initial Decimal mode flag.
    pub fn flag_d(mut self, set: bool) -> Self {
        self.cpu.flag_d = set;
        self
    }

    /// Sets the initial Break flag.
    pub fn flag_b(mut self, set: bool) -> Self {
        self.cpu.flag_b = set;
        self
    }

    /// Sets the initial Overflow flag.
    pub fn flag_v(mut self, set: bool) -> Self {
        self.cpu.flag_v = set;
        self
    }

    /// Sets the initial Negative flag.
    pub fn flag_n(mut self, set: bool) -> Self {
        self.cpu.flag_n = set;
        self
    }

    /// Finishes the builder and returns the CPU.
    pub fn build(self) -> Cpu {
        self.cpu
    }
}
