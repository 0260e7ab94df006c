//! # 6502 CPU Instruction-Set Interpreter
//!
//! A fetch-decode-execute interpreter for a subset of the MOS Technology
//! 6502, modeling registers, processor status flags, and per-instruction
//! cycle costs over a flat 64KB byte-addressable memory space.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{Cpu, Memory, Opcode};
//!
//! let mut memory = Memory::new();
//! let mut cpu = Cpu::new();
//!
//! // Reset puts PC at the reset vector (0xFFFC) and zero-fills memory.
//! cpu.reset(&mut memory);
//!
//! // Load a program at the reset vector: LDA $42 with 0x37 at 0x0042.
//! memory.write(0xFFFC, Opcode::LdaZeroPage as u8);
//! memory.write(0xFFFD, 0x42);
//! memory.write(0x0042, 0x37);
//!
//! // Run with a 3-cycle budget.
//! let used = cpu.execute(3, &mut memory).unwrap();
//! assert_eq!(used, 3);
//! assert_eq!(cpu.a(), 0x37);
//! ```
//!
//! ## Architecture
//!
//! Two components, leaves first:
//!
//! - [`Memory`]: a fixed 64KB flat address space with byte read/write and a
//!   little-endian word-write helper that debits cycle cost.
//! - [`Cpu`]: register/flag state and the execution loop. The CPU never owns
//!   memory; a `Memory` is borrowed per operation, modeling a CPU chip
//!   driving an external bus.
//!
//! Execution is cycle-budget-driven: [`Cpu::execute`] dispatches whole
//! instructions until the budget is exhausted, and a single instruction that
//! overdraws the budget still completes in full. Unrecognized opcodes are
//! reported through the `log` facade and skipped as single-cycle no-ops, so
//! the loop is bounded by the budget even on malformed input.
//!
//! ## Modules
//!
//! - `cpu` - CPU state, builder, and execution logic
//! - `memory` - flat memory and its error type
//! - `opcodes` - byte-to-instruction mapping
//! - `addressing` - addressing mode enumeration

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{Cpu, CpuBuilder, RESET_VECTOR, STACK_PAGE};
pub use memory::{Memory, MemoryError};
pub use opcodes::Opcode;
