//! Tests for the JSR (Jump to Subroutine) instruction.
//!
//! Covers the return-address push to the stack page, stack pointer
//! decrement, control transfer, the fixed 6-cycle cost, and flag
//! preservation.

use cpu6502::{Cpu, Memory, Opcode, STACK_PAGE};

#[test]
fn test_jsr_transfers_control_to_target() {
    let mut memory = Memory::new();
    let mut cpu = Cpu::new();

    // JSR $8000 at the reset vector
    memory.write(0xFFFC, Opcode::Jsr as u8);
    memory.write(0xFFFD, 0x00);
    memory.write(0xFFFE, 0x80);

    let used = cpu.execute(6, &mut memory).unwrap();

    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(used, 6);
}

#[test]
fn test_jsr_pushes_return_address_to_stack_page() {
    let mut memory = Memory::new();
    let mut cpu = Cpu::new();

    memory.write(0xFFFC, Opcode::Jsr as u8);
    memory.write(0xFFFD, 0x00);
    memory.write(0xFFFE, 0x80);

    cpu.execute(6, &mut memory).unwrap();

    // Return address is the last byte of the JSR instruction (0xFFFE),
    // pushed with the high byte at the higher stack address.
    assert_eq!(memory.read(STACK_PAGE | 0xFF), 0xFF); // High byte
    assert_eq!(memory.read(STACK_PAGE | 0xFE), 0xFE); // Low byte
}

#[test]
fn test_jsr_decrements_stack_pointer_by_two() {
    let mut memory = Memory::new();
    let mut cpu = Cpu::new();
    assert_eq!(cpu.sp(), 0xFF);

    memory.write(0xFFFC, Opcode::Jsr as u8);
    memory.write(0xFFFD, 0x00);
    memory.write(0xFFFE, 0x80);

    cpu.execute(6, &mut memory).unwrap();

    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn test_jsr_touches_no_flags_or_data_registers() {
    let mut memory = Memory::new();
    let mut cpu = Cpu::builder()
        .a(0x11)
        .x(0x22)
        .y(0x33)
        .flag_c(true)
        .flag_n(true)
        .build();

    memory.write(0xFFFC, Opcode::Jsr as u8);
    memory.write(0xFFFD, 0x00);
    memory.write(0xFFFE, 0x80);

    let before = cpu.clone();
    cpu.execute(6, &mut memory).unwrap();

    assert_eq!(cpu.a(), before.a());
    assert_eq!(cpu.x(), before.x());
    assert_eq!(cpu.y(), before.y());
    assert_eq!(cpu.flag_c(), before.flag_c());
    assert_eq!(cpu.flag_z(), before.flag_z());
    assert_eq!(cpu.flag_i(), before.flag_i());
    assert_eq!(cpu.flag_d(), before.flag_d());
    assert_eq!(cpu.flag_b(), before.flag_b());
    assert_eq!(cpu.flag_v(), before.flag_v());
    assert_eq!(cpu.flag_n(), before.flag_n());
}

#[test]
fn test_jsr_then_load_at_subroutine() {
    let mut memory = Memory::new();
    let mut cpu = Cpu::new();

    // JSR $8000, then LDA #$84 inside the subroutine
    memory.write(0xFFFC, Opcode::Jsr as u8);
    memory.write(0xFFFD, 0x00);
    memory.write(0xFFFE, 0x80);
    memory.write(0x8000, Opcode::LdaImmediate as u8);
    memory.write(0x8001, 0x84);

    let used = cpu.execute(8, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x84);
    assert!(cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(used, 8); // 6 for JSR + 2 for the load
}
