//! CPU construction and reset tests.

use cpu6502::{Cpu, Memory, RESET_VECTOR};

#[test]
fn test_new_cpu_is_in_reset_state() {
    let cpu = Cpu::new();

    assert_eq!(cpu.pc(), RESET_VECTOR);
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x00);

    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_i());
    assert!(!cpu.flag_d());
    assert!(!cpu.flag_b());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
}

#[test]
fn test_reset_restores_registers_and_clears_memory() {
    let mut memory = Memory::new();
    let mut cpu = Cpu::builder()
        .pc(0x1234)
        .sp(0x80)
        .a(0x11)
        .x(0x22)
        .y(0x33)
        .flag_c(true)
        .flag_n(true)
        .build();

    memory.write(0x4480, 0x37);

    cpu.reset(&mut memory);

    assert_eq!(cpu, Cpu::new());
    assert_eq!(memory.read(0x4480), 0x00);
}

#[test]
fn test_reset_may_be_called_repeatedly() {
    let mut memory = Memory::new();
    let mut cpu = Cpu::new();

    cpu.reset(&mut memory);
    memory.write(0x0042, 0x37);
    cpu.reset(&mut memory);

    assert_eq!(memory.read(0x0042), 0x00);
}

#[test]
fn test_builder_overrides_only_named_state() {
    let cpu = Cpu::builder().x(0x05).flag_d(true).build();

    assert_eq!(cpu.x(), 0x05);
    assert!(cpu.flag_d());

    // Everything else stays at the reset defaults
    assert_eq!(cpu.pc(), RESET_VECTOR);
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.y(), 0x00);
    assert!(!cpu.flag_c());
}
