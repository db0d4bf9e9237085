/*!
Undocumented opcode actions.

The RMW combos (SLO/RLA/SRE/RRA/DCP/ISC) write the shifted value back and
feed the documented ALU half. The unstable stores (AXA, SXA, SYA, XAS)
mask the stored value with the incremented address high byte; their
address-corruption quirks under page cross are not modeled, which keeps
them deterministic. XAA uses the transfer-then-AND reading. Multi-byte
NOPs (DOP/TOP) consume their operand and do nothing.

Truly unmapped opcodes fall into `jam`, which logs and executes as a
two-cycle no-op.
*/

use crate::bus::Bus;
use crate::cpu::exec::{add_to_accumulator, compare, ror_value, subtract_from_accumulator};
use crate::cpu::{Cpu, CARRY, OVERFLOW};

/// SLO: ASL memory, then ORA.
pub(crate) fn slo(cpu: &mut Cpu, bus: &mut Bus) {
    let value = cpu.fetched;
    let shifted = value << 1;
    bus.write(cpu.addr, shifted);
    cpu.set_flag(CARRY, value & 0x80 != 0);
    cpu.a |= shifted;
    cpu.update_zn(cpu.a);
}

/// RLA: ROL memory, then AND.
pub(crate) fn rla(cpu: &mut Cpu, bus: &mut Bus) {
    let value = cpu.fetched;
    let result = (value << 1) | cpu.flag(CARRY) as u8;
    bus.write(cpu.addr, result);
    cpu.set_flag(CARRY, value & 0x80 != 0);
    cpu.a &= result;
    cpu.update_zn(cpu.a);
}

/// SRE: LSR memory, then EOR.
pub(crate) fn sre(cpu: &mut Cpu, bus: &mut Bus) {
    let value = cpu.fetched;
    let shifted = value >> 1;
    bus.write(cpu.addr, shifted);
    cpu.set_flag(CARRY, value & 0x01 != 0);
    cpu.a ^= shifted;
    cpu.update_zn(cpu.a);
}

/// RRA: ROR memory, then ADC.
pub(crate) fn rra(cpu: &mut Cpu, bus: &mut Bus) {
    let value = cpu.fetched;
    let result = ror_value(cpu, value);
    bus.write(cpu.addr, result);
    add_to_accumulator(cpu, result);
}

/// DCP: DEC memory, then CMP.
pub(crate) fn dcp(cpu: &mut Cpu, bus: &mut Bus) {
    let value = cpu.fetched.wrapping_sub(1);
    bus.write(cpu.addr, value);
    let a = cpu.a;
    compare(cpu, a, value);
}

/// ISC (ISB): INC memory, then SBC.
pub(crate) fn isc(cpu: &mut Cpu, bus: &mut Bus) {
    let value = cpu.fetched.wrapping_add(1);
    bus.write(cpu.addr, value);
    cpu.update_zn(value);
    subtract_from_accumulator(cpu, value);
}

/// LAX: load A and X together.
pub(crate) fn lax(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.a = cpu.fetched;
    cpu.x = cpu.fetched;
    cpu.update_zn(cpu.a);
}

/// SAX: store A & X.
pub(crate) fn sax(cpu: &mut Cpu, bus: &mut Bus) {
    bus.write(cpu.addr, cpu.a & cpu.x);
}

/// ANC: AND, then copy the result's sign into carry.
pub(crate) fn anc(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.a &= cpu.fetched;
    cpu.update_zn(cpu.a);
    cpu.set_flag(CARRY, cpu.a & 0x80 != 0);
}

/// ASR (ALR): AND, then LSR A.
pub(crate) fn asr(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.a &= cpu.fetched;
    cpu.set_flag(CARRY, cpu.a & 0x01 != 0);
    cpu.a >>= 1;
    cpu.update_zn(cpu.a);
}

/// ARR: AND, ROR A, then V = bit6 ^ bit5 of the result.
pub(crate) fn arr(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.a &= cpu.fetched;
    let anded = cpu.a;
    cpu.a = ror_value(cpu, anded);
    let bit5 = cpu.a & 0x20 != 0;
    let bit6 = cpu.a & 0x40 != 0;
    cpu.set_flag(OVERFLOW, bit5 ^ bit6);
}

/// ATX (LAX #imm): AND into A, copy to X.
pub(crate) fn atx(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.a &= cpu.fetched;
    cpu.x = cpu.a;
    cpu.update_zn(cpu.x);
}

/// AXS (SBX): AND into A, then X = A - X with CMP-style carry.
pub(crate) fn axs(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.a &= cpu.fetched;
    let result = cpu.a.wrapping_sub(cpu.x);
    cpu.set_flag(CARRY, cpu.a >= cpu.x);
    cpu.update_zn(result);
    cpu.x = result;
}

/// XAA (ANE): transfer A to X, then AND the operand into A.
pub(crate) fn xaa(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.x = cpu.a;
    cpu.a &= cpu.fetched;
    cpu.update_zn(cpu.a);
}

/// LAR (LAS): memory & SP into A, X and SP.
pub(crate) fn lar(cpu: &mut Cpu, _bus: &mut Bus) {
    let value = cpu.fetched & cpu.sp;
    cpu.sp = value;
    cpu.a = value;
    cpu.x = value;
    cpu.update_zn(value);
}

/// AXA (AHX/SHA): store (A & X) masked by the address high byte + 1.
pub(crate) fn axa(cpu: &mut Cpu, bus: &mut Bus) {
    let value = cpu.a & cpu.x;
    let mask = ((cpu.addr >> 8) as u8).wrapping_add(1);
    bus.write(cpu.addr, value & mask);
}

/// XAS (SHS-family store): same masking behavior as AXA.
pub(crate) fn xas(cpu: &mut Cpu, bus: &mut Bus) {
    axa(cpu, bus);
}

/// SXA (SHX): store X at an address whose low byte is replaced by A & X.
pub(crate) fn sxa(cpu: &mut Cpu, bus: &mut Bus) {
    let target = (cpu.addr & 0xFF00) | (cpu.a & cpu.x) as u16;
    bus.write(target, cpu.x);
}

/// SYA (SHY): Y analogue of SXA.
pub(crate) fn sya(cpu: &mut Cpu, bus: &mut Bus) {
    let target = (cpu.addr & 0xFF00) | (cpu.a & cpu.y) as u16;
    bus.write(target, cpu.y);
}

/// DOP/TOP: multi-byte NOPs; the operand fetch already happened.
pub(crate) fn dop(_cpu: &mut Cpu, _bus: &mut Bus) {}

pub(crate) fn top(_cpu: &mut Cpu, _bus: &mut Bus) {}

/// Sink for truly unmapped opcodes: log once per occurrence and move on.
pub(crate) fn jam(cpu: &mut Cpu, _bus: &mut Bus) {
    log::debug!(
        "unmapped opcode {:#04x} at pc {:#06x}",
        cpu.opcode,
        cpu.pc.wrapping_sub(1)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::Cartridge;
    use crate::cpu::ZERO;
    use crate::test_utils::build_nrom_with_prg;

    fn setup(prg: &[u8]) -> (Cpu, Bus) {
        let rom = build_nrom_with_prg(prg, 1, None);
        let cart = Cartridge::from_ines_bytes(&rom).expect("parse");
        let mut bus = Bus::new();
        bus.attach_cartridge(cart);
        let mut cpu = Cpu::new();
        cpu.reset(&mut bus);
        (cpu, bus)
    }

    #[test]
    fn lax_loads_both_registers() {
        let (mut cpu, mut bus) = setup(&[0xA7, 0x10]); // LAX $10
        bus.write(0x0010, 0x5F);
        assert_eq!(cpu.step_instruction(&mut bus), 3);
        assert_eq!(cpu.a, 0x5F);
        assert_eq!(cpu.x, 0x5F);
    }

    #[test]
    fn sax_stores_a_and_x() {
        let (mut cpu, mut bus) = setup(&[0x87, 0x10]); // SAX $10
        cpu.a = 0xF0;
        cpu.x = 0x3C;
        cpu.step_instruction(&mut bus);
        assert_eq!(bus.read(0x0010), 0x30);
    }

    #[test]
    fn dcp_decrements_then_compares() {
        let (mut cpu, mut bus) = setup(&[0xC7, 0x10]); // DCP $10
        bus.write(0x0010, 0x41);
        cpu.a = 0x40;
        assert_eq!(cpu.step_instruction(&mut bus), 5);
        assert_eq!(bus.read(0x0010), 0x40);
        assert!(cpu.flag(ZERO));
        assert!(cpu.flag(CARRY));
    }

    #[test]
    fn isc_increments_then_subtracts() {
        let (mut cpu, mut bus) = setup(&[0x38, 0xE7, 0x10]); // SEC; ISC $10
        bus.write(0x0010, 0x0F);
        cpu.a = 0x20;
        cpu.step_instruction(&mut bus);
        cpu.step_instruction(&mut bus);
        assert_eq!(bus.read(0x0010), 0x10);
        assert_eq!(cpu.a, 0x10);
    }

    #[test]
    fn slo_shifts_and_ors() {
        let (mut cpu, mut bus) = setup(&[0x07, 0x10]); // SLO $10
        bus.write(0x0010, 0x81);
        cpu.a = 0x01;
        cpu.step_instruction(&mut bus);
        assert_eq!(bus.read(0x0010), 0x02);
        assert_eq!(cpu.a, 0x03);
        assert!(cpu.flag(CARRY));
    }

    #[test]
    fn anc_copies_sign_to_carry() {
        let (mut cpu, mut bus) = setup(&[0x0B, 0x80]); // ANC #$80
        cpu.a = 0xC0;
        cpu.step_instruction(&mut bus);
        assert_eq!(cpu.a, 0x80);
        assert!(cpu.flag(CARRY));
    }

    #[test]
    fn dop_consumes_operand_byte() {
        let (mut cpu, mut bus) = setup(&[0x80, 0xFF, 0xE8]); // DOP #imm; INX
        let pc = cpu.pc;
        assert_eq!(cpu.step_instruction(&mut bus), 2);
        assert_eq!(cpu.pc, pc.wrapping_add(2));
        cpu.step_instruction(&mut bus);
        assert_eq!(cpu.x, 1);
    }

    #[test]
    fn top_absolute_consumes_two_operand_bytes() {
        let (mut cpu, mut bus) = setup(&[0x0C, 0x00, 0x02, 0xE8]); // TOP $0200; INX
        let pc = cpu.pc;
        assert_eq!(cpu.step_instruction(&mut bus), 4);
        assert_eq!(cpu.pc, pc.wrapping_add(3));
    }

    #[test]
    fn unmapped_opcode_is_a_two_cycle_no_op() {
        let (mut cpu, mut bus) = setup(&[0x02, 0xE8]); // JAM; INX
        let sp = cpu.sp;
        assert_eq!(cpu.step_instruction(&mut bus), 2);
        assert_eq!(cpu.sp, sp);
        cpu.step_instruction(&mut bus);
        assert_eq!(cpu.x, 1);
    }

    #[test]
    fn unstable_store_masks_with_high_byte() {
        // AXA $1234,Y with Y=0: stores (A & X) & (0x12 + 1).
        let (mut cpu, mut bus) = setup(&[0x9F, 0x34, 0x02]); // AXA $0234,Y
        cpu.a = 0xFF;
        cpu.x = 0x0F;
        cpu.y = 0;
        cpu.step_instruction(&mut bus);
        assert_eq!(bus.read(0x0234), 0x0F & 0x03);
    }
}
