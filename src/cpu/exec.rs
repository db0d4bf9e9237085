/*!
Documented opcode actions.

Each action runs after addressing resolution, so `cpu.addr` holds the
effective address and `cpu.fetched` the operand. Actions that add cycles
beyond the table's base cost (taken branches) bump `cycles_remaining`
directly. Arithmetic ignores the Decimal flag entirely: the 2A03 carries
the flag but not the BCD circuitry.
*/

use crate::bus::Bus;
use crate::cpu::table::INSTRUCTIONS;
use crate::cpu::{
    AddrMode, Cpu, BREAK, CARRY, DECIMAL, IRQ_DISABLE, NEGATIVE, OVERFLOW, UNUSED, ZERO,
};

#[inline]
fn current_mode(cpu: &Cpu) -> AddrMode {
    INSTRUCTIONS[cpu.opcode as usize].mode
}

// -------------- Shared ALU helpers --------------

/// A + value + C with carry/overflow/ZN updates (also serves RRA).
pub(super) fn add_to_accumulator(cpu: &mut Cpu, value: u8) {
    let sum = cpu.a as u16 + value as u16 + cpu.flag(CARRY) as u16;
    let result = sum as u8;
    cpu.set_flag(CARRY, sum > 0xFF);
    cpu.set_flag(
        OVERFLOW,
        (!(cpu.a ^ value) & (cpu.a ^ result) & 0x80) != 0,
    );
    cpu.a = result;
    cpu.update_zn(result);
}

/// A - value - (1 - C), implemented as addition of the complement.
pub(super) fn subtract_from_accumulator(cpu: &mut Cpu, value: u8) {
    add_to_accumulator(cpu, value ^ 0xFF);
}

pub(super) fn compare(cpu: &mut Cpu, register: u8, value: u8) {
    cpu.set_flag(CARRY, register >= value);
    cpu.update_zn(register.wrapping_sub(value));
}

fn branch_if(cpu: &mut Cpu, condition: bool) {
    if condition {
        let crossed = cpu.pc & 0xFF00 != cpu.addr & 0xFF00;
        cpu.cycles_remaining += if crossed { 2 } else { 1 };
        cpu.pc = cpu.addr;
    }
}

// -------------- Loads / stores / transfers --------------

pub(crate) fn lda(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.a = cpu.fetched;
    cpu.update_zn(cpu.a);
}

pub(crate) fn ldx(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.x = cpu.fetched;
    cpu.update_zn(cpu.x);
}

pub(crate) fn ldy(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.y = cpu.fetched;
    cpu.update_zn(cpu.y);
}

pub(crate) fn sta(cpu: &mut Cpu, bus: &mut Bus) {
    bus.write(cpu.addr, cpu.a);
}

pub(crate) fn stx(cpu: &mut Cpu, bus: &mut Bus) {
    bus.write(cpu.addr, cpu.x);
}

pub(crate) fn sty(cpu: &mut Cpu, bus: &mut Bus) {
    bus.write(cpu.addr, cpu.y);
}

pub(crate) fn tax(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.x = cpu.a;
    cpu.update_zn(cpu.x);
}

pub(crate) fn tay(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.y = cpu.a;
    cpu.update_zn(cpu.y);
}

pub(crate) fn txa(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.a = cpu.x;
    cpu.update_zn(cpu.a);
}

pub(crate) fn tya(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.a = cpu.y;
    cpu.update_zn(cpu.a);
}

pub(crate) fn tsx(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.x = cpu.sp;
    cpu.update_zn(cpu.x);
}

pub(crate) fn txs(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.sp = cpu.x;
}

// -------------- Arithmetic / logic --------------

pub(crate) fn adc(cpu: &mut Cpu, _bus: &mut Bus) {
    let value = cpu.fetched;
    add_to_accumulator(cpu, value);
}

pub(crate) fn sbc(cpu: &mut Cpu, _bus: &mut Bus) {
    let value = cpu.fetched;
    subtract_from_accumulator(cpu, value);
}

pub(crate) fn and(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.a &= cpu.fetched;
    cpu.update_zn(cpu.a);
}

pub(crate) fn ora(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.a |= cpu.fetched;
    cpu.update_zn(cpu.a);
}

pub(crate) fn eor(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.a ^= cpu.fetched;
    cpu.update_zn(cpu.a);
}

pub(crate) fn cmp(cpu: &mut Cpu, _bus: &mut Bus) {
    let (register, value) = (cpu.a, cpu.fetched);
    compare(cpu, register, value);
}

pub(crate) fn cpx(cpu: &mut Cpu, _bus: &mut Bus) {
    let (register, value) = (cpu.x, cpu.fetched);
    compare(cpu, register, value);
}

pub(crate) fn cpy(cpu: &mut Cpu, _bus: &mut Bus) {
    let (register, value) = (cpu.y, cpu.fetched);
    compare(cpu, register, value);
}

pub(crate) fn bit(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.set_flag(ZERO, cpu.a & cpu.fetched == 0);
    cpu.set_flag(NEGATIVE, cpu.fetched & 0x80 != 0);
    cpu.set_flag(OVERFLOW, cpu.fetched & 0x40 != 0);
}

// -------------- Shifts / rotates --------------

pub(crate) fn asl(cpu: &mut Cpu, bus: &mut Bus) {
    let acc = current_mode(cpu) == AddrMode::Acc;
    let value = if acc { cpu.a } else { cpu.fetched };
    let result = value << 1;
    cpu.set_flag(CARRY, value & 0x80 != 0);
    cpu.update_zn(result);
    if acc {
        cpu.a = result;
    } else {
        bus.write(cpu.addr, result);
    }
}

pub(crate) fn lsr(cpu: &mut Cpu, bus: &mut Bus) {
    let acc = current_mode(cpu) == AddrMode::Acc;
    let value = if acc { cpu.a } else { cpu.fetched };
    let result = value >> 1;
    cpu.set_flag(CARRY, value & 0x01 != 0);
    cpu.update_zn(result);
    if acc {
        cpu.a = result;
    } else {
        bus.write(cpu.addr, result);
    }
}

pub(crate) fn rol(cpu: &mut Cpu, bus: &mut Bus) {
    let acc = current_mode(cpu) == AddrMode::Acc;
    let value = if acc { cpu.a } else { cpu.fetched };
    let result = (value << 1) | cpu.flag(CARRY) as u8;
    cpu.set_flag(CARRY, value & 0x80 != 0);
    cpu.update_zn(result);
    if acc {
        cpu.a = result;
    } else {
        bus.write(cpu.addr, result);
    }
}

pub(crate) fn ror(cpu: &mut Cpu, bus: &mut Bus) {
    let acc = current_mode(cpu) == AddrMode::Acc;
    let value = if acc { cpu.a } else { cpu.fetched };
    let result = ror_value(cpu, value);
    if acc {
        cpu.a = result;
    } else {
        bus.write(cpu.addr, result);
    }
}

/// ROR with flag updates, shared with ARR.
pub(super) fn ror_value(cpu: &mut Cpu, value: u8) -> u8 {
    let result = (value >> 1) | ((cpu.flag(CARRY) as u8) << 7);
    cpu.set_flag(CARRY, value & 0x01 != 0);
    cpu.update_zn(result);
    result
}

// -------------- Increments / decrements --------------

pub(crate) fn inc(cpu: &mut Cpu, bus: &mut Bus) {
    let value = cpu.fetched.wrapping_add(1);
    bus.write(cpu.addr, value);
    cpu.update_zn(value);
}

pub(crate) fn dec(cpu: &mut Cpu, bus: &mut Bus) {
    let value = cpu.fetched.wrapping_sub(1);
    bus.write(cpu.addr, value);
    cpu.update_zn(value);
}

pub(crate) fn inx(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zn(cpu.x);
}

pub(crate) fn dex(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zn(cpu.x);
}

pub(crate) fn iny(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zn(cpu.y);
}

pub(crate) fn dey(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zn(cpu.y);
}

// -------------- Branches --------------

pub(crate) fn bcc(cpu: &mut Cpu, _bus: &mut Bus) {
    let c = cpu.flag(CARRY);
    branch_if(cpu, !c);
}

pub(crate) fn bcs(cpu: &mut Cpu, _bus: &mut Bus) {
    let c = cpu.flag(CARRY);
    branch_if(cpu, c);
}

pub(crate) fn bne(cpu: &mut Cpu, _bus: &mut Bus) {
    let z = cpu.flag(ZERO);
    branch_if(cpu, !z);
}

pub(crate) fn beq(cpu: &mut Cpu, _bus: &mut Bus) {
    let z = cpu.flag(ZERO);
    branch_if(cpu, z);
}

pub(crate) fn bpl(cpu: &mut Cpu, _bus: &mut Bus) {
    let n = cpu.flag(NEGATIVE);
    branch_if(cpu, !n);
}

pub(crate) fn bmi(cpu: &mut Cpu, _bus: &mut Bus) {
    let n = cpu.flag(NEGATIVE);
    branch_if(cpu, n);
}

pub(crate) fn bvc(cpu: &mut Cpu, _bus: &mut Bus) {
    let v = cpu.flag(OVERFLOW);
    branch_if(cpu, !v);
}

pub(crate) fn bvs(cpu: &mut Cpu, _bus: &mut Bus) {
    let v = cpu.flag(OVERFLOW);
    branch_if(cpu, v);
}

// -------------- Jumps / subroutines / interrupts --------------

pub(crate) fn jmp(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.pc = cpu.addr;
}

pub(crate) fn jsr(cpu: &mut Cpu, bus: &mut Bus) {
    let return_addr = cpu.pc.wrapping_sub(1);
    cpu.push_word(bus, return_addr);
    cpu.pc = cpu.addr;
}

pub(crate) fn rts(cpu: &mut Cpu, bus: &mut Bus) {
    cpu.pc = cpu.pop_word(bus).wrapping_add(1);
}

pub(crate) fn rti(cpu: &mut Cpu, bus: &mut Bus) {
    let pulled = cpu.pop(bus);
    cpu.status = (pulled & !BREAK) | UNUSED;
    cpu.pc = cpu.pop_word(bus);
}

pub(crate) fn brk(cpu: &mut Cpu, bus: &mut Bus) {
    // The byte after BRK is padding; the pushed PC skips it.
    cpu.pc = cpu.pc.wrapping_add(1);
    let pc = cpu.pc;
    cpu.push_word(bus, pc);
    cpu.push(bus, cpu.status | BREAK | UNUSED);
    cpu.set_flag(IRQ_DISABLE, true);
    cpu.pc = bus.read_word(0xFFFE);
}

// -------------- Stack --------------

pub(crate) fn pha(cpu: &mut Cpu, bus: &mut Bus) {
    let a = cpu.a;
    cpu.push(bus, a);
}

pub(crate) fn php(cpu: &mut Cpu, bus: &mut Bus) {
    let status = cpu.status | BREAK | UNUSED;
    cpu.push(bus, status);
}

pub(crate) fn pla(cpu: &mut Cpu, bus: &mut Bus) {
    cpu.a = cpu.pop(bus);
    cpu.update_zn(cpu.a);
}

pub(crate) fn plp(cpu: &mut Cpu, bus: &mut Bus) {
    let pulled = cpu.pop(bus);
    cpu.status = (pulled & !BREAK) | UNUSED;
}

// -------------- Flag operations --------------

pub(crate) fn clc(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.set_flag(CARRY, false);
}

pub(crate) fn sec(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.set_flag(CARRY, true);
}

pub(crate) fn cli(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.set_flag(IRQ_DISABLE, false);
}

pub(crate) fn sei(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.set_flag(IRQ_DISABLE, true);
}

pub(crate) fn clv(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.set_flag(OVERFLOW, false);
}

pub(crate) fn cld(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.set_flag(DECIMAL, false);
}

pub(crate) fn sed(cpu: &mut Cpu, _bus: &mut Bus) {
    cpu.set_flag(DECIMAL, true);
}

pub(crate) fn nop(_cpu: &mut Cpu, _bus: &mut Bus) {}
