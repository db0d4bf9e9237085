/*!
The 256-entry decode table.

Every opcode byte indexes one `Instr` descriptor: mnemonic, addressing
mode, base cycle count, whether a page cross adds a cycle, whether the
opcode is a store (address resolution must peek, not read), and the
action function. The table is a `const`-evaluated static, so decode is a
single array index with no startup cost.

Descriptor constructors encode the three timing families:
- `rd`:  read ops; indexed modes charge the page-cross cycle
- `wr`:  stores; fixed cycles, operand resolution peeks
- `rmw`: read-modify-write; fixed (higher) cycles

Branches are `br` (2 base cycles; the action adds taken/page-cross
cycles itself). Control-flow opcodes that take an address without
dereferencing it (JMP, JSR) are flagged as stores so resolution cannot
touch device registers.

Unassigned entries resolve to the `jam` sink: a logged two-cycle no-op.
*/

use crate::bus::Bus;
use crate::cpu::addressing::AddrMode::{
    self, Abs, AbsX, AbsY, Acc, Imm, Ind, IndX, IndY, Zp, ZpX, ZpY,
};
use crate::cpu::{exec, illegal, Cpu};

#[derive(Copy, Clone)]
pub(crate) struct Instr {
    pub mnemonic: &'static str,
    pub mode: AddrMode,
    pub cycles: u8,
    pub extra_on_cross: bool,
    pub store: bool,
    pub exec: fn(&mut Cpu, &mut Bus),
}

impl Instr {
    const fn new(
        mnemonic: &'static str,
        mode: AddrMode,
        cycles: u8,
        extra_on_cross: bool,
        store: bool,
        exec: fn(&mut Cpu, &mut Bus),
    ) -> Self {
        Self {
            mnemonic,
            mode,
            cycles,
            extra_on_cross,
            store,
            exec,
        }
    }

    const fn rd(mnemonic: &'static str, mode: AddrMode, cycles: u8, exec: fn(&mut Cpu, &mut Bus)) -> Self {
        Self::new(mnemonic, mode, cycles, true, false, exec)
    }

    const fn wr(mnemonic: &'static str, mode: AddrMode, cycles: u8, exec: fn(&mut Cpu, &mut Bus)) -> Self {
        Self::new(mnemonic, mode, cycles, false, true, exec)
    }

    const fn rmw(mnemonic: &'static str, mode: AddrMode, cycles: u8, exec: fn(&mut Cpu, &mut Bus)) -> Self {
        Self::new(mnemonic, mode, cycles, false, false, exec)
    }

    const fn imp(mnemonic: &'static str, cycles: u8, exec: fn(&mut Cpu, &mut Bus)) -> Self {
        Self::new(mnemonic, AddrMode::Implied, cycles, false, false, exec)
    }

    const fn br(mnemonic: &'static str, exec: fn(&mut Cpu, &mut Bus)) -> Self {
        Self::new(mnemonic, AddrMode::Rel, 2, false, false, exec)
    }

    const fn jam() -> Self {
        Self::new("JAM", AddrMode::Implied, 2, false, false, illegal::jam)
    }
}

pub(crate) static INSTRUCTIONS: [Instr; 256] = {
    let mut t = [Instr::jam(); 256];

    // ADC / SBC
    t[0x69] = Instr::rd("ADC", Imm, 2, exec::adc);
    t[0x65] = Instr::rd("ADC", Zp, 3, exec::adc);
    t[0x75] = Instr::rd("ADC", ZpX, 4, exec::adc);
    t[0x6D] = Instr::rd("ADC", Abs, 4, exec::adc);
    t[0x7D] = Instr::rd("ADC", AbsX, 4, exec::adc);
    t[0x79] = Instr::rd("ADC", AbsY, 4, exec::adc);
    t[0x61] = Instr::rd("ADC", IndX, 6, exec::adc);
    t[0x71] = Instr::rd("ADC", IndY, 5, exec::adc);
    t[0xE9] = Instr::rd("SBC", Imm, 2, exec::sbc);
    t[0xE5] = Instr::rd("SBC", Zp, 3, exec::sbc);
    t[0xF5] = Instr::rd("SBC", ZpX, 4, exec::sbc);
    t[0xED] = Instr::rd("SBC", Abs, 4, exec::sbc);
    t[0xFD] = Instr::rd("SBC", AbsX, 4, exec::sbc);
    t[0xF9] = Instr::rd("SBC", AbsY, 4, exec::sbc);
    t[0xE1] = Instr::rd("SBC", IndX, 6, exec::sbc);
    t[0xF1] = Instr::rd("SBC", IndY, 5, exec::sbc);
    t[0xEB] = Instr::rd("SBC", Imm, 2, exec::sbc); // undocumented alias

    // AND / ORA / EOR
    t[0x29] = Instr::rd("AND", Imm, 2, exec::and);
    t[0x25] = Instr::rd("AND", Zp, 3, exec::and);
    t[0x35] = Instr::rd("AND", ZpX, 4, exec::and);
    t[0x2D] = Instr::rd("AND", Abs, 4, exec::and);
    t[0x3D] = Instr::rd("AND", AbsX, 4, exec::and);
    t[0x39] = Instr::rd("AND", AbsY, 4, exec::and);
    t[0x21] = Instr::rd("AND", IndX, 6, exec::and);
    t[0x31] = Instr::rd("AND", IndY, 5, exec::and);
    t[0x09] = Instr::rd("ORA", Imm, 2, exec::ora);
    t[0x05] = Instr::rd("ORA", Zp, 3, exec::ora);
    t[0x15] = Instr::rd("ORA", ZpX, 4, exec::ora);
    t[0x0D] = Instr::rd("ORA", Abs, 4, exec::ora);
    t[0x1D] = Instr::rd("ORA", AbsX, 4, exec::ora);
    t[0x19] = Instr::rd("ORA", AbsY, 4, exec::ora);
    t[0x01] = Instr::rd("ORA", IndX, 6, exec::ora);
    t[0x11] = Instr::rd("ORA", IndY, 5, exec::ora);
    t[0x49] = Instr::rd("EOR", Imm, 2, exec::eor);
    t[0x45] = Instr::rd("EOR", Zp, 3, exec::eor);
    t[0x55] = Instr::rd("EOR", ZpX, 4, exec::eor);
    t[0x4D] = Instr::rd("EOR", Abs, 4, exec::eor);
    t[0x5D] = Instr::rd("EOR", AbsX, 4, exec::eor);
    t[0x59] = Instr::rd("EOR", AbsY, 4, exec::eor);
    t[0x41] = Instr::rd("EOR", IndX, 6, exec::eor);
    t[0x51] = Instr::rd("EOR", IndY, 5, exec::eor);

    // Compares
    t[0xC9] = Instr::rd("CMP", Imm, 2, exec::cmp);
    t[0xC5] = Instr::rd("CMP", Zp, 3, exec::cmp);
    t[0xD5] = Instr::rd("CMP", ZpX, 4, exec::cmp);
    t[0xCD] = Instr::rd("CMP", Abs, 4, exec::cmp);
    t[0xDD] = Instr::rd("CMP", AbsX, 4, exec::cmp);
    t[0xD9] = Instr::rd("CMP", AbsY, 4, exec::cmp);
    t[0xC1] = Instr::rd("CMP", IndX, 6, exec::cmp);
    t[0xD1] = Instr::rd("CMP", IndY, 5, exec::cmp);
    t[0xE0] = Instr::rd("CPX", Imm, 2, exec::cpx);
    t[0xE4] = Instr::rd("CPX", Zp, 3, exec::cpx);
    t[0xEC] = Instr::rd("CPX", Abs, 4, exec::cpx);
    t[0xC0] = Instr::rd("CPY", Imm, 2, exec::cpy);
    t[0xC4] = Instr::rd("CPY", Zp, 3, exec::cpy);
    t[0xCC] = Instr::rd("CPY", Abs, 4, exec::cpy);

    // Shifts / rotates
    t[0x0A] = Instr::rmw("ASL", Acc, 2, exec::asl);
    t[0x06] = Instr::rmw("ASL", Zp, 5, exec::asl);
    t[0x16] = Instr::rmw("ASL", ZpX, 6, exec::asl);
    t[0x0E] = Instr::rmw("ASL", Abs, 6, exec::asl);
    t[0x1E] = Instr::rmw("ASL", AbsX, 7, exec::asl);
    t[0x4A] = Instr::rmw("LSR", Acc, 2, exec::lsr);
    t[0x46] = Instr::rmw("LSR", Zp, 5, exec::lsr);
    t[0x56] = Instr::rmw("LSR", ZpX, 6, exec::lsr);
    t[0x4E] = Instr::rmw("LSR", Abs, 6, exec::lsr);
    t[0x5E] = Instr::rmw("LSR", AbsX, 7, exec::lsr);
    t[0x2A] = Instr::rmw("ROL", Acc, 2, exec::rol);
    t[0x26] = Instr::rmw("ROL", Zp, 5, exec::rol);
    t[0x36] = Instr::rmw("ROL", ZpX, 6, exec::rol);
    t[0x2E] = Instr::rmw("ROL", Abs, 6, exec::rol);
    t[0x3E] = Instr::rmw("ROL", AbsX, 7, exec::rol);
    t[0x6A] = Instr::rmw("ROR", Acc, 2, exec::ror);
    t[0x66] = Instr::rmw("ROR", Zp, 5, exec::ror);
    t[0x76] = Instr::rmw("ROR", ZpX, 6, exec::ror);
    t[0x6E] = Instr::rmw("ROR", Abs, 6, exec::ror);
    t[0x7E] = Instr::rmw("ROR", AbsX, 7, exec::ror);

    // Increments / decrements
    t[0xE8] = Instr::imp("INX", 2, exec::inx);
    t[0xCA] = Instr::imp("DEX", 2, exec::dex);
    t[0xC8] = Instr::imp("INY", 2, exec::iny);
    t[0x88] = Instr::imp("DEY", 2, exec::dey);
    t[0xE6] = Instr::rmw("INC", Zp, 5, exec::inc);
    t[0xF6] = Instr::rmw("INC", ZpX, 6, exec::inc);
    t[0xEE] = Instr::rmw("INC", Abs, 6, exec::inc);
    t[0xFE] = Instr::rmw("INC", AbsX, 7, exec::inc);
    t[0xC6] = Instr::rmw("DEC", Zp, 5, exec::dec);
    t[0xD6] = Instr::rmw("DEC", ZpX, 6, exec::dec);
    t[0xCE] = Instr::rmw("DEC", Abs, 6, exec::dec);
    t[0xDE] = Instr::rmw("DEC", AbsX, 7, exec::dec);

    // Branches
    t[0x90] = Instr::br("BCC", exec::bcc);
    t[0xB0] = Instr::br("BCS", exec::bcs);
    t[0xD0] = Instr::br("BNE", exec::bne);
    t[0xF0] = Instr::br("BEQ", exec::beq);
    t[0x10] = Instr::br("BPL", exec::bpl);
    t[0x30] = Instr::br("BMI", exec::bmi);
    t[0x50] = Instr::br("BVC", exec::bvc);
    t[0x70] = Instr::br("BVS", exec::bvs);

    // BIT
    t[0x24] = Instr::rd("BIT", Zp, 3, exec::bit);
    t[0x2C] = Instr::rd("BIT", Abs, 4, exec::bit);

    // Stack
    t[0x48] = Instr::imp("PHA", 3, exec::pha);
    t[0x08] = Instr::imp("PHP", 3, exec::php);
    t[0x68] = Instr::imp("PLA", 4, exec::pla);
    t[0x28] = Instr::imp("PLP", 4, exec::plp);

    // Control flow; JMP/JSR take the address without dereferencing it.
    t[0x4C] = Instr::wr("JMP", Abs, 3, exec::jmp);
    t[0x6C] = Instr::new("JMP", Ind, 5, false, false, exec::jmp);
    t[0x20] = Instr::wr("JSR", Abs, 6, exec::jsr);
    t[0x60] = Instr::imp("RTS", 6, exec::rts);
    t[0x40] = Instr::imp("RTI", 6, exec::rti);
    t[0x00] = Instr::imp("BRK", 7, exec::brk);

    // Transfers
    t[0xAA] = Instr::imp("TAX", 2, exec::tax);
    t[0x8A] = Instr::imp("TXA", 2, exec::txa);
    t[0xA8] = Instr::imp("TAY", 2, exec::tay);
    t[0x98] = Instr::imp("TYA", 2, exec::tya);
    t[0xBA] = Instr::imp("TSX", 2, exec::tsx);
    t[0x9A] = Instr::imp("TXS", 2, exec::txs);

    // Flag operations
    t[0x18] = Instr::imp("CLC", 2, exec::clc);
    t[0x38] = Instr::imp("SEC", 2, exec::sec);
    t[0x58] = Instr::imp("CLI", 2, exec::cli);
    t[0x78] = Instr::imp("SEI", 2, exec::sei);
    t[0xB8] = Instr::imp("CLV", 2, exec::clv);
    t[0xD8] = Instr::imp("CLD", 2, exec::cld);
    t[0xF8] = Instr::imp("SED", 2, exec::sed);

    // Loads
    t[0xA9] = Instr::rd("LDA", Imm, 2, exec::lda);
    t[0xA5] = Instr::rd("LDA", Zp, 3, exec::lda);
    t[0xB5] = Instr::rd("LDA", ZpX, 4, exec::lda);
    t[0xAD] = Instr::rd("LDA", Abs, 4, exec::lda);
    t[0xBD] = Instr::rd("LDA", AbsX, 4, exec::lda);
    t[0xB9] = Instr::rd("LDA", AbsY, 4, exec::lda);
    t[0xA1] = Instr::rd("LDA", IndX, 6, exec::lda);
    t[0xB1] = Instr::rd("LDA", IndY, 5, exec::lda);
    t[0xA2] = Instr::rd("LDX", Imm, 2, exec::ldx);
    t[0xA6] = Instr::rd("LDX", Zp, 3, exec::ldx);
    t[0xB6] = Instr::rd("LDX", ZpY, 4, exec::ldx);
    t[0xAE] = Instr::rd("LDX", Abs, 4, exec::ldx);
    t[0xBE] = Instr::rd("LDX", AbsY, 4, exec::ldx);
    t[0xA0] = Instr::rd("LDY", Imm, 2, exec::ldy);
    t[0xA4] = Instr::rd("LDY", Zp, 3, exec::ldy);
    t[0xB4] = Instr::rd("LDY", ZpX, 4, exec::ldy);
    t[0xAC] = Instr::rd("LDY", Abs, 4, exec::ldy);
    t[0xBC] = Instr::rd("LDY", AbsX, 4, exec::ldy);

    // Stores
    t[0x85] = Instr::wr("STA", Zp, 3, exec::sta);
    t[0x95] = Instr::wr("STA", ZpX, 4, exec::sta);
    t[0x8D] = Instr::wr("STA", Abs, 4, exec::sta);
    t[0x9D] = Instr::wr("STA", AbsX, 5, exec::sta);
    t[0x99] = Instr::wr("STA", AbsY, 5, exec::sta);
    t[0x81] = Instr::wr("STA", IndX, 6, exec::sta);
    t[0x91] = Instr::wr("STA", IndY, 6, exec::sta);
    t[0x86] = Instr::wr("STX", Zp, 3, exec::stx);
    t[0x96] = Instr::wr("STX", ZpY, 4, exec::stx);
    t[0x8E] = Instr::wr("STX", Abs, 4, exec::stx);
    t[0x84] = Instr::wr("STY", Zp, 3, exec::sty);
    t[0x94] = Instr::wr("STY", ZpX, 4, exec::sty);
    t[0x8C] = Instr::wr("STY", Abs, 4, exec::sty);

    // NOPs (documented and single-byte undocumented)
    t[0xEA] = Instr::imp("NOP", 2, exec::nop);
    t[0x1A] = Instr::imp("NOP", 2, exec::nop);
    t[0x3A] = Instr::imp("NOP", 2, exec::nop);
    t[0x5A] = Instr::imp("NOP", 2, exec::nop);
    t[0x7A] = Instr::imp("NOP", 2, exec::nop);
    t[0xDA] = Instr::imp("NOP", 2, exec::nop);
    t[0xFA] = Instr::imp("NOP", 2, exec::nop);

    // Undocumented: immediate ALU variants
    t[0x0B] = Instr::rd("ANC", Imm, 2, illegal::anc);
    t[0x2B] = Instr::rd("ANC", Imm, 2, illegal::anc);
    t[0x4B] = Instr::rd("ASR", Imm, 2, illegal::asr);
    t[0x6B] = Instr::rd("ARR", Imm, 2, illegal::arr);
    t[0x8B] = Instr::rd("XAA", Imm, 2, illegal::xaa);
    t[0xAB] = Instr::rd("ATX", Imm, 2, illegal::atx);
    t[0xCB] = Instr::rd("AXS", Imm, 2, illegal::axs);

    // Undocumented: RMW + ALU combos
    t[0x07] = Instr::rmw("SLO", Zp, 5, illegal::slo);
    t[0x17] = Instr::rmw("SLO", ZpX, 6, illegal::slo);
    t[0x0F] = Instr::rmw("SLO", Abs, 6, illegal::slo);
    t[0x1F] = Instr::rmw("SLO", AbsX, 7, illegal::slo);
    t[0x1B] = Instr::rmw("SLO", AbsY, 7, illegal::slo);
    t[0x03] = Instr::rmw("SLO", IndX, 8, illegal::slo);
    t[0x13] = Instr::rmw("SLO", IndY, 8, illegal::slo);
    t[0x27] = Instr::rmw("RLA", Zp, 5, illegal::rla);
    t[0x37] = Instr::rmw("RLA", ZpX, 6, illegal::rla);
    t[0x2F] = Instr::rmw("RLA", Abs, 6, illegal::rla);
    t[0x3F] = Instr::rmw("RLA", AbsX, 7, illegal::rla);
    t[0x3B] = Instr::rmw("RLA", AbsY, 7, illegal::rla);
    t[0x23] = Instr::rmw("RLA", IndX, 8, illegal::rla);
    t[0x33] = Instr::rmw("RLA", IndY, 8, illegal::rla);
    t[0x47] = Instr::rmw("SRE", Zp, 5, illegal::sre);
    t[0x57] = Instr::rmw("SRE", ZpX, 6, illegal::sre);
    t[0x4F] = Instr::rmw("SRE", Abs, 6, illegal::sre);
    t[0x5F] = Instr::rmw("SRE", AbsX, 7, illegal::sre);
    t[0x5B] = Instr::rmw("SRE", AbsY, 7, illegal::sre);
    t[0x43] = Instr::rmw("SRE", IndX, 8, illegal::sre);
    t[0x53] = Instr::rmw("SRE", IndY, 8, illegal::sre);
    t[0x67] = Instr::rmw("RRA", Zp, 5, illegal::rra);
    t[0x77] = Instr::rmw("RRA", ZpX, 6, illegal::rra);
    t[0x6F] = Instr::rmw("RRA", Abs, 6, illegal::rra);
    t[0x7F] = Instr::rmw("RRA", AbsX, 7, illegal::rra);
    t[0x7B] = Instr::rmw("RRA", AbsY, 7, illegal::rra);
    t[0x63] = Instr::rmw("RRA", IndX, 8, illegal::rra);
    t[0x73] = Instr::rmw("RRA", IndY, 8, illegal::rra);
    t[0xC7] = Instr::rmw("DCP", Zp, 5, illegal::dcp);
    t[0xD7] = Instr::rmw("DCP", ZpX, 6, illegal::dcp);
    t[0xCF] = Instr::rmw("DCP", Abs, 6, illegal::dcp);
    t[0xDF] = Instr::rmw("DCP", AbsX, 7, illegal::dcp);
    t[0xDB] = Instr::rmw("DCP", AbsY, 7, illegal::dcp);
    t[0xC3] = Instr::rmw("DCP", IndX, 8, illegal::dcp);
    t[0xD3] = Instr::rmw("DCP", IndY, 8, illegal::dcp);
    t[0xE7] = Instr::rmw("ISC", Zp, 5, illegal::isc);
    t[0xF7] = Instr::rmw("ISC", ZpX, 6, illegal::isc);
    t[0xEF] = Instr::rmw("ISC", Abs, 6, illegal::isc);
    t[0xFF] = Instr::rmw("ISC", AbsX, 7, illegal::isc);
    t[0xFB] = Instr::rmw("ISC", AbsY, 7, illegal::isc);
    t[0xE3] = Instr::rmw("ISC", IndX, 8, illegal::isc);
    t[0xF3] = Instr::rmw("ISC", IndY, 8, illegal::isc);

    // Undocumented: loads and stores
    t[0xA7] = Instr::rd("LAX", Zp, 3, illegal::lax);
    t[0xB7] = Instr::rd("LAX", ZpY, 4, illegal::lax);
    t[0xAF] = Instr::rd("LAX", Abs, 4, illegal::lax);
    t[0xBF] = Instr::rd("LAX", AbsY, 4, illegal::lax);
    t[0xA3] = Instr::rd("LAX", IndX, 6, illegal::lax);
    t[0xB3] = Instr::rd("LAX", IndY, 5, illegal::lax);
    t[0x87] = Instr::wr("SAX", Zp, 3, illegal::sax);
    t[0x97] = Instr::wr("SAX", ZpY, 4, illegal::sax);
    t[0x8F] = Instr::wr("SAX", Abs, 4, illegal::sax);
    t[0x83] = Instr::wr("SAX", IndX, 6, illegal::sax);
    t[0xBB] = Instr::rd("LAR", AbsY, 4, illegal::lar);

    // Undocumented: unstable high-byte-masked stores
    t[0x9F] = Instr::wr("AXA", AbsY, 5, illegal::axa);
    t[0x93] = Instr::wr("AXA", IndY, 6, illegal::axa);
    t[0x9B] = Instr::wr("XAS", AbsY, 5, illegal::xas);
    t[0x9E] = Instr::wr("SXA", AbsY, 5, illegal::sxa);
    t[0x9C] = Instr::wr("SYA", AbsX, 5, illegal::sya);

    // Undocumented: multi-byte NOPs (DOP: 2-byte, TOP: 3-byte)
    t[0x04] = Instr::rd("DOP", Zp, 3, illegal::dop);
    t[0x44] = Instr::rd("DOP", Zp, 3, illegal::dop);
    t[0x64] = Instr::rd("DOP", Zp, 3, illegal::dop);
    t[0x14] = Instr::rd("DOP", ZpX, 4, illegal::dop);
    t[0x34] = Instr::rd("DOP", ZpX, 4, illegal::dop);
    t[0x54] = Instr::rd("DOP", ZpX, 4, illegal::dop);
    t[0x74] = Instr::rd("DOP", ZpX, 4, illegal::dop);
    t[0xD4] = Instr::rd("DOP", ZpX, 4, illegal::dop);
    t[0xF4] = Instr::rd("DOP", ZpX, 4, illegal::dop);
    t[0x80] = Instr::rd("DOP", Imm, 2, illegal::dop);
    t[0x82] = Instr::rd("DOP", Imm, 2, illegal::dop);
    t[0x89] = Instr::rd("DOP", Imm, 2, illegal::dop);
    t[0xC2] = Instr::rd("DOP", Imm, 2, illegal::dop);
    t[0xE2] = Instr::rd("DOP", Imm, 2, illegal::dop);
    t[0x0C] = Instr::rd("TOP", Abs, 4, illegal::top);
    t[0x1C] = Instr::rd("TOP", AbsX, 4, illegal::top);
    t[0x3C] = Instr::rd("TOP", AbsX, 4, illegal::top);
    t[0x5C] = Instr::rd("TOP", AbsX, 4, illegal::top);
    t[0x7C] = Instr::rd("TOP", AbsX, 4, illegal::top);
    t[0xDC] = Instr::rd("TOP", AbsX, 4, illegal::top);
    t[0xFC] = Instr::rd("TOP", AbsX, 4, illegal::top);

    t
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_jam_opcodes_remain_unmapped() {
        let jams: Vec<u8> = (0u16..=255)
            .filter(|&op| INSTRUCTIONS[op as usize].mnemonic == "JAM")
            .map(|op| op as u8)
            .collect();
        assert_eq!(
            jams,
            vec![0x02, 0x12, 0x22, 0x32, 0x42, 0x52, 0x62, 0x72, 0x92, 0xB2, 0xD2, 0xF2]
        );
    }

    #[test]
    fn stores_never_charge_page_cross() {
        for instr in INSTRUCTIONS.iter() {
            if instr.store {
                assert!(
                    !instr.extra_on_cross,
                    "{} must not charge a page-cross cycle",
                    instr.mnemonic
                );
            }
        }
    }

    #[test]
    fn known_cycle_budgets() {
        assert_eq!(INSTRUCTIONS[0xA9].cycles, 2); // LDA #
        assert_eq!(INSTRUCTIONS[0x8D].cycles, 4); // STA abs
        assert_eq!(INSTRUCTIONS[0x6C].cycles, 5); // JMP (ind)
        assert_eq!(INSTRUCTIONS[0x00].cycles, 7); // BRK
        assert_eq!(INSTRUCTIONS[0xC3].cycles, 8); // DCP (ind,X)
    }
}
