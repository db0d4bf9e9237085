//! Shared test fixtures: minimal iNES image builders and a flat PPU
//! memory fake. Compiled only for tests.
//!
//! iNES header fields used here:
//! - bytes 0..4  = b"NES\x1A"
//! - byte 4      = PRG ROM size in 16 KiB units
//! - byte 5      = CHR ROM size in 8 KiB units (0 => CHR RAM)
//! - byte 6/7    = flags (mirroring, trainer, battery, mapper nibbles)
//!
//! PRG payloads are filled with 0xAA, CHR with 0xCC, so tests can tell
//! the regions apart without authoring full images.

#![allow(dead_code)]

use crate::ppu::PpuBus;

/// Build a minimal iNES (v1) image with pattern-filled PRG/CHR.
pub fn build_ines(
    prg_16k: usize,
    chr_8k: usize,
    flags6: u8,
    flags7: u8,
    trainer: Option<&[u8; 512]>,
) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(
        16 + trainer.map_or(0, |_| 512) + prg_16k * 16 * 1024 + chr_8k * 8 * 1024,
    );

    bytes.extend_from_slice(b"NES\x1A");
    bytes.push(prg_16k as u8);
    bytes.push(chr_8k as u8);
    bytes.push(flags6);
    bytes.push(flags7);
    bytes.extend_from_slice(&[0u8; 8]);

    if let Some(t) = trainer {
        bytes.extend_from_slice(t);
    }
    bytes.extend(std::iter::repeat(0xAA).take(prg_16k * 16 * 1024));
    bytes.extend(std::iter::repeat(0xCC).take(chr_8k * 8 * 1024));
    bytes
}

/// Like `build_ines`, but copies `prg` to the start of the PRG area.
pub fn build_ines_with_prg(
    prg_16k: usize,
    chr_8k: usize,
    flags6: u8,
    flags7: u8,
    prg: &[u8],
) -> Vec<u8> {
    assert!(prg.len() <= prg_16k * 16 * 1024);
    let mut rom = build_ines(prg_16k, chr_8k, flags6, flags7, None);
    rom[16..16 + prg.len()].copy_from_slice(prg);
    rom
}

/// Build an NROM image with `prg` injected into a single 16 KiB bank and
/// the (reset, nmi, irq) vectors installed (all default to $8000).
pub fn build_nrom_with_prg(prg: &[u8], chr_8k: usize, vectors: Option<(u16, u16, u16)>) -> Vec<u8> {
    assert!(prg.len() <= 16 * 1024, "program must fit one PRG bank");
    let mut rom = build_ines(1, chr_8k, 0, 0, None);
    // Zero the bank first so stray 0xAA fill bytes never execute as code.
    rom[16..16 + 16 * 1024].fill(0);
    rom[16..16 + prg.len()].copy_from_slice(prg);

    let (reset, nmi, irq) = vectors.unwrap_or((0x8000, 0x8000, 0x8000));
    set_vectors_in_prg(&mut rom[16..16 + 16 * 1024], reset, nmi, irq);
    rom
}

/// Install NMI/RESET/IRQ vectors at the end of a 16 or 32 KiB PRG slice.
pub fn set_vectors_in_prg(prg: &mut [u8], reset: u16, nmi: u16, irq: u16) {
    let base = match prg.len() {
        0x4000 => 0x3FFA,
        0x8000 => 0x7FFA,
        other => panic!("unsupported PRG length {other}"),
    };
    prg[base] = nmi as u8;
    prg[base + 1] = (nmi >> 8) as u8;
    prg[base + 2] = reset as u8;
    prg[base + 3] = (reset >> 8) as u8;
    prg[base + 4] = irq as u8;
    prg[base + 5] = (irq >> 8) as u8;
}

/// Flat 16 KiB PPU address space with no mirroring, for PPU unit tests
/// that don't need a bus or cartridge.
pub struct FlatVram(pub Box<[u8; 0x4000]>);

impl FlatVram {
    pub fn new() -> Self {
        Self(vec![0u8; 0x4000].into_boxed_slice().try_into().expect("size"))
    }

    pub fn poke(&mut self, addr: u16, value: u8) {
        self.0[(addr & 0x3FFF) as usize] = value;
    }
}

impl Default for FlatVram {
    fn default() -> Self {
        Self::new()
    }
}

impl PpuBus for FlatVram {
    fn ppu_read(&self, addr: u16) -> u8 {
        self.0[(addr & 0x3FFF) as usize]
    }

    fn ppu_write(&mut self, addr: u16, value: u8) {
        self.0[(addr & 0x3FFF) as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_header_and_sizes() {
        let rom = build_ines(2, 1, 0x01, 0x00, None);
        assert_eq!(&rom[0..4], b"NES\x1A");
        assert_eq!(rom[4], 2);
        assert_eq!(rom[5], 1);
        assert_eq!(rom.len(), 16 + 2 * 16 * 1024 + 8 * 1024);
    }

    #[test]
    fn vectors_land_at_bank_end() {
        let mut prg = vec![0u8; 16 * 1024];
        set_vectors_in_prg(&mut prg, 0x8123, 0x8456, 0x8ABC);
        assert_eq!(prg[0x3FFA], 0x56);
        assert_eq!(prg[0x3FFB], 0x84);
        assert_eq!(prg[0x3FFC], 0x23);
        assert_eq!(prg[0x3FFD], 0x81);
        assert_eq!(prg[0x3FFE], 0xBC);
        assert_eq!(prg[0x3FFF], 0x8A);
    }

    #[test]
    fn nrom_builder_installs_default_vectors() {
        let rom = build_nrom_with_prg(&[0xEA], 1, None);
        // RESET low/high at PRG offset 0x3FFC.
        assert_eq!(rom[16 + 0x3FFC], 0x00);
        assert_eq!(rom[16 + 0x3FFD], 0x80);
    }
}
