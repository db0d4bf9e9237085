/*!
Cartridge: iNES (v1) loader and mapper construction.

Responsibilities:
- Parse an iNES v1 image from bytes or a file path.
- Extract PRG ROM, CHR (ROM, or an allocated 8 KiB CHR RAM when the header
  declares zero CHR banks), header mirroring, and the mapper ID.
- Construct the concrete mapper (NROM, MMC1, UxROM, CNROM) and own it for
  the lifetime of the cartridge. Unknown mapper IDs fall back to NROM with
  a warning; the image still loads.

Notes:
- iNES 2.0 images are detected and rejected.
- Header mirroring priority: four-screen (flags6 bit 3) overrides the
  horizontal/vertical bit. Single-screen only ever comes from a mapper
  override at runtime, never from the header.
- A 512-byte trainer, when present, is skipped and not retained.
*/

use std::cell::RefCell;
use std::fs;
use std::path::Path;

use crate::mapper::{Mapper, Nrom};
use crate::mappers::{Cnrom, Mmc1, Uxrom};

/// Nametable arrangement used by the bus when folding PPU $2000-$2FFF.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    FourScreen,
    /// All four logical tables select physical table 0. Produced only by
    /// mapper overrides (MMC1), never by the header.
    SingleScreen,
}

/// Failure modes of iNES parsing. The machine keeps its prior cartridge
/// when a load fails.
#[derive(Debug, thiserror::Error)]
pub enum CartridgeError {
    #[error("not an iNES image (bad magic)")]
    BadMagic,
    #[error("image truncated: {0}")]
    Truncated(&'static str),
    #[error("NES 2.0 images are not supported")]
    Ines2Unsupported,
    #[error("failed to read ROM file: {0}")]
    Io(#[from] std::io::Error),
}

const PRG_BANK_SIZE: usize = 16 * 1024;
const CHR_BANK_SIZE: usize = 8 * 1024;
const PRG_RAM_SIZE: usize = 8 * 1024;

pub struct Cartridge {
    // Mapper trait object; interior mutability so the PPU read path can
    // reach bank registers through a shared borrow of the cartridge.
    pub(crate) mapper: RefCell<Box<dyn Mapper>>,

    mapper_id: u8,
    mirroring: Mirroring,
    battery: bool,
    prg_rom_len: usize,
    chr_len: usize,
    chr_is_ram: bool,
}

impl std::fmt::Debug for Cartridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cartridge")
            .field("mapper_id", &self.mapper_id)
            .field("mirroring", &self.mirroring)
            .field("battery", &self.battery)
            .field("prg_rom_len", &self.prg_rom_len)
            .field("chr_len", &self.chr_len)
            .field("chr_is_ram", &self.chr_is_ram)
            .finish()
    }
}

impl Cartridge {
    /// Parse an iNES v1 image and build the mapper.
    pub fn from_ines_bytes(data: &[u8]) -> Result<Self, CartridgeError> {
        if data.len() < 16 {
            return Err(CartridgeError::Truncated("header"));
        }
        if &data[0..4] != b"NES\x1A" {
            return Err(CartridgeError::BadMagic);
        }

        let prg_banks = data[4] as usize;
        let chr_banks = data[5] as usize;
        let flags6 = data[6];
        let flags7 = data[7];

        // NES 2.0 marker lives in flags7 bits 2-3.
        if (flags7 & 0x0C) == 0x08 {
            return Err(CartridgeError::Ines2Unsupported);
        }

        let mirroring = if flags6 & 0x08 != 0 {
            Mirroring::FourScreen
        } else if flags6 & 0x01 != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };
        let battery = flags6 & 0x02 != 0;
        let mapper_id = (flags6 >> 4) | (flags7 & 0xF0);

        let mut offset = 16usize;
        if flags6 & 0x04 != 0 {
            // Optional trainer precedes PRG data.
            if data.len() < offset + 512 {
                return Err(CartridgeError::Truncated("trainer"));
            }
            offset += 512;
        }

        let prg_len = prg_banks * PRG_BANK_SIZE;
        if data.len() < offset + prg_len {
            return Err(CartridgeError::Truncated("PRG ROM"));
        }
        let prg_rom = data[offset..offset + prg_len].to_vec();
        offset += prg_len;

        // Zero CHR banks means the board carries 8 KiB of CHR RAM instead.
        let chr_is_ram = chr_banks == 0;
        let chr = if chr_is_ram {
            vec![0u8; CHR_BANK_SIZE]
        } else {
            let chr_len = chr_banks * CHR_BANK_SIZE;
            if data.len() < offset + chr_len {
                return Err(CartridgeError::Truncated("CHR ROM"));
            }
            data[offset..offset + chr_len].to_vec()
        };
        let chr_len = chr.len();
        let prg_rom_len = prg_rom.len();

        let mapper: Box<dyn Mapper> = match mapper_id {
            0 => Box::new(Nrom::new(prg_rom, chr, chr_is_ram, PRG_RAM_SIZE)),
            1 => Box::new(Mmc1::new(prg_rom, chr, chr_is_ram, PRG_RAM_SIZE)),
            2 => Box::new(Uxrom::new(prg_rom)),
            3 => Box::new(Cnrom::new(prg_rom, chr)),
            other => {
                log::warn!("unsupported mapper {other}; falling back to NROM");
                Box::new(Nrom::new(prg_rom, chr, chr_is_ram, PRG_RAM_SIZE))
            }
        };

        Ok(Self {
            mapper: RefCell::new(mapper),
            mapper_id,
            mirroring,
            battery,
            prg_rom_len,
            chr_len,
            chr_is_ram,
        })
    }

    /// Load a cartridge from an iNES file (.nes).
    pub fn from_ines_file<P: AsRef<Path>>(path: P) -> Result<Self, CartridgeError> {
        let bytes = fs::read(path)?;
        Self::from_ines_bytes(&bytes)
    }

    // -------------- Mapper delegation --------------

    #[inline]
    pub fn cpu_read(&self, addr: u16) -> u8 {
        self.mapper.borrow_mut().cpu_read(addr)
    }

    #[inline]
    pub fn cpu_write(&self, addr: u16, value: u8) {
        self.mapper.borrow_mut().cpu_write(addr, value);
    }

    #[inline]
    pub fn ppu_read(&self, addr: u16) -> u8 {
        self.mapper.borrow().ppu_read(addr)
    }

    #[inline]
    pub fn ppu_write(&self, addr: u16, value: u8) {
        self.mapper.borrow_mut().ppu_write(addr, value);
    }

    pub fn reset(&self) {
        self.mapper.borrow_mut().reset();
    }

    /// Effective nametable arrangement: the mapper override wins except
    /// when the header pins four-screen.
    pub fn effective_mirroring(&self) -> Mirroring {
        if self.mirroring == Mirroring::FourScreen {
            return Mirroring::FourScreen;
        }
        self.mapper.borrow().mirroring().unwrap_or(self.mirroring)
    }

    // -------------- Accessors --------------

    pub fn mapper_id(&self) -> u8 {
        self.mapper_id
    }

    pub fn header_mirroring(&self) -> Mirroring {
        self.mirroring
    }

    pub fn battery_backed(&self) -> bool {
        self.battery
    }

    pub fn prg_rom_len(&self) -> usize {
        self.prg_rom_len
    }

    pub fn chr_len(&self) -> usize {
        self.chr_len
    }

    pub fn chr_is_ram(&self) -> bool {
        self.chr_is_ram
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::build_ines;

    #[test]
    fn parse_nrom_32k_chr8k() {
        let flags6 = 0b0000_0001; // vertical mirroring
        let data = build_ines(2, 1, flags6, 0, None);
        let cart = Cartridge::from_ines_bytes(&data).expect("parse");

        assert_eq!(cart.mapper_id(), 0);
        assert_eq!(cart.header_mirroring(), Mirroring::Vertical);
        assert_eq!(cart.prg_rom_len(), 32 * 1024);
        assert_eq!(cart.chr_len(), 8 * 1024);
        assert!(!cart.chr_is_ram());

        assert_eq!(cart.cpu_read(0x8000), 0xAA);
        assert_eq!(cart.cpu_read(0xFFFF), 0xAA);
    }

    #[test]
    fn zero_chr_banks_allocates_chr_ram() {
        let data = build_ines(1, 0, 0, 0, None);
        let cart = Cartridge::from_ines_bytes(&data).expect("parse");
        assert!(cart.chr_is_ram());
        assert_eq!(cart.chr_len(), 8 * 1024);

        cart.ppu_write(0x0123, 0x5A);
        assert_eq!(cart.ppu_read(0x0123), 0x5A);
    }

    #[test]
    fn four_screen_overrides_vertical_bit() {
        let flags6 = 0b0000_1001; // four-screen + vertical
        let data = build_ines(1, 1, flags6, 0, None);
        let cart = Cartridge::from_ines_bytes(&data).expect("parse");
        assert_eq!(cart.header_mirroring(), Mirroring::FourScreen);
        // Mapper overrides never apply under four-screen.
        assert_eq!(cart.effective_mirroring(), Mirroring::FourScreen);
    }

    #[test]
    fn trainer_moves_prg_offset() {
        let trainer = [0u8; 512];
        let flags6 = 0b0000_0100;
        let data = build_ines(1, 1, flags6, 0, Some(&trainer));
        let cart = Cartridge::from_ines_bytes(&data).expect("parse");
        assert_eq!(cart.cpu_read(0x8000), 0xAA);
    }

    #[test]
    fn bad_magic_rejected() {
        let mut data = build_ines(1, 1, 0, 0, None);
        data[0] = b'X';
        assert!(matches!(
            Cartridge::from_ines_bytes(&data),
            Err(CartridgeError::BadMagic)
        ));
    }

    #[test]
    fn ines2_rejected() {
        let data = build_ines(1, 1, 0, 0b0000_1000, None);
        assert!(matches!(
            Cartridge::from_ines_bytes(&data),
            Err(CartridgeError::Ines2Unsupported)
        ));
    }

    #[test]
    fn truncated_prg_rejected() {
        let mut data = build_ines(2, 1, 0, 0, None);
        data.truncate(16 + 1024);
        assert!(matches!(
            Cartridge::from_ines_bytes(&data),
            Err(CartridgeError::Truncated("PRG ROM"))
        ));
    }

    #[test]
    fn unknown_mapper_falls_back_to_nrom() {
        // Mapper 37: low nibble 5 in flags6, high nibble 2 in flags7.
        let data = build_ines(1, 1, 0x50, 0x20, None);
        let cart = Cartridge::from_ines_bytes(&data).expect("parse");
        assert_eq!(cart.mapper_id(), 37);
        // NROM semantics apply: 16 KiB PRG mirrors into $C000.
        assert_eq!(cart.cpu_read(0x8000), cart.cpu_read(0xC000));
    }
}
