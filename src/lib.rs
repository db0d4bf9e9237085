#![doc = r#"
ferricom: a cycle-accurate NES emulation core.

The crate models the three tightly coupled devices of the NTSC NES (the
2A03 CPU, the dot-pipeline PPU, and the bus with cartridge mapper
dispatch) plus the lockstep clock that advances one CPU cycle per three
PPU dots and surfaces a 256x240 indexed-palette frame each video frame.

Modules:
- cartridge: iNES v1 loader and cartridge metadata; constructs the mapper
- mapper:    Mapper trait and NROM; `mappers` adds MMC1, UxROM, CNROM
- bus:       CPU address decode, RAM, PPU memory, controller, OAM DMA
- cpu:       6502 core with a 256-entry decode table (documented and
             undocumented opcodes) and cycle-accurate pacing
- ppu:       341x262 dot pipeline with loopy scrolling, sprites and NMI
- machine:   single-owner aggregate and master clock
- palette:   the 64-entry system palette for hosts
"#]

pub mod bus;
pub mod cartridge;
pub mod controller;
pub mod cpu;
pub mod machine;
pub mod mapper;
pub mod mappers;
pub mod palette;
pub mod ppu;

pub use bus::Bus;
pub use cartridge::{Cartridge, CartridgeError, Mirroring};
pub use controller::Button;
pub use cpu::Cpu;
pub use machine::Machine;
pub use ppu::Ppu;

// Shared test fixtures (compiled only for tests).
#[cfg(test)]
pub mod test_utils;
