/*!
Machine: the single-owner aggregate and master clock.

Owns the CPU and the bus (which in turn owns the PPU, controller and
cartridge), so no device ever holds a reference to another; all
cross-device traffic flows through `step`.

One `step` executes one CPU cycle followed by three PPU dots. After every
dot the PPU's NMI latch is forwarded to the CPU (consumed at the CPU's
next instruction boundary), and the frame-complete flag rises when the
PPU lands back on (scanline 0, dot 0). The host consumes the flag, or
uses `run_frame`, which steps until it rises and clears it.
*/

use std::path::Path;

use crate::bus::Bus;
use crate::cartridge::{Cartridge, CartridgeError};
use crate::controller::Button;
use crate::cpu::Cpu;
use crate::ppu::{Ppu, HEIGHT, WIDTH};

pub struct Machine {
    pub cpu: Cpu,
    pub bus: Bus,
    frame_done: bool,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

impl Machine {
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            bus: Bus::new(),
            frame_done: false,
        }
    }

    /// Parse and install a ROM, then reset. On a parse error the machine
    /// keeps whatever was loaded before.
    pub fn load_rom(&mut self, bytes: &[u8]) -> Result<(), CartridgeError> {
        let cart = Cartridge::from_ines_bytes(bytes)?;
        log::debug!(
            "loaded cartridge: mapper {}, {} KiB PRG, {} KiB CHR{}",
            cart.mapper_id(),
            cart.prg_rom_len() / 1024,
            cart.chr_len() / 1024,
            if cart.chr_is_ram() { " (RAM)" } else { "" },
        );
        self.bus.attach_cartridge(cart);
        self.reset();
        Ok(())
    }

    pub fn load_rom_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CartridgeError> {
        let cart = Cartridge::from_ines_file(path)?;
        self.bus.attach_cartridge(cart);
        self.reset();
        Ok(())
    }

    /// Reset all devices; the CPU reloads PC from the reset vector.
    pub fn reset(&mut self) {
        self.bus.reset();
        self.cpu.reset(&mut self.bus);
        self.frame_done = false;
    }

    /// One CPU cycle plus three PPU dots, with NMI forwarding and frame
    /// detection after every dot.
    pub fn step(&mut self) {
        self.cpu.tick(&mut self.bus);
        for _ in 0..3 {
            self.bus.step_ppu_dot();
            if self.bus.ppu.take_nmi_pending() {
                self.cpu.request_nmi();
            }
            if self.bus.ppu.scanline() == 0 && self.bus.ppu.dot() == 0 {
                self.frame_done = true;
            }
        }
    }

    /// Step until the current frame completes, then clear the flag.
    pub fn run_frame(&mut self) {
        while !self.frame_done {
            self.step();
        }
        self.frame_done = false;
    }

    #[inline]
    pub fn frame_complete(&self) -> bool {
        self.frame_done
    }

    #[inline]
    pub fn clear_frame_flag(&mut self) {
        self.frame_done = false;
    }

    /// 256x240 frame of 6-bit palette indices.
    #[inline]
    pub fn frame(&self) -> &[u8; WIDTH * HEIGHT] {
        self.bus.ppu.frame()
    }

    // Device accessors for tests and debugging front-ends.

    #[inline]
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    #[inline]
    pub fn ppu(&self) -> &Ppu {
        &self.bus.ppu
    }

    #[inline]
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn press(&mut self, button: Button) {
        self.bus.controller.press(button);
    }

    pub fn release(&mut self, button: Button) {
        self.bus.controller.release(button);
    }
}
