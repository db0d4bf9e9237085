/*!
Bus: the CPU-visible address space and the glue between devices.

Address map (CPU):
- $0000-$1FFF: 2 KiB internal RAM, mirrored every $0800
- $2000-$3FFF: eight PPU registers, mirrored every 8 bytes
- $4014: OAM DMA (write-only)
- $4016: controller 1 (strobe write / serial read)
- $4017: controller 2 serial read (not wired; reads 0)
- $4000-$4013, $4015, $4018-$401F: APU/expansion, open bus (0), writes ignored
- $4020-$FFFF: cartridge via the mapper

The bus also owns the PPU-side nametable/palette RAM (`VideoMem`) and
builds the memory views the PPU renders through: pattern-table accesses
route to the mapper, everything else to `VideoMem` with the cartridge's
effective mirroring.

`read` carries device side effects (PPUSTATUS clears, controller shifts);
`peek` is its side-effect-free twin, used by the CPU when resolving store
addresses and by the OAM DMA copy.

OAM DMA: a write to $4014 copies 256 bytes from CPU page `val << 8` into
PPU OAM through `peek`, then arms a flat 513-cycle stall that the CPU
collects at its next tick.
*/

pub mod video_mem;

mod ppu_registers;

use crate::cartridge::{Cartridge, Mirroring};
use crate::controller::Controller;
use crate::ppu::{Ppu, PpuBus};
use video_mem::VideoMem;

/// Cycles the CPU is stalled by one OAM DMA transfer.
const OAM_DMA_STALL: u32 = 513;

pub struct Bus {
    ram: [u8; 0x0800],
    vram: VideoMem,

    pub ppu: Ppu,
    pub controller: Controller,
    pub cartridge: Option<Cartridge>,

    dma_stall: u32,
    irq_line: bool,
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus {
    pub fn new() -> Self {
        Self {
            ram: [0; 0x0800],
            vram: VideoMem::new(),
            ppu: Ppu::new(),
            controller: Controller::new(),
            cartridge: None,
            dma_stall: 0,
            irq_line: false,
        }
    }

    /// Install a cartridge, replacing any prior one.
    pub fn attach_cartridge(&mut self, cart: Cartridge) {
        self.cartridge = Some(cart);
    }

    pub fn reset(&mut self) {
        self.ram.fill(0);
        self.vram.clear();
        self.ppu.reset();
        self.controller = Controller::new();
        self.dma_stall = 0;
        self.irq_line = false;
        if let Some(cart) = &self.cartridge {
            cart.reset();
        }
    }

    // -------------- CPU-visible interface --------------

    pub fn read(&mut self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x1FFF => self.ram[(addr & 0x07FF) as usize],
            0x2000..=0x3FFF => ppu_registers::read(self, addr),
            0x4014 => 0,
            0x4016 => self.controller.read(),
            0x4017 => 0,
            0x4000..=0x401F => 0,
            0x4020..=0xFFFF => self.cartridge.as_ref().map_or(0, |c| c.cpu_read(addr)),
        }
    }

    /// Side-effect-free read: no PPUSTATUS clear, no controller shift.
    pub fn peek(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x1FFF => self.ram[(addr & 0x07FF) as usize],
            0x2000..=0x3FFF => self.ppu.peek_register(addr),
            0x4016 => self.controller.peek(),
            0x4000..=0x401F => 0,
            0x4020..=0xFFFF => self.cartridge.as_ref().map_or(0, |c| c.cpu_read(addr)),
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram[(addr & 0x07FF) as usize] = value,
            0x2000..=0x3FFF => ppu_registers::write(self, addr, value),
            0x4014 => self.oam_dma(value),
            0x4016 => self.controller.write_strobe(value),
            0x4000..=0x401F => {}
            0x4020..=0xFFFF => {
                if let Some(cart) = &self.cartridge {
                    cart.cpu_write(addr, value);
                }
            }
        }
    }

    /// Little-endian word read (interrupt vectors, indirect pointers).
    pub fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    fn oam_dma(&mut self, page: u8) {
        let base = (page as u16) << 8;
        for i in 0..256u16 {
            let value = self.peek(base + i);
            self.ppu.dma_write(value);
        }
        self.dma_stall += OAM_DMA_STALL;
    }

    /// Hand any armed DMA stall cycles to the CPU (one-shot).
    #[inline]
    pub fn take_dma_stall(&mut self) -> u32 {
        std::mem::take(&mut self.dma_stall)
    }

    #[inline]
    pub fn irq_line(&self) -> bool {
        self.irq_line
    }

    /// Assert or release the maskable interrupt line. Nothing in the core
    /// drives this today (no APU, no IRQ mappers); tests do.
    #[inline]
    pub fn set_irq_line(&mut self, asserted: bool) {
        self.irq_line = asserted;
    }

    // -------------- PPU-side interface --------------

    /// Nametable arrangement currently in force.
    pub fn effective_mirroring(&self) -> Mirroring {
        self.cartridge
            .as_ref()
            .map_or(Mirroring::Horizontal, |c| c.effective_mirroring())
    }

    /// Advance the PPU by one dot against this bus's memory.
    pub fn step_ppu_dot(&mut self) {
        let mode = self.effective_mirroring();
        let Bus {
            ppu,
            vram,
            cartridge,
            ..
        } = self;
        let view = PpuMemView {
            vram,
            cart: cartridge.as_ref(),
            mode,
        };
        ppu.step_dot(&view);
    }

    /// Read PPU address space with full mapping (rendering, tests, tools).
    pub fn ppu_read(&self, addr: u16) -> u8 {
        let a = addr & 0x3FFF;
        match a {
            0x0000..=0x1FFF => self.cartridge.as_ref().map_or(0, |c| c.ppu_read(a)),
            _ => self.vram.read(a, self.effective_mirroring()),
        }
    }

    /// Write PPU address space with full mapping (tests, tools).
    pub fn ppu_write(&mut self, addr: u16, value: u8) {
        let a = addr & 0x3FFF;
        match a {
            0x0000..=0x1FFF => {
                if let Some(cart) = &self.cartridge {
                    cart.ppu_write(a, value);
                }
            }
            _ => {
                let mode = self.effective_mirroring();
                self.vram.write(a, value, mode);
            }
        }
    }
}

/// Read-only PPU memory view used while rendering and for buffered reads.
pub(crate) struct PpuMemView<'a> {
    vram: &'a VideoMem,
    cart: Option<&'a Cartridge>,
    mode: Mirroring,
}

impl PpuBus for PpuMemView<'_> {
    fn ppu_read(&self, addr: u16) -> u8 {
        let a = addr & 0x3FFF;
        match a {
            0x0000..=0x1FFF => self.cart.map_or(0, |c| c.ppu_read(a)),
            _ => self.vram.read(a, self.mode),
        }
    }

    fn ppu_write(&mut self, _addr: u16, _value: u8) {
        // Rendering never writes.
    }
}

/// Mutable PPU memory view for the CPU-driven PPUDATA path.
pub(crate) struct PpuMemViewMut<'a> {
    vram: &'a mut VideoMem,
    cart: Option<&'a Cartridge>,
    mode: Mirroring,
}

impl<'a> PpuMemViewMut<'a> {
    pub(crate) fn new(
        vram: &'a mut VideoMem,
        cart: Option<&'a Cartridge>,
        mode: Mirroring,
    ) -> Self {
        Self { vram, cart, mode }
    }
}

impl PpuBus for PpuMemViewMut<'_> {
    fn ppu_read(&self, addr: u16) -> u8 {
        let a = addr & 0x3FFF;
        match a {
            0x0000..=0x1FFF => self.cart.map_or(0, |c| c.ppu_read(a)),
            _ => self.vram.read(a, self.mode),
        }
    }

    fn ppu_write(&mut self, addr: u16, value: u8) {
        let a = addr & 0x3FFF;
        match a {
            0x0000..=0x1FFF => {
                if let Some(cart) = self.cart {
                    cart.ppu_write(a, value);
                }
            }
            _ => self.vram.write(a, value, self.mode),
        }
    }
}
