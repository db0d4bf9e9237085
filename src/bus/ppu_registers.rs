/*!
CPU-visible PPU register window ($2000-$3FFF, mirrored every 8 bytes).

The register semantics live on the PPU itself; this module's job is the
borrow choreography: split the bus into its PPU, nametable/palette RAM and
cartridge so PPUDATA can reach real memory while the PPU mutates its own
latches.
*/

use super::{Bus, PpuMemView, PpuMemViewMut};

pub(super) fn read(bus: &mut Bus, addr: u16) -> u8 {
    let mode = bus.effective_mirroring();
    let Bus {
        ppu,
        vram,
        cartridge,
        ..
    } = bus;
    let view = PpuMemView {
        vram,
        cart: cartridge.as_ref(),
        mode,
    };
    ppu.read_register(addr, &view)
}

pub(super) fn write(bus: &mut Bus, addr: u16, value: u8) {
    let mode = bus.effective_mirroring();
    let Bus {
        ppu,
        vram,
        cartridge,
        ..
    } = bus;
    let mut view = PpuMemViewMut::new(vram, cartridge.as_ref(), mode);
    ppu.write_register(addr, value, &mut view);
}
