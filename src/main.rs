//! Headless runner: load a ROM, emulate N frames, report timing and a
//! frame checksum. Useful for smoke-testing the core without a display.

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use ferricom::Machine;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args().skip(1);
    let Some(rom_path) = args.next() else {
        eprintln!("usage: ferricom <rom.nes> [frames]");
        return ExitCode::FAILURE;
    };
    let frames: u32 = match args.next().map(|s| s.parse()) {
        None => 60,
        Some(Ok(n)) => n,
        Some(Err(_)) => {
            eprintln!("frames must be a number");
            return ExitCode::FAILURE;
        }
    };

    let mut machine = Machine::new();
    if let Err(err) = machine.load_rom_file(&rom_path) {
        eprintln!("{rom_path}: {err}");
        return ExitCode::FAILURE;
    }

    let start = Instant::now();
    for _ in 0..frames {
        machine.run_frame();
    }
    let elapsed = start.elapsed();

    // A cheap FNV-1a over the last frame so runs are comparable.
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for &px in machine.frame() {
        hash ^= px as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01B3);
    }

    println!(
        "{frames} frames in {:.2?} ({:.1} fps), cpu cycles {}, frame hash {hash:016x}",
        elapsed,
        frames as f64 / elapsed.as_secs_f64(),
        machine.cpu.total_cycles(),
    );
    ExitCode::SUCCESS
}
