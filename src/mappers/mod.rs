//! Bank-switching mapper implementations beyond NROM.
//!
//! Each board lives in its own file and implements `crate::mapper::Mapper`.

mod cnrom;
mod mmc1;
mod uxrom;

pub use cnrom::Cnrom;
pub use mmc1::Mmc1;
pub use uxrom::Uxrom;
