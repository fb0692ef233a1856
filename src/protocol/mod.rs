//! Protocol Layer: DLT Verbose-Mode Packet Encoding
//!
//! Prinsip desain:
//! - Fixed offsets: semua field berada di posisi deterministik
//! - Mixed endianness: standard header big-endian, argument little-endian
//! - No allocation: encode langsung ke pre-allocated buffer

mod cursor;
mod encoder;
pub mod message;

pub use cursor::Cursor;
pub use encoder::DltEncoder;
pub use message::LogLevel;
