//! dltbeacon - Lightweight DLT UDP Beacon
//!
//! Arsitektur:
//! - Zero-Allocation: packet buffer pre-allocated, identity fields ditulis sekali
//! - Binary Protocol: DLT verbose mode, satu string argument per packet
//! - Fire-and-Forget: UDP multicast, packet loss diterima tanpa retry
//!
//! Packet layout (lihat `protocol::message` untuk offset lengkap):
//! ┌──────────────────────────────────────────────────────┐
//! │ Standard Header (12 bytes: HTYP/MCNT/LEN/ECU/TMSP)   │
//! ├──────────────────────────────────────────────────────┤
//! │ Extended Header (10 bytes: MSIN/NOAR/APID/CTID)      │
//! ├──────────────────────────────────────────────────────┤
//! │ String Argument (type-info + len + bytes + NUL)      │
//! └──────────────────────────────────────────────────────┘

pub mod network;
pub mod protocol;
mod writer;

pub use network::{Transport, UdpTransport};
pub use protocol::{DltEncoder, LogLevel};
pub use writer::DltWriter;

use std::fmt;
use std::io;

/// Error dari encode atau transmit satu DLT packet.
#[derive(Debug)]
pub enum DltError {
    /// Packet melebihi 16-bit length field DLT. Counter tidak berubah,
    /// tidak ada partial write.
    InvalidLength { requested: usize, max: usize },
    /// Send gagal di socket layer. Counter sudah naik saat error ini
    /// muncul - downstream melihatnya sebagai datagram yang hilang.
    Transport(io::Error),
}

impl fmt::Display for DltError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { requested, max } => {
                write!(f, "packet length {} exceeds DLT maximum {}", requested, max)
            }
            Self::Transport(e) => write!(f, "transport send failed: {}", e),
        }
    }
}

impl std::error::Error for DltError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e),
            Self::InvalidLength { .. } => None,
        }
    }
}

impl From<io::Error> for DltError {
    fn from(e: io::Error) -> Self {
        Self::Transport(e)
    }
}
