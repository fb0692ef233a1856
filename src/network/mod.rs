//! Network Layer: Fire-and-Forget UDP Transport
//!
//! Encoder hanya bergantung pada capability `send` yang sempit
//! (`Transport` trait); socket options (multicast TTL/loop/interface,
//! send buffer) di-setup sekali oleh caller sebelum loop transmit.
//!
//! Tidak ada retry dan tidak ada receive path: packet loss adalah
//! perilaku yang diterima, bukan error yang harus dipulihkan.

mod transport;

pub use transport::{Transport, UdpTransport};
