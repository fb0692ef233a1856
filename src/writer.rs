//! Encode-and-send glue: satu encoder, satu transport, satu destination.

use std::net::SocketAddr;

use crate::network::Transport;
use crate::protocol::{DltEncoder, LogLevel};
use crate::DltError;

/// DLT beacon writer: setiap `write` membentuk satu packet dan
/// mengirimnya sebagai satu datagram ke destination tetap.
///
/// Counter semantics mengikuti fire-and-forget design: counter sudah
/// naik saat transport error muncul dan tidak di-rollback. Gap di MCNT
/// sequence adalah sinyal loss yang sah untuk observer, bukan bug.
pub struct DltWriter<T: Transport> {
    encoder: DltEncoder,
    transport: T,
    dest: SocketAddr,
}

impl<T: Transport> DltWriter<T> {
    pub fn new(encoder: DltEncoder, transport: T, dest: SocketAddr) -> Self {
        Self {
            encoder,
            transport,
            dest,
        }
    }

    /// Encode message dan transmit dengan default severity.
    pub fn write(&mut self, message: &str) -> Result<(), DltError> {
        let packet = self.encoder.encode(message)?;
        self.transport.send(self.dest, packet)?;
        Ok(())
    }

    /// Encode message dan transmit dengan severity override.
    pub fn write_with_level(&mut self, message: &str, level: LogLevel) -> Result<(), DltError> {
        let packet = self.encoder.encode_with_level(message, level)?;
        self.transport.send(self.dest, packet)?;
        Ok(())
    }

    pub fn encoder(&self) -> &DltEncoder {
        &self.encoder
    }

    pub fn dest(&self) -> SocketAddr {
        self.dest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;
    use std::net::{Ipv4Addr, SocketAddrV4};

    /// Transport yang merekam datagram atau selalu gagal.
    struct MockTransport {
        sent: RefCell<Vec<Vec<u8>>>,
        fail: bool,
    }

    impl MockTransport {
        fn new(fail: bool) -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                fail,
            }
        }
    }

    impl Transport for MockTransport {
        fn send(&self, _dest: SocketAddr, buf: &[u8]) -> io::Result<()> {
            if self.fail {
                return Err(io::Error::new(io::ErrorKind::NotConnected, "socket down"));
            }
            self.sent.borrow_mut().push(buf.to_vec());
            Ok(())
        }
    }

    fn dest() -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 3490))
    }

    #[test]
    fn test_write_hands_exact_packet_to_transport() {
        let encoder = DltEncoder::new("ECU1", "APP1", "CTX1");
        let mut writer = DltWriter::new(encoder, MockTransport::new(false), dest());

        writer.write("hello").unwrap();
        writer.write("world!").unwrap();

        let sent = writer.transport.sent.borrow();
        assert_eq!(sent.len(), 2);
        // LEN field == panjang datagram yang dikirim
        for packet in sent.iter() {
            let len = u16::from_be_bytes([packet[2], packet[3]]) as usize;
            assert_eq!(len, packet.len());
        }
        assert_eq!(sent[0][1], 0); // MCNT
        assert_eq!(sent[1][1], 1);
    }

    #[test]
    fn test_transport_failure_still_advances_counter() {
        let encoder = DltEncoder::new("ECU1", "APP1", "CTX1");
        let mut writer = DltWriter::new(encoder, MockTransport::new(true), dest());

        match writer.write("lost") {
            Err(DltError::Transport(_)) => {}
            other => panic!("expected Transport error, got {:?}", other),
        }
        // Packet terbentuk, counter naik; hanya transmit yang gagal
        assert_eq!(writer.encoder().count(), 1);
    }

    #[test]
    fn test_invalid_length_reported_before_send() {
        let encoder = DltEncoder::new("ECU1", "APP1", "CTX1");
        let mut writer = DltWriter::new(encoder, MockTransport::new(false), dest());

        let too_long = "x".repeat(70_000);
        match writer.write(&too_long) {
            Err(DltError::InvalidLength { .. }) => {}
            other => panic!("expected InvalidLength, got {:?}", other),
        }
        assert_eq!(writer.encoder().count(), 0);
        assert!(writer.transport.sent.borrow().is_empty());
    }
}
