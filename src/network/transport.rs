//! UDP transport untuk IPv4 unicast/multicast datagram.
//!
//! Socket dibangun lewat socket2 supaya SO_REUSEADDR/SO_REUSEPORT bisa
//! di-set sebelum bind; setelah itu socket std yang dipakai di hot path.

use std::io;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4, UdpSocket};

use socket2::{Domain, Protocol, SockRef, Socket, Type};

/// Capability untuk mengirim satu datagram.
///
/// Implementasi harus mengirim persis slice yang diberikan sebagai satu
/// datagram atomik; tidak ada retry, tidak ada interpretasi kegagalan.
pub trait Transport {
    fn send(&self, dest: SocketAddr, buf: &[u8]) -> io::Result<()>;
}

/// IPv4 UDP socket yang sudah bound, blocking, fire-and-forget.
pub struct UdpTransport {
    socket: UdpSocket,
}

impl UdpTransport {
    /// Buka dan bind socket UDP IPv4.
    ///
    /// SO_REUSEADDR dan SO_REUSEPORT (unix) di-set sebelum bind supaya
    /// beacon bisa share port dengan receiver di mesin yang sama.
    pub fn bind(local: SocketAddrV4) -> io::Result<Self> {
        let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))?;
        socket.set_reuse_address(true)?;
        #[cfg(unix)]
        set_reuseport(&socket)?;
        socket.bind(&SocketAddr::V4(local).into())?;

        let socket: UdpSocket = socket.into();
        log::debug!("[UDP] bound to {}", socket.local_addr()?);
        Ok(Self { socket })
    }

    /// Loopback untuk outgoing multicast datagram (IP_MULTICAST_LOOP).
    pub fn set_multicast_loop(&self, enabled: bool) -> io::Result<()> {
        self.socket.set_multicast_loop_v4(enabled)
    }

    /// Interface lokal untuk outgoing multicast (IP_MULTICAST_IF).
    pub fn set_multicast_iface(&self, iface: Ipv4Addr) -> io::Result<()> {
        SockRef::from(&self.socket).set_multicast_if_v4(&iface)
    }

    /// TTL untuk outgoing multicast datagram (IP_MULTICAST_TTL).
    pub fn set_multicast_ttl(&self, ttl: u32) -> io::Result<()> {
        self.socket.set_multicast_ttl_v4(ttl)
    }

    /// Kernel send buffer size (SO_SNDBUF).
    pub fn send_buffer_size(&self) -> io::Result<usize> {
        SockRef::from(&self.socket).send_buffer_size()
    }

    pub fn set_send_buffer_size(&self, size: usize) -> io::Result<()> {
        SockRef::from(&self.socket).set_send_buffer_size(size)
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }
}

impl Transport for UdpTransport {
    fn send(&self, dest: SocketAddr, buf: &[u8]) -> io::Result<()> {
        let sent = self.socket.send_to(buf, dest)?;
        if sent != buf.len() {
            // UDP mengirim utuh atau gagal; short send berarti datagram korup
            log::warn!("[UDP] short send: {} of {} bytes", sent, buf.len());
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "datagram truncated by socket layer",
            ));
        }
        Ok(())
    }
}

/// Set SO_REUSEPORT untuk port sharing antar proses di mesin yang sama.
/// std/socket2 tidak meng-expose ini tanpa feature tambahan.
#[cfg(unix)]
fn set_reuseport(socket: &Socket) -> io::Result<()> {
    use std::os::unix::io::AsRawFd;
    let fd = socket.as_raw_fd();
    let optval: libc::c_int = 1;
    // SAFETY: setsockopt FFI dengan fd valid dan optval berukuran benar
    let ret = unsafe {
        libc::setsockopt(
            fd,
            libc::SOL_SOCKET,
            libc::SO_REUSEPORT,
            &optval as *const _ as *const libc::c_void,
            std::mem::size_of::<libc::c_int>() as libc::socklen_t,
        )
    };
    if ret != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loopback() -> SocketAddrV4 {
        SocketAddrV4::new(Ipv4Addr::LOCALHOST, 0)
    }

    #[test]
    fn test_bind_ephemeral() {
        let transport = UdpTransport::bind(loopback()).unwrap();
        let addr = transport.local_addr().unwrap();
        assert_ne!(addr.port(), 0);
    }

    #[test]
    fn test_send_exact_slice() {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        let dest = receiver.local_addr().unwrap();

        let transport = UdpTransport::bind(loopback()).unwrap();
        let payload = [0x35u8, 0x00, 0x00, 0x1D];
        transport.send(dest, &payload).unwrap();

        let mut buf = [0u8; 64];
        let (n, _) = receiver.recv_from(&mut buf).unwrap();
        assert_eq!(&buf[..n], &payload);
    }

    #[test]
    fn test_multicast_options() {
        let transport = UdpTransport::bind(loopback()).unwrap();
        transport.set_multicast_ttl(1).unwrap();
        transport.set_multicast_loop(false).unwrap();
        assert!(transport.send_buffer_size().unwrap() > 0);
    }
}
