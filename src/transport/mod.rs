//! Datagram transport seam.
//!
//! Stream transports need nothing beyond [`std::io::Read`] and
//! [`std::io::Write`]. Connectionless sockets additionally need
//! per-datagram addressing, which std exposes as inherent methods rather
//! than a trait. [`DatagramTransport`] names that surface so buffers can
//! drive any datagram socket.
//!
//! - [`DatagramTransport`] - `send`, `send_to`, `recv_from`

use std::io;
use std::net::{SocketAddr, UdpSocket};

/// A socket that moves whole datagrams.
///
/// Implementations issue exactly one system call per method and report
/// short transfers and errors as-is.
pub trait DatagramTransport {
    /// Peer address type.
    type Addr;

    /// Sends `buf` to the connected peer.
    fn send(&self, buf: &[u8]) -> io::Result<usize>;

    /// Sends `buf` to `addr`.
    fn send_to(&self, buf: &[u8], addr: &Self::Addr) -> io::Result<usize>;

    /// Receives one datagram into `buf`, returning its length and sender.
    fn recv_from(&self, buf: &mut [u8]) -> io::Result<(usize, Self::Addr)>;
}

impl DatagramTransport for UdpSocket {
    type Addr = SocketAddr;

    fn send(&self, buf: &[u8]) -> io::Result<usize> {
        UdpSocket::send(self, buf)
    }

    fn send_to(&self, buf: &[u8], addr: &SocketAddr) -> io::Result<usize> {
        UdpSocket::send_to(self, buf, addr)
    }

    fn recv_from(&self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)> {
        UdpSocket::recv_from(self, buf)
    }
}

#[cfg(unix)]
impl DatagramTransport for std::os::unix::net::UnixDatagram {
    /// Kept as the socket address itself so unnamed, pathname and
    /// abstract peers all survive a receive-then-reply round trip.
    type Addr = std::os::unix::net::SocketAddr;

    fn send(&self, buf: &[u8]) -> io::Result<usize> {
        std::os::unix::net::UnixDatagram::send(self, buf)
    }

    fn send_to(&self, buf: &[u8], addr: &Self::Addr) -> io::Result<usize> {
        std::os::unix::net::UnixDatagram::send_to_addr(self, buf, addr)
    }

    fn recv_from(&self, buf: &mut [u8]) -> io::Result<(usize, Self::Addr)> {
        std::os::unix::net::UnixDatagram::recv_from(self, buf)
    }
}

impl<T: DatagramTransport + ?Sized> DatagramTransport for &T {
    type Addr = T::Addr;

    fn send(&self, buf: &[u8]) -> io::Result<usize> {
        (**self).send(buf)
    }

    fn send_to(&self, buf: &[u8], addr: &Self::Addr) -> io::Result<usize> {
        (**self).send_to(buf, addr)
    }

    fn recv_from(&self, buf: &mut [u8]) -> io::Result<(usize, Self::Addr)> {
        (**self).recv_from(buf)
    }
}
