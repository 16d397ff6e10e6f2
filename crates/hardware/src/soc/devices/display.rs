//! UDP virtual screen.
//!
//! This module sends draw calls to a remote display process over UDP. It provides:
//! 1. **Encoding:** Each rectangle becomes one 7-byte datagram
//!    `{r, g, b, x1, y1, x2, y2}` with exclusive lower-right corner.
//! 2. **Color:** An 8-bit color is expanded from the `RRRGGGBB` layout to
//!    full-range RGB channels.
//! 3. **Transport:** Datagrams are fire-and-forget; a lost or refused packet
//!    is logged at `debug` and never fails the step.
//!
//! [`NullDisplay`] discards every call and stands in when no screen is attached.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

use tracing::debug;

use crate::soc::traits::DrawTarget;

/// Size of one draw datagram in bytes.
pub const PACKET_LEN: usize = 7;

/// Maximum value of the 3-bit red and green fields.
const RG_MAX: u32 = 7;
/// Maximum value of the 2-bit blue field.
const B_MAX: u32 = 3;

/// Expands an `RRRGGGBB` color byte into 8-bit red, green and blue channels.
///
/// # Examples
///
/// ```
/// use mipsim_core::soc::devices::display::rgb332;
///
/// assert_eq!(rgb332(0xFF), (255, 255, 255));
/// assert_eq!(rgb332(0xE0), (255, 0, 0));
/// assert_eq!(rgb332(0x03), (0, 0, 255));
/// ```
pub const fn rgb332(color: u8) -> (u8, u8, u8) {
    let c = color as u32;
    let r = (c >> 5) & RG_MAX;
    let g = (c >> 2) & RG_MAX;
    let b = c & B_MAX;
    (
        (r * 255 / RG_MAX) as u8,
        (g * 255 / RG_MAX) as u8,
        (b * 255 / B_MAX) as u8,
    )
}

/// Encodes one filled rectangle as a draw datagram.
///
/// The lower-right corner (`x + width`, `y + height`) is exclusive and
/// saturates at 255.
pub const fn encode_rect(color: u8, x: u8, y: u8, width: u8, height: u8) -> [u8; PACKET_LEN] {
    let (r, g, b) = rgb332(color);
    [
        r,
        g,
        b,
        x,
        y,
        x.saturating_add(width),
        y.saturating_add(height),
    ]
}

/// Draw target that streams rectangles to a remote display over UDP.
#[derive(Debug)]
pub struct UdpDisplay {
    socket: UdpSocket,
    target: SocketAddr,
    sent: u64,
}

impl UdpDisplay {
    /// Binds an ephemeral local socket that sends to `addr`.
    ///
    /// # Arguments
    ///
    /// * `addr` - Display address, e.g. `"127.0.0.1:9999"`.
    ///
    /// # Errors
    ///
    /// Returns an error if `addr` does not resolve or the local socket cannot be bound.
    pub fn connect(addr: &str) -> io::Result<Self> {
        let target = addr.to_socket_addrs()?.next().ok_or_else(|| {
            io::Error::new(io::ErrorKind::AddrNotAvailable, format!("no address for {addr}"))
        })?;
        let local: SocketAddr = if target.is_ipv4() {
            ([0, 0, 0, 0], 0).into()
        } else {
            ([0u16; 8], 0).into()
        };
        let socket = UdpSocket::bind(local)?;
        debug!(%target, local = ?socket.local_addr().ok(), "display socket bound");
        Ok(Self {
            socket,
            target,
            sent: 0,
        })
    }

    /// Destination address of draw datagrams.
    pub const fn target(&self) -> SocketAddr {
        self.target
    }

    /// Number of datagrams handed to the socket so far.
    pub const fn packets_sent(&self) -> u64 {
        self.sent
    }

    fn send(&mut self, packet: &[u8; PACKET_LEN]) {
        match self.socket.send_to(packet, self.target) {
            Ok(_) => self.sent += 1,
            Err(e) => debug!(target = %self.target, error = %e, "draw packet dropped"),
        }
    }
}

impl DrawTarget for UdpDisplay {
    fn draw_pixel(&mut self, color: u8, x: u8, y: u8) {
        self.send(&encode_rect(color, x, y, 1, 1));
    }

    fn draw_rectangle(&mut self, color: u8, x: u8, y: u8, width: u8, height: u8) {
        self.send(&encode_rect(color, x, y, width, height));
    }

    fn draw_bitmap(&mut self, bitmap: &[u8], x: u8, y: u8, width: u8, height: u8) {
        let w = width as usize;
        let pixels = bitmap.iter().take(w * height as usize);
        for (i, &color) in pixels.enumerate() {
            let (row, col) = (i / w, i % w);
            self.draw_pixel(color, x.wrapping_add(col as u8), y.wrapping_add(row as u8));
        }
    }
}

/// Draw target that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDisplay;

impl DrawTarget for NullDisplay {
    fn draw_pixel(&mut self, _color: u8, _x: u8, _y: u8) {}

    fn draw_rectangle(&mut self, _color: u8, _x: u8, _y: u8, _width: u8, _height: u8) {}

    fn draw_bitmap(&mut self, _bitmap: &[u8], _x: u8, _y: u8, _width: u8, _height: u8) {}
}
