//! Host Devices.
//!
//! This module contains the host-side implementations of the device traits:
//! the standard-stream console and the UDP virtual screen.

/// Console bound to stdin/stdout.
pub mod console;

/// UDP virtual screen and the null draw target.
pub mod display;

pub use console::{StdConsole, TokenBuffer};
pub use display::{NullDisplay, UdpDisplay};

pub use crate::soc::traits::{Console, DrawTarget};
