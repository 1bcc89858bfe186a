//! Keyboard input simulation for driving Windows applications under test.
//!
//! The [`Keyboard`] device types text and presses, holds and releases special
//! keys against whatever window currently has focus. Injection goes through
//! the [`InputBackend`] seam; on Windows the default backend wraps `SendInput`.

mod backend;
mod device;
mod error;
mod keys;
#[cfg(windows)]
mod sendinput;

pub use backend::{
    CharScan,
    InputBackend,
    KeyDirection,
    KeyEvent,
};
pub use device::Keyboard;
pub use error::{
    KeyboardError,
    Result,
};
pub use keys::SpecialKey;
#[cfg(windows)]
pub use sendinput::SendInputBackend;
