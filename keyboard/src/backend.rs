use crate::error::Result;

/// Direction of a key transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyDirection {
    Down,
    Up,
}

/// A single key transition to inject.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub virtual_key: u16,

    pub direction: KeyDirection,

    /// Send with the extended-key flag set.
    /// Used for the dedicated special keys, not for typed characters.
    pub extended: bool,
}

/// Virtual key plus the modifiers the active layout
/// requires to produce a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharScan {
    pub virtual_key: u16,
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
}

/// Seam between the keyboard bookkeeping and the OS input-injection facility.
///
/// The production implementation is [`crate::SendInputBackend`].
/// Tests substitute a recording backend.
pub trait InputBackend {
    /// Inject a single key transition.
    fn send_key(&mut self, event: KeyEvent) -> Result<()>;

    /// Translate a character into the key and modifiers which produce it.
    /// Returns `None` when the active layout can not produce the character.
    fn scan_char(&self, value: char) -> Option<CharScan>;

    /// Current toggle state of a toggle key (e.g. caps lock).
    fn key_toggled(&self, virtual_key: u16) -> bool;
}
