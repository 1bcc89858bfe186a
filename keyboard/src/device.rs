use std::borrow::Cow;

use crate::{
    backend::{
        InputBackend,
        KeyDirection,
        KeyEvent,
    },
    error::{
        KeyboardError,
        Result,
    },
    keys::SpecialKey,
};

/// Simulated keyboard attached to the current desktop session.
///
/// All input goes to whatever window currently has keyboard focus.
/// The device tracks every key it pressed, so pressing a key twice or
/// releasing a key which has not been pressed is an error.
pub struct Keyboard {
    backend: Box<dyn InputBackend>,
    held_keys: Vec<u16>,
    held_specials: Vec<SpecialKey>,
}

impl Keyboard {
    #[cfg(windows)]
    pub fn new() -> Self {
        Self::with_backend(Box::new(crate::sendinput::SendInputBackend))
    }

    pub fn with_backend(backend: Box<dyn InputBackend>) -> Self {
        Self {
            backend,
            held_keys: Vec::new(),
            held_specials: Vec::new(),
        }
    }

    /// Type a string into the focused window.
    ///
    /// Each character is translated by the active keyboard layout and wrapped
    /// into the modifier transitions it requires. Carriage returns are
    /// skipped. While special keys are held via [`Keyboard::hold`] the text
    /// is lowercased first, as the held modifiers determine the final
    /// characters.
    pub fn type_text(&mut self, text: &str) -> Result<()> {
        let text = if self.held_specials.is_empty() {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(text.to_lowercase())
        };

        self.set_caps_lock(false)?;
        for value in text.chars().filter(|value| *value != '\r') {
            self.type_char(value)?;
        }

        Ok(())
    }

    /// Press and release a special key.
    pub fn press(&mut self, key: SpecialKey) -> Result<()> {
        log::debug!("Press {:?}", key);
        self.press_key(key.virtual_key(), true)
    }

    /// Press a special key and keep it held until [`Keyboard::release`].
    pub fn hold(&mut self, key: SpecialKey) -> Result<()> {
        log::debug!("Hold {:?}", key);
        self.key_down(key.virtual_key(), true)?;
        if !self.held_specials.contains(&key) {
            self.held_specials.push(key);
        }

        Ok(())
    }

    /// Release a special key previously held via [`Keyboard::hold`].
    pub fn release(&mut self, key: SpecialKey) -> Result<()> {
        log::debug!("Release {:?}", key);
        self.key_up(key.virtual_key(), true)?;
        self.held_specials.retain(|held| *held != key);

        Ok(())
    }

    /// Release every special key currently held.
    pub fn release_all(&mut self) -> Result<()> {
        for key in self.held_specials.clone() {
            self.release(key)?;
        }

        Ok(())
    }

    /// Special keys currently held via [`Keyboard::hold`].
    pub fn held_special_keys(&self) -> &[SpecialKey] {
        &self.held_specials
    }

    /// Whether caps lock is currently toggled on.
    pub fn caps_lock_on(&self) -> bool {
        self.backend
            .key_toggled(SpecialKey::CapsLock.virtual_key())
    }

    /// Toggle caps lock into the requested state.
    pub fn set_caps_lock(&mut self, enabled: bool) -> Result<()> {
        if self.caps_lock_on() != enabled {
            self.press(SpecialKey::CapsLock)?;
        }

        Ok(())
    }

    fn type_char(&mut self, value: char) -> Result<()> {
        let scan = self
            .backend
            .scan_char(value)
            .ok_or(KeyboardError::UnmappableCharacter(value))?;

        let modifiers = [
            (scan.shift, SpecialKey::Shift),
            (scan.control, SpecialKey::Control),
            (scan.alt, SpecialKey::Alt),
        ];

        for (required, key) in modifiers {
            if required {
                self.key_down(key.virtual_key(), false)?;
            }
        }
        self.press_key(scan.virtual_key, false)?;
        for (required, key) in modifiers {
            if required {
                self.key_up(key.virtual_key(), false)?;
            }
        }

        Ok(())
    }

    fn press_key(&mut self, virtual_key: u16, extended: bool) -> Result<()> {
        self.key_down(virtual_key, extended)?;
        self.key_up(virtual_key, extended)
    }

    fn key_down(&mut self, virtual_key: u16, extended: bool) -> Result<()> {
        if self.held_keys.contains(&virtual_key) {
            return Err(KeyboardError::KeyAlreadyPressed(virtual_key));
        }

        self.backend.send_key(KeyEvent {
            virtual_key,
            direction: KeyDirection::Down,
            extended,
        })?;
        self.held_keys.push(virtual_key);

        Ok(())
    }

    fn key_up(&mut self, virtual_key: u16, extended: bool) -> Result<()> {
        if !self.held_keys.contains(&virtual_key) {
            return Err(KeyboardError::KeyNotPressed(virtual_key));
        }

        self.backend.send_key(KeyEvent {
            virtual_key,
            direction: KeyDirection::Up,
            extended,
        })?;
        self.held_keys.retain(|held| *held != virtual_key);

        Ok(())
    }
}

#[cfg(windows)]
impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}
