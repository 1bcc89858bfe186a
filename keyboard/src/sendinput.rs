use std::mem;

use windows::Win32::UI::Input::KeyboardAndMouse::{
    GetKeyState,
    SendInput,
    VkKeyScanW,
    INPUT,
    INPUT_KEYBOARD,
    KEYEVENTF_EXTENDEDKEY,
    KEYEVENTF_KEYUP,
    VIRTUAL_KEY,
};

use crate::{
    backend::{
        CharScan,
        InputBackend,
        KeyDirection,
        KeyEvent,
    },
    error::Result,
};

/// Injects key events into the active desktop session via `SendInput`.
///
/// Input goes to the window which currently has keyboard focus.
#[derive(Debug, Default, Clone, Copy)]
pub struct SendInputBackend;

impl InputBackend for SendInputBackend {
    fn send_key(&mut self, event: KeyEvent) -> Result<()> {
        let mut input: INPUT = Default::default();
        input.r#type = INPUT_KEYBOARD;

        let ki = unsafe { &mut input.Anonymous.ki };
        ki.wVk = VIRTUAL_KEY(event.virtual_key);
        if event.direction == KeyDirection::Up {
            ki.dwFlags |= KEYEVENTF_KEYUP;
        }
        if event.extended {
            ki.dwFlags |= KEYEVENTF_EXTENDEDKEY;
        }

        log::trace!("Key {:?} {:#04x}", event.direction, event.virtual_key);
        let sent = unsafe { SendInput(&[input], mem::size_of::<INPUT>() as i32) };
        if sent == 0 {
            return Err(windows::core::Error::from_win32().into());
        }

        Ok(())
    }

    fn scan_char(&self, value: char) -> Option<CharScan> {
        /* VkKeyScanW takes a single UTF-16 code unit */
        let code_unit = u16::try_from(value as u32).ok()?;
        let scan = unsafe { VkKeyScanW(code_unit) };
        if scan == -1 {
            return None;
        }

        let modifiers = (scan >> 8) as u8;
        Some(CharScan {
            virtual_key: (scan & 0xFF) as u16,
            shift: modifiers & 0x01 != 0,
            control: modifiers & 0x02 != 0,
            alt: modifiers & 0x04 != 0,
        })
    }

    fn key_toggled(&self, virtual_key: u16) -> bool {
        let state = unsafe { GetKeyState(virtual_key as i32) };
        state & 0x0001 != 0
    }
}
