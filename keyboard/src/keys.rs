use serde::{
    Deserialize,
    Serialize,
};

/// Special keys addressable by name when driving an application.
///
/// The discriminants are the Windows virtual-key codes.
#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialKey {
    Backspace = 0x08,
    Tab = 0x09,
    Return = 0x0D,
    Shift = 0x10,
    Control = 0x11,
    Alt = 0x12,
    Pause = 0x13,
    CapsLock = 0x14,
    Escape = 0x1B,
    Space = 0x20,
    PageUp = 0x21,
    PageDown = 0x22,
    End = 0x23,
    Home = 0x24,
    Left = 0x25,
    Up = 0x26,
    Right = 0x27,
    Down = 0x28,
    PrintScreen = 0x2C,
    Insert = 0x2D,
    Delete = 0x2E,
    LeftWin = 0x5B,
    RightWin = 0x5C,
    F1 = 0x70,
    F2 = 0x71,
    F3 = 0x72,
    F4 = 0x73,
    F5 = 0x74,
    F6 = 0x75,
    F7 = 0x76,
    F8 = 0x77,
    F9 = 0x78,
    F10 = 0x79,
    F11 = 0x7A,
    F12 = 0x7B,
    NumLock = 0x90,
    ScrollLock = 0x91,
    LeftShift = 0xA0,
    RightShift = 0xA1,
    LeftControl = 0xA2,
    RightControl = 0xA3,
    LeftAlt = 0xA4,
    RightAlt = 0xA5,
}

impl SpecialKey {
    pub fn virtual_key(self) -> u16 {
        self as u16
    }
}

#[cfg(test)]
mod tests {
    use super::SpecialKey;

    #[test]
    fn virtual_key_codes() {
        assert_eq!(SpecialKey::Shift.virtual_key(), 0x10);
        assert_eq!(SpecialKey::CapsLock.virtual_key(), 0x14);
        assert_eq!(SpecialKey::F12.virtual_key(), 0x7B);
        assert_eq!(SpecialKey::RightAlt.virtual_key(), 0xA5);
    }

    #[test]
    fn keys_serialize_by_name() {
        assert_eq!(
            serde_json::to_string(&SpecialKey::CapsLock).unwrap(),
            "\"CapsLock\""
        );
        assert_eq!(
            serde_json::from_str::<SpecialKey>("\"Escape\"").unwrap(),
            SpecialKey::Escape
        );
    }
}
