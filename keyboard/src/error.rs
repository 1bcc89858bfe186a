use thiserror::Error;

pub type Result<T> = std::result::Result<T, KeyboardError>;

#[derive(Error, Debug)]
pub enum KeyboardError {
    #[error("key {0:#04x} is already pressed")]
    KeyAlreadyPressed(u16),

    #[error("key {0:#04x} has not been pressed")]
    KeyNotPressed(u16),

    #[error("the active keyboard layout can not produce {0:?}")]
    UnmappableCharacter(char),

    #[cfg(windows)]
    #[error("{0}")]
    WindowsError(#[from] windows::core::Error),
}
