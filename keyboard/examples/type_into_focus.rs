#[cfg(windows)]
fn main() -> anyhow::Result<()> {
    use std::{
        thread,
        time::Duration,
    };

    use keyboard::{
        Keyboard,
        SpecialKey,
    };

    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .parse_default_env()
        .init();

    log::info!("Focus the target window, typing starts in 3 seconds");
    thread::sleep(Duration::from_secs(3));

    let mut keyboard = Keyboard::new();
    keyboard.type_text("Hello from the simulated keyboard!")?;
    keyboard.press(SpecialKey::Return)?;

    keyboard.hold(SpecialKey::Shift)?;
    keyboard.type_text("typed while holding shift")?;
    keyboard.release_all()?;
    keyboard.press(SpecialKey::Return)?;

    log::info!("Caps lock on: {}", keyboard.caps_lock_on());
    Ok(())
}

#[cfg(not(windows))]
fn main() {
    eprintln!("this example only runs on Windows");
}
