//! Ctrl-C outside the line editor's raw mode.
//!
//! With piped stdin, a dumb terminal, or between two reads, Ctrl-C arrives as
//! SIGINT rather than as an interrupted read. The watcher turns it into the
//! same clean farewell and exit status 0.

use std::io::{self, Write};
use std::thread;

use super::INTERRUPTED_GOODBYE;

fn runtime() -> io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Runs `on_interrupt` on a background thread at the first SIGINT.
/// The handler is installed before this returns.
#[cfg(unix)]
pub fn spawn_watcher<F>(on_interrupt: F) -> io::Result<()>
where
    F: FnOnce() + Send + 'static,
{
    use tokio::signal::unix::{signal, SignalKind};

    let rt = runtime()?;
    let mut interrupts = rt.block_on(async { signal(SignalKind::interrupt()) })?;
    thread::Builder::new()
        .name("rawlink-sigint".to_string())
        .spawn(move || {
            if rt.block_on(interrupts.recv()).is_some() {
                on_interrupt();
            }
        })?;
    Ok(())
}

#[cfg(not(unix))]
pub fn spawn_watcher<F>(on_interrupt: F) -> io::Result<()>
where
    F: FnOnce() + Send + 'static,
{
    let rt = runtime()?;
    thread::Builder::new()
        .name("rawlink-sigint".to_string())
        .spawn(move || {
            if rt.block_on(tokio::signal::ctrl_c()).is_ok() {
                on_interrupt();
            }
        })?;
    Ok(())
}

pub fn write_goodbye(out: &mut impl Write) -> io::Result<()> {
    out.write_all(INTERRUPTED_GOODBYE.as_bytes())?;
    out.flush()
}

/// Signal-path farewell; the terminal is still at `^C`, so two line breaks lead it.
pub fn goodbye_and_exit() -> ! {
    tracing::info!("interrupted by SIGINT");
    if let Err(err) = write_goodbye(&mut io::stdout()) {
        tracing::warn!("failed to print farewell: {}", err);
    }
    std::process::exit(0)
}
