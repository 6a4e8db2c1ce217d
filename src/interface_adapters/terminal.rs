use crate::domain::{Navigator, Notifier};
use std::io::{self, Stdout, Write};
use std::sync::Mutex;

// Terminal stand-in for page navigation: prints where the user should go.
pub struct TerminalNavigator<W = Stdout> {
    out: Mutex<W>,
}

// Terminal stand-in for a blocking alert: prints the message verbatim.
pub struct TerminalNotifier<W = Stdout> {
    out: Mutex<W>,
}

impl TerminalNavigator<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl TerminalNotifier<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalNavigator<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write> TerminalNotifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> Navigator for TerminalNavigator<W> {
    fn redirect(&self, url: &str) {
        tracing::info!(%url, "redirecting.");
        write_line(&self.out, format_args!("redirect: {url}"));
    }
}

impl<W: Write + Send> Notifier for TerminalNotifier<W> {
    fn alert(&self, message: &str) {
        write_line(&self.out, format_args!("{message}"));
    }
}

// Output failures are reported but never fail the cart operation.
fn write_line<W: Write>(out: &Mutex<W>, line: std::fmt::Arguments<'_>) {
    let mut guard = out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Err(e) = writeln!(guard, "{line}").and_then(|()| guard.flush()) {
        tracing::warn!(error = %e, "failed to write to terminal.");
    }
}
