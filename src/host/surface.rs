use std::io::Write;

use tracing::error;

/// Shows a message to the user
pub trait ErrorSurface {
    fn show_error(&mut self, message: &str);
}

/// Writes `error: <message>` to any writer, stderr by default
pub struct StderrSurface<W: Write = std::io::Stderr> {
    writer: W,
}

impl StderrSurface {
    pub fn new() -> Self {
        Self {
            writer: std::io::stderr(),
        }
    }
}

impl Default for StderrSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> StderrSurface<W> {
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ErrorSurface for StderrSurface<W> {
    fn show_error(&mut self, message: &str) {
        error!(%message, "Invocation aborted");
        writeln!(self.writer, "error: {}", message).unwrap_or_else(|e| {
            error!(%e, "Error writing to the error surface");
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_error() {
        let mut surface = StderrSurface::with_writer(Vec::new());
        surface.show_error("No Git repositories found");

        assert_eq!(
            String::from_utf8(surface.writer).expect("utf8 output"),
            "error: No Git repositories found\n"
        );
    }

    #[test]
    fn test_default_writes_to_stderr() {
        let mut surface = StderrSurface::default();
        surface.show_error("Selected prefix not found.");
    }
}
