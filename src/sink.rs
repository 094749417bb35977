// Frame output boundary

use std::io::{self, Write};

use crossterm::{cursor, execute, terminal};

/// Line-oriented destination for composed dashboard frames.
///
/// One full frame arrives per tick; the sink decides how to place it.
pub trait FrameSink {
    fn present(&mut self, frame: &str) -> io::Result<()>;
}

/// Writes frames to stdout, clearing the screen and homing the cursor first
/// so each tick fully replaces the previous one.
pub struct TerminalSink {
    stdout: io::Stdout,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSink for TerminalSink {
    fn present(&mut self, frame: &str) -> io::Result<()> {
        execute!(
            self.stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        self.stdout.write_all(frame.as_bytes())?;
        self.stdout.flush()
    }
}
