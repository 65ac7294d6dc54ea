//! Terminal port used by the selection prompt.
//!
//! The prompt only needs four things from a terminal: its size, the next
//! input event, and a way to write and later erase a block of lines.
//! [`CrosstermTerminal`] provides them for a real tty; tests use in-memory
//! doubles.

use std::io::{self, Stdout, Write};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::{cursor, terminal, QueueableCommand};
use is_terminal::IsTerminal;

pub use crate::ui::live_region::RegionHandle;
use crate::ui::live_region::LiveRegion;

/// One unit of input delivered to the prompt loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    /// Terminal was resized to (columns, rows)
    Resize(u16, u16),
    /// The input source was interrupted
    Cancel,
    /// No more input will arrive
    EndOfInput,
}

/// Terminal operations the prompt depends on
pub trait Terminal {
    /// Current (columns, rows). `(0, 0)` means unknown.
    fn size(&self) -> (u16, u16);

    /// Block until the next input event
    fn read_event(&mut self) -> io::Result<InputEvent>;

    /// Write a block of lines below the cursor
    fn write_lines(&mut self, lines: &[String]) -> io::Result<RegionHandle>;

    /// Erase exactly the block written under `handle`
    fn erase_lines(&mut self, handle: RegionHandle) -> io::Result<()>;

    /// Prepare for interactive use (raw mode, hidden cursor)
    fn enter(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Undo everything `enter` did
    fn restore(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn size(&self) -> (u16, u16) {
        (**self).size()
    }

    fn read_event(&mut self) -> io::Result<InputEvent> {
        (**self).read_event()
    }

    fn write_lines(&mut self, lines: &[String]) -> io::Result<RegionHandle> {
        (**self).write_lines(lines)
    }

    fn erase_lines(&mut self, handle: RegionHandle) -> io::Result<()> {
        (**self).erase_lines(handle)
    }

    fn enter(&mut self) -> io::Result<()> {
        (**self).enter()
    }

    fn restore(&mut self) -> io::Result<()> {
        (**self).restore()
    }
}

/// Inline terminal backed by crossterm.
///
/// Draws below the current cursor position without switching to the
/// alternate screen.
pub struct CrosstermTerminal<W: Write = Stdout> {
    out: W,
    region: LiveRegion,
    raw_mode: bool,
    cursor_hidden: bool,
}

impl CrosstermTerminal<Stdout> {
    /// Attach to stdin/stdout. Fails when either is not a terminal.
    pub fn stdout() -> io::Result<Self> {
        if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "stdin and stdout must both be a terminal",
            ));
        }
        Ok(Self::new(io::stdout()))
    }
}

impl<W: Write> CrosstermTerminal<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            region: LiveRegion::new(),
            raw_mode: false,
            cursor_hidden: false,
        }
    }
}

impl<W: Write> Terminal for CrosstermTerminal<W> {
    fn size(&self) -> (u16, u16) {
        terminal::size().unwrap_or((0, 0))
    }

    fn read_event(&mut self) -> io::Result<InputEvent> {
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                    return Ok(InputEvent::Key(key));
                }
                Ok(Event::Resize(columns, rows)) => return Ok(InputEvent::Resize(columns, rows)),
                Ok(_) => continue,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => return Ok(InputEvent::Cancel),
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    return Ok(InputEvent::EndOfInput)
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn write_lines(&mut self, lines: &[String]) -> io::Result<RegionHandle> {
        self.region.write_lines(&mut self.out, lines)
    }

    fn erase_lines(&mut self, handle: RegionHandle) -> io::Result<()> {
        self.region.erase_lines(&mut self.out, handle)
    }

    fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.raw_mode = true;
        self.out.queue(cursor::Hide)?;
        self.out.flush()?;
        self.cursor_hidden = true;
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        // Attempt both steps even if the first fails; report the first error.
        let mut result = Ok(());

        if self.cursor_hidden {
            match self.out.queue(cursor::Show).and_then(|out| out.flush()) {
                Ok(()) => self.cursor_hidden = false,
                Err(e) => result = Err(e),
            }
        }

        if self.raw_mode {
            match terminal::disable_raw_mode() {
                Ok(()) => self.raw_mode = false,
                Err(e) => {
                    if result.is_ok() {
                        result = Err(e);
                    }
                }
            }
        }

        result
    }
}

impl<W: Write> Drop for CrosstermTerminal<W> {
    fn drop(&mut self) {
        if self.raw_mode || self.cursor_hidden {
            let _ = self.restore();
        }
    }
}
