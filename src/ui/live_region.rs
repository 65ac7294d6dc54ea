use std::io::{self, Write};

use crossterm::{cursor, terminal, QueueableCommand};

/// Identifies one block of lines written by [`LiveRegion::write_lines`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionHandle {
    generation: u64,
    lines: usize,
}

impl RegionHandle {
    pub(crate) fn new(generation: u64, lines: usize) -> Self {
        Self { generation, lines }
    }

    /// Number of terminal lines the block occupies
    pub fn lines(&self) -> usize {
        self.lines
    }
}

/// A block of lines below the cursor that can be erased and redrawn.
///
/// Lines end in `\r\n` so output is correct in raw mode. Callers keep each
/// line narrower than the terminal; the block is erased by moving the cursor
/// back up by the number of lines written.
#[derive(Debug, Default)]
pub struct LiveRegion {
    generation: u64,
    current: Option<RegionHandle>,
}

impl LiveRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_lines(&mut self, out: &mut impl Write, lines: &[String]) -> io::Result<RegionHandle> {
        for line in lines {
            out.write_all(line.as_bytes())?;
            out.write_all(b"\r\n")?;
        }
        out.flush()?;

        self.generation += 1;
        let handle = RegionHandle::new(self.generation, lines.len());
        self.current = Some(handle);
        Ok(handle)
    }

    /// Erase the block described by `handle`. Only the most recent block can
    /// be erased; anything else is rejected with `InvalidInput`.
    pub fn erase_lines(&mut self, out: &mut impl Write, handle: RegionHandle) -> io::Result<()> {
        if self.current != Some(handle) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "region handle does not match the block on screen",
            ));
        }

        let lines_to_clear = handle.lines.min(u16::MAX as usize) as u16;
        if lines_to_clear > 0 {
            out.queue(cursor::MoveUp(lines_to_clear))?;
        }
        out.queue(cursor::MoveToColumn(0))?;
        out.queue(terminal::Clear(terminal::ClearType::FromCursorDown))?;
        out.flush()?;

        self.current = None;
        Ok(())
    }
}
