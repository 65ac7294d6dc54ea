//! In-memory terminal double.

use std::collections::VecDeque;
use std::io;

use treepick::ui::live_region::LiveRegion;
use treepick::{InputEvent, RegionHandle, Terminal};

/// Replays queued events and keeps the lines currently on screen.
///
/// Escape sequences go to a scratch buffer through a real [`LiveRegion`], so
/// stale or double-erased handles are rejected the same way as on a tty.
///
/// The prompt starts on the top row. A line break on the bottom row scrolls
/// the top line into `scrollback`, where cursor-up can no longer reach it.
pub struct ScriptedTerminal {
    events: VecDeque<InputEvent>,
    size: (u16, u16),
    region: LiveRegion,
    sink: Vec<u8>,
    pub screen: Vec<String>,
    pub scrollback: Vec<String>,
    pub frames: Vec<Vec<String>>,
    pub entered: bool,
    pub restored: bool,
    pub fail_restore: bool,
}

impl ScriptedTerminal {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            size: (80, 24),
            region: LiveRegion::new(),
            sink: Vec::new(),
            screen: Vec::new(),
            scrollback: Vec::new(),
            frames: Vec::new(),
            entered: false,
            restored: false,
            fail_restore: false,
        }
    }

    pub fn with_size(mut self, columns: u16, rows: u16) -> Self {
        self.size = (columns, rows);
        self
    }

    pub fn failing_restore(mut self) -> Self {
        self.fail_restore = true;
        self
    }

    pub fn last_frame(&self) -> &[String] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Row carrying the highlight pointer in the last frame
    pub fn highlighted_line(&self) -> Option<&str> {
        self.last_frame()
            .iter()
            .find(|l| l.starts_with('>'))
            .map(String::as_str)
    }
}

impl Terminal for ScriptedTerminal {
    fn size(&self) -> (u16, u16) {
        self.size
    }

    fn read_event(&mut self) -> io::Result<InputEvent> {
        let event = self.events.pop_front().unwrap_or(InputEvent::EndOfInput);
        if let InputEvent::Resize(columns, rows) = event {
            self.size = (columns, rows);
        }
        Ok(event)
    }

    fn write_lines(&mut self, lines: &[String]) -> io::Result<RegionHandle> {
        let handle = self.region.write_lines(&mut self.sink, lines)?;
        let rows = usize::from(self.size.1);
        for line in lines {
            self.screen.push(line.clone());
            // The cursor sits on row `screen.len()` after the line break.
            if rows > 0 && self.screen.len() >= rows {
                self.scrollback.push(self.screen.remove(0));
            }
        }
        self.frames.push(lines.to_vec());
        Ok(handle)
    }

    fn erase_lines(&mut self, handle: RegionHandle) -> io::Result<()> {
        self.region.erase_lines(&mut self.sink, handle)?;
        let keep = self.screen.len().saturating_sub(handle.lines());
        self.screen.truncate(keep);
        Ok(())
    }

    fn enter(&mut self) -> io::Result<()> {
        self.entered = true;
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        if self.fail_restore {
            return Err(io::Error::new(io::ErrorKind::Other, "restore failed"));
        }
        self.restored = true;
        Ok(())
    }
}
