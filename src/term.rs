use crate::TermInt;
use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal, Result};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, poll, read};

pub struct TermManager {
    stdout: Stdout,
    active: bool,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout(), active: false }
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen, terminal::Clear(ClearType::All))?;
        self.active = true;
        self.set_raw_mode(true)?;
        self.set_cursor_visibility(false)?;
        self.set_cursor_blink(false)
    }

    /// Puts the terminal back the way we found it. Safe to call more than once.
    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        self.set_raw_mode(false)?;
        self.set_cursor_visibility(true)?;
        self.set_cursor_blink(true)?;
        execute!(self.stdout, LeaveAlternateScreen)
    }

    pub fn size(&self) -> Result<(TermInt, TermInt)> {
        terminal::size()
    }

    /// Waits up to `timeout` for the next terminal event.
    pub fn next_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if poll(timeout)? {
            read().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Replaces the screen contents with `frame`, one line per row.
    pub fn draw_frame(&mut self, frame: &str) -> Result<()> {
        let mut rows = 0;

        for (y, line) in frame.lines().enumerate() {
            queue!(
                self.stdout,
                cursor::MoveTo(0, y as TermInt),
                style::Print(line),
                terminal::Clear(ClearType::UntilNewLine)
            )?;
            rows = y + 1;
        }

        // Wipe whatever a previous, taller frame left below
        queue!(self.stdout, cursor::MoveTo(0, rows as TermInt), terminal::Clear(ClearType::FromCursorDown))?;
        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn set_raw_mode(&self, option: bool) -> Result<()> {
        if option {
            terminal::enable_raw_mode()
        } else {
            terminal::disable_raw_mode()
        }
    }

    fn set_cursor_blink(&mut self, option: bool) -> Result<()> {
        if option {
            execute!(self.stdout, cursor::EnableBlinking)
        } else {
            execute!(self.stdout, cursor::DisableBlinking)
        }
    }

    fn set_cursor_visibility(&mut self, option: bool) -> Result<()> {
        if option {
            execute!(self.stdout, cursor::Show)
        } else {
            execute!(self.stdout, cursor::Hide)
        }
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        // Best effort, errors have nowhere to go at this point
        let _ = self.restore();
    }
}
