/// Terminal dimensions in columns and rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: u16,
    pub height: u16,
}

impl Default for TerminalSize {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

impl TerminalSize {
    /// Width as a layer's maximum column count.
    pub fn max_width(self) -> usize {
        usize::from(self.width)
    }
}

/// Query the current terminal size, falling back to 80x24.
///
/// A zero-sized report (seen on some detached ptys) is treated as unknown.
pub fn terminal_size() -> TerminalSize {
    match crossterm::terminal::size() {
        Ok((w, h)) if w > 0 && h > 0 => TerminalSize {
            width: w,
            height: h,
        },
        Ok(_) => TerminalSize::default(),
        Err(e) => {
            log::debug!("terminal: size query failed, assuming 80x24: {e}");
            TerminalSize::default()
        }
    }
}
