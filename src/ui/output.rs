//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also show machine and seat notes next to exercises.
    Verbose,
    /// Show headers, progress and status.
    #[default]
    Normal,
    /// Show only requested data and errors.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows exercise notes.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows headers, progress and status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
