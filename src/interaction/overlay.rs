use std::fmt;

use thiserror::Error;

/// Duration of the overlay entry and exit animations.
pub const OVERLAY_TRANSITION_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    /// Not rendered.
    #[default]
    Closed,
    /// Entry transition in flight.
    Opening,
    /// Interactive.
    Open,
    /// Exit transition in flight.
    Closing,
}

impl fmt::Display for OverlayPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Closed => "closed",
            Self::Opening => "opening",
            Self::Open => "open",
            Self::Closing => "closing",
        };
        f.write_str(s)
    }
}

/// What an accepted [`Overlay::open`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The entry transition started.
    Opening,
    /// The overlay is still leaving; it reopens with the payload once
    /// [`Overlay::exited`] runs.
    Queued,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayError {
    #[error("overlay is {0}, it must be closed before opening again")]
    Busy(OverlayPhase),
}

/// Open/close lifecycle of a modal overlay presenting the resource `P`.
///
/// Logical state changes immediately; the view reports the end of the entry
/// and exit animations through [`Overlay::entered`] and [`Overlay::exited`].
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay<P> {
    phase: OverlayPhase,
    payload: Option<P>,
    queued: Option<P>,
    tracks_loading: bool,
    loading: bool,
}

impl<P> Default for Overlay<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Overlay<P> {
    /// Overlay whose content is shown as soon as it opens.
    pub fn new() -> Self {
        Self {
            phase: OverlayPhase::Closed,
            payload: None,
            queued: None,
            tracks_loading: false,
            loading: false,
        }
    }

    /// Overlay that hides its embedded content behind a placeholder until
    /// [`Overlay::loaded`] is called.
    pub fn with_loading() -> Self {
        Self {
            tracks_loading: true,
            ..Self::new()
        }
    }

    /// Opens from `Closed`. While `Closing` the payload is queued instead, the
    /// latest request replacing an earlier one.
    pub fn open(&mut self, payload: P) -> Result<OpenOutcome, OverlayError> {
        match self.phase {
            OverlayPhase::Closed => {
                self.begin(payload);
                Ok(OpenOutcome::Opening)
            }
            OverlayPhase::Closing => {
                self.queued = Some(payload);
                Ok(OpenOutcome::Queued)
            }
            OverlayPhase::Opening | OverlayPhase::Open => Err(OverlayError::Busy(self.phase)),
        }
    }

    fn begin(&mut self, payload: P) {
        self.phase = OverlayPhase::Opening;
        self.payload = Some(payload);
        self.loading = self.tracks_loading;
    }

    pub fn entered(&mut self) {
        if self.phase == OverlayPhase::Opening {
            self.phase = OverlayPhase::Open;
        }
    }

    /// Starts the exit transition. Returns false when already closed or closing;
    /// closing again drops a queued reopen.
    pub fn close(&mut self) -> bool {
        match self.phase {
            OverlayPhase::Opening | OverlayPhase::Open => {
                self.phase = OverlayPhase::Closing;
                true
            }
            OverlayPhase::Closing => {
                self.queued = None;
                false
            }
            OverlayPhase::Closed => false,
        }
    }

    /// Ends the exit transition. A queued payload starts a new entry right
    /// away, otherwise the overlay is closed and forgets its payload.
    pub fn exited(&mut self) {
        if self.phase != OverlayPhase::Closing {
            return;
        }
        match self.queued.take() {
            Some(next) => self.begin(next),
            None => {
                self.phase = OverlayPhase::Closed;
                self.payload = None;
                self.loading = false;
            }
        }
    }

    /// Load signal from the embedded resource. Late signals after a close are
    /// dropped.
    pub fn loaded(&mut self) {
        if matches!(self.phase, OverlayPhase::Opening | OverlayPhase::Open) {
            self.loading = false;
        }
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub fn is_rendered(&self) -> bool {
        self.phase != OverlayPhase::Closed
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn shows_placeholder(&self) -> bool {
        self.is_rendered() && self.loading
    }

    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }
}
