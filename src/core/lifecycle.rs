/// Explicit teardown of owned resources (GPU handles, DOM nodes, listeners).
///
/// Implementations must tolerate being called more than once.
pub trait Release {
    fn release(&mut self);
}

/// Where an effect instance is in its life.
#[derive(Debug)]
pub enum Phase<T> {
    /// Waiting for the container to report a non-zero box.
    Pending,
    /// A positive box was seen; resources are being allocated.
    Initializing,
    Running(T),
    Disposed,
}

/// Initialization/disposal state machine shared by the synchronous and the
/// deferred (visibility-triggered) construction paths.
///
/// - `begin_init` succeeds at most once, and only for a positive finite box.
/// - `finish_init` returns the value to the caller when disposal won the race,
///   so the caller can release it on the spot.
/// - `dispose` is idempotent and yields the running value exactly once.
#[derive(Debug)]
pub struct Lifecycle<T> {
    phase: Phase<T>,
}

impl<T: Release> Default for Lifecycle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Release> Lifecycle<T> {
    pub fn new() -> Self {
        Self { phase: Phase::Pending }
    }

    /// Move `Pending -> Initializing` if the box is usable. Returns the box
    /// that initialization should use.
    pub fn begin_init(&mut self, width: f64, height: f64) -> Option<(f64, f64)> {
        if !matches!(self.phase, Phase::Pending) {
            return None;
        }
        let size = positive_box(width, height)?;
        self.phase = Phase::Initializing;
        Some(size)
    }

    /// Install the initialized value. `Err(value)` means the lifecycle is no
    /// longer expecting it (disposed meanwhile).
    pub fn finish_init(&mut self, value: T) -> Result<(), T> {
        match self.phase {
            Phase::Initializing => {
                self.phase = Phase::Running(value);
                Ok(())
            }
            _ => Err(value),
        }
    }

    /// Initialization failed; the instance stays inert until disposed.
    pub fn fail_init(&mut self) {
        if matches!(self.phase, Phase::Initializing) {
            self.phase = Phase::Disposed;
        }
    }

    pub fn running(&self) -> Option<&T> {
        match &self.phase {
            Phase::Running(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending | Phase::Initializing)
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running(_))
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        matches!(self.phase, Phase::Disposed)
    }

    /// Enter `Disposed` and hand back the running value, if any, for teardown.
    pub fn dispose(&mut self) -> Option<T> {
        match std::mem::replace(&mut self.phase, Phase::Disposed) {
            Phase::Running(v) => Some(v),
            _ => None,
        }
    }
}

/// `Some((w, h))` when both sides are finite and strictly positive.
#[inline]
pub fn positive_box(width: f64, height: f64) -> Option<(f64, f64)> {
    (width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0)
        .then_some((width, height))
}
