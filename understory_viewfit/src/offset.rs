// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damped offset tracking between a source view and a destination viewport.

use crate::{FitError, ViewOffset, ViewState};

/// Damping used by [`OffsetSession::new`].
///
/// The destination drifts at `1 / DEFAULT_DAMPING` of the rate at which the
/// source drifts away from its baseline.
pub const DEFAULT_DAMPING: f64 = 100.0;

/// Where the source view is relative to its reference region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SyncPhase {
    /// The source shows the reference region; no offset has accumulated.
    #[default]
    Baseline,
    /// The source has moved away from the reference region.
    Tracking,
}

/// Accumulates how far a source view has moved away from a baseline, and
/// derives a loosely-following destination view from it.
///
/// One session belongs to one document/view pair. Construct it when
/// synchronization starts and drop it when it stops; independent documents
/// each get their own session.
///
/// ```rust
/// use kurbo::Point;
/// use understory_viewfit::{OffsetSession, ViewState};
///
/// let mut session = OffsetSession::new();
/// let baseline = ViewState::new(Point::new(0.0, 0.0), 100.0, 50.0);
/// session.reenter_baseline(baseline);
///
/// // The user pans the source view 200 units to the right.
/// let moved = ViewState::new(Point::new(200.0, 0.0), 100.0, 50.0);
/// session.observe(moved);
///
/// // The destination follows at 1/100th of the drift.
/// let target = session.synchronize(&moved).unwrap();
/// assert_eq!(target.center, Point::new(202.0, 0.0));
/// ```
#[derive(Clone, Debug)]
pub struct OffsetSession {
    last: Option<ViewState>,
    offset: ViewOffset,
    damping: f64,
    phase: SyncPhase,
}

impl Default for OffsetSession {
    fn default() -> Self {
        Self::new()
    }
}

impl OffsetSession {
    /// Creates a session with [`DEFAULT_DAMPING`] and no baseline.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: None,
            offset: ViewOffset::ZERO,
            damping: DEFAULT_DAMPING,
            phase: SyncPhase::Baseline,
        }
    }

    /// Creates a session with a custom damping constant.
    ///
    /// `damping` must be finite and strictly positive.
    pub fn with_damping(damping: f64) -> Result<Self, FitError> {
        if !(damping.is_finite() && damping > 0.0) {
            return Err(FitError::InvalidDamping(damping));
        }
        Ok(Self {
            damping,
            ..Self::new()
        })
    }

    /// The damping constant.
    #[must_use]
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// The offset accumulated since the last baseline.
    #[must_use]
    pub fn offset(&self) -> ViewOffset {
        self.offset
    }

    /// The most recently recorded source snapshot.
    #[must_use]
    pub fn last_snapshot(&self) -> Option<ViewState> {
        self.last
    }

    /// Returns `true` once any snapshot has been recorded.
    #[must_use]
    pub fn has_baseline(&self) -> bool {
        self.last.is_some()
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    /// Records a new observation of the source view.
    ///
    /// The first observation becomes the baseline. Every later one adds its
    /// difference from the previous snapshot to the accumulated offset.
    pub fn observe(&mut self, snapshot: ViewState) {
        if let Some(last) = self.last {
            self.offset += snapshot - last;
        }
        self.last = Some(snapshot);
        self.phase = if self.offset.is_zero() {
            SyncPhase::Baseline
        } else {
            SyncPhase::Tracking
        };
    }

    /// Marks `snapshot` as the reference region again, discarding any
    /// accumulated offset.
    pub fn reenter_baseline(&mut self, snapshot: ViewState) {
        self.offset = ViewOffset::ZERO;
        self.last = Some(snapshot);
        self.phase = SyncPhase::Baseline;
    }

    /// Computes the destination view for the given source view.
    ///
    /// Center, width, and height are each offset by `offset / damping`.
    /// Returns [`FitError::NoBaseline`] if nothing has been observed yet;
    /// callers should treat that as "nothing to do". Returns
    /// [`FitError::InvalidView`] if the damped offset would shrink the view
    /// to zero or past it.
    pub fn synchronize(&self, source: &ViewState) -> Result<ViewState, FitError> {
        if self.last.is_none() {
            return Err(FitError::NoBaseline);
        }
        let target = *source + self.offset / self.damping;
        target.validate()?;
        Ok(target)
    }

    /// Forgets the baseline and any accumulated offset.
    pub fn reset(&mut self) {
        self.last = None;
        self.offset = ViewOffset::ZERO;
        self.phase = SyncPhase::Baseline;
    }
}
