//! Latest-request-wins overlay replacement.
//!
//! Each map panel owns one [`OverlayController`]. Every user-triggered
//! load bumps the panel's generation counter and captures the new value
//! as the request's identity; loader threads watch the counter between
//! steps and abandon silently once superseded, and the UI applies a
//! result only if its generation is still current. The controller owns
//! the overlay exclusively; replacing it drops the previous value, which
//! for a texture handle releases the GPU allocation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Owns at most one overlay and the generation counter guarding it.
pub struct OverlayController<T> {
    generation: Arc<AtomicU64>,
    overlay: Option<T>,
}

impl<T> Default for OverlayController<T> {
    fn default() -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(0)),
            overlay: None,
        }
    }
}

impl<T> OverlayController<T> {
    /// Start a new load: bump the counter and return the new generation
    /// as this request's identity.
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// The current generation.
    pub fn current(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Is the captured generation still the newest request?
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.current()
    }

    /// Handle loader threads use to re-check staleness between steps.
    pub fn watch(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.generation)
    }

    /// Attach an overlay if its generation is still current.
    ///
    /// Returns `false` (and drops the candidate) when a newer request has
    /// superseded it; the existing overlay stays in place. On success the
    /// previous overlay is replaced wholesale.
    pub fn try_apply(&mut self, generation: u64, overlay: T) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.overlay = Some(overlay);
        true
    }

    /// Drop the overlay and bump the counter so any in-flight load is
    /// superseded as well.
    pub fn clear(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.overlay = None;
    }

    pub fn overlay(&self) -> Option<&T> {
        self.overlay.as_ref()
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }
}

/// True when the captured generation no longer matches the shared
/// counter. Loader threads call this between fetch steps.
pub fn superseded(watch: &AtomicU64, generation: u64) -> bool {
    watch.load(Ordering::SeqCst) != generation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generations_are_monotonic() {
        let ctl: OverlayController<&str> = OverlayController::default();
        let g1 = ctl.begin();
        let g2 = ctl.begin();
        let g3 = ctl.begin();
        assert!(g1 < g2 && g2 < g3);
        assert_eq!(ctl.current(), g3);
    }

    #[test]
    fn stale_result_does_not_attach() {
        let mut ctl = OverlayController::default();
        let g1 = ctl.begin();
        let g2 = ctl.begin();

        // Generation 1 resolves late: rejected, nothing attached.
        assert!(!ctl.try_apply(g1, "old"));
        assert!(!ctl.has_overlay());

        assert!(ctl.try_apply(g2, "new"));
        assert_eq!(ctl.overlay(), Some(&"new"));
    }

    #[test]
    fn rapid_requests_leave_exactly_the_newest() {
        let mut ctl = OverlayController::default();
        let generations: Vec<u64> = (0..5).map(|_| ctl.begin()).collect();

        // All five resolve, oldest-first.
        let mut applied = 0;
        for (i, &g) in generations.iter().enumerate() {
            if ctl.try_apply(g, i) {
                applied += 1;
            }
        }
        assert_eq!(applied, 1);
        assert_eq!(ctl.overlay(), Some(&4));
    }

    #[test]
    fn stale_result_keeps_previous_overlay() {
        let mut ctl = OverlayController::default();
        let g1 = ctl.begin();
        assert!(ctl.try_apply(g1, "first"));

        let g2 = ctl.begin();
        let g3 = ctl.begin();

        // g2 resolves after g3 started: the g1 overlay stays visible.
        assert!(!ctl.try_apply(g2, "second"));
        assert_eq!(ctl.overlay(), Some(&"first"));

        assert!(ctl.try_apply(g3, "third"));
        assert_eq!(ctl.overlay(), Some(&"third"));
    }

    #[test]
    fn clear_supersedes_in_flight_loads() {
        let mut ctl = OverlayController::default();
        let g1 = ctl.begin();
        assert!(ctl.try_apply(g1, "visible"));

        let g2 = ctl.begin();
        ctl.clear();
        assert!(!ctl.has_overlay());

        // The load that was in flight when the user hit Clean.
        assert!(!ctl.try_apply(g2, "zombie"));
        assert!(!ctl.has_overlay());
    }

    #[test]
    fn watch_tracks_the_counter() {
        let ctl: OverlayController<()> = OverlayController::default();
        let watch = ctl.watch();

        let g1 = ctl.begin();
        assert!(!superseded(&watch, g1));

        ctl.begin();
        assert!(superseded(&watch, g1));
    }
}
