//! Drag lifecycle and throttled recomputation.
//!
//! The orchestrator owns the only mutable state of the engine: the latest
//! pending pointer sample and the throttle deadline. The host feeds it
//! samples while a drag is active and calls [`GuidanceOrchestrator::poll`]
//! from its frame or timer loop; once the throttle window has elapsed the
//! next poll runs one guidance pass against the most recent sample only.

use crate::component::{CanvasSource, PointerSample};
use crate::config::GuidanceConfig;
use crate::error::{GuidanceError, Result};
use crate::guidance::{GuidanceResult, compute_guidance};
use std::sync::Arc;

// Use web_time for WASM compatibility
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;
#[cfg(target_arch = "wasm32")]
use web_time::Instant;

/// Observable phase of the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidancePhase {
    /// No drag in progress.
    Idle,
    /// Drag in progress, waiting for samples or for the throttle window.
    Armed,
    /// A guidance pass is running.
    Computing,
}

/// State of one drag, from `drag_start` to `drag_end`.
#[derive(Debug, Clone)]
struct DragSession {
    /// Id of the component being dragged; it never guides itself.
    excluded_id: Option<String>,
    /// Latest sample not yet computed. Newer samples overwrite it.
    pending: Option<PointerSample>,
    /// When the current throttle window closes.
    deadline: Option<Instant>,
}

#[derive(Debug, Clone)]
enum DragState {
    Idle,
    Armed(DragSession),
    Computing,
}

/// Throttling front-end for [`compute_guidance`].
#[derive(Debug)]
pub struct GuidanceOrchestrator {
    config: GuidanceConfig,
    state: DragState,
    result: Arc<GuidanceResult>,
    passes: u64,
}

impl GuidanceOrchestrator {
    /// Create an idle orchestrator with a fixed configuration.
    pub fn new(config: GuidanceConfig) -> Self {
        Self {
            config,
            state: DragState::Idle,
            result: Arc::new(GuidanceResult::cleared()),
            passes: 0,
        }
    }

    pub fn config(&self) -> &GuidanceConfig {
        &self.config
    }

    pub fn phase(&self) -> GuidancePhase {
        match self.state {
            DragState::Idle => GuidancePhase::Idle,
            DragState::Armed(_) => GuidancePhase::Armed,
            DragState::Computing => GuidancePhase::Computing,
        }
    }

    pub fn is_dragging(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    /// The most recently published result.
    pub fn result(&self) -> Arc<GuidanceResult> {
        Arc::clone(&self.result)
    }

    /// Number of guidance passes run so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// When the pending throttle window closes, if one is open.
    ///
    /// Hosts without a frame loop can schedule a wake-up for this instant.
    pub fn next_deadline(&self) -> Option<Instant> {
        match &self.state {
            DragState::Armed(session) => session.deadline,
            _ => None,
        }
    }

    /// Begin a drag of `excluded_id` (or of a new, not yet placed object).
    ///
    /// Clears any previous result.
    pub fn drag_start(&mut self, excluded_id: Option<String>) {
        if self.is_dragging() {
            log::warn!("Drag started while another drag was active; restarting");
        }
        log::debug!("Drag start (excluded: {:?})", excluded_id);
        self.state = DragState::Armed(DragSession {
            excluded_id,
            pending: None,
            deadline: None,
        });
        self.result = Arc::new(GuidanceResult::cleared());
    }

    /// Record a pointer sample.
    ///
    /// Only the latest sample of a throttle window is ever computed. The
    /// window opens with the first sample after a pass and is not extended
    /// by later ones.
    pub fn sample(&mut self, sample: PointerSample, now: Instant) -> Result<()> {
        debug_assert!(self.is_dragging(), "Pointer sample received while no drag is active");
        let DragState::Armed(session) = &mut self.state else {
            log::warn!("Ignoring pointer sample while no drag is active");
            return Err(GuidanceError::NotDragging);
        };
        session.pending = Some(sample);
        if session.deadline.is_none() {
            session.deadline = Some(now + self.config.throttle());
        }
        Ok(())
    }

    /// Fire the throttle timer if its deadline has passed.
    ///
    /// Returns the new result when a pass ran, `None` otherwise. Nothing is
    /// ever computed once the drag has ended.
    pub fn poll<S: CanvasSource + ?Sized>(&mut self, now: Instant, source: &S) -> Option<Arc<GuidanceResult>> {
        let DragState::Armed(session) = &self.state else {
            return None;
        };
        match session.deadline {
            Some(deadline) if now >= deadline => {}
            _ => return None,
        }

        let DragState::Armed(mut session) = std::mem::replace(&mut self.state, DragState::Computing) else {
            return None;
        };
        session.deadline = None;
        let pending = session.pending.take();

        let result = pending.map(|sample| {
            let snapshot = source.snapshot();
            let result = Arc::new(compute_guidance(
                &snapshot,
                &sample,
                session.excluded_id.as_deref(),
                &self.config,
            ));
            self.passes += 1;
            self.result = Arc::clone(&result);
            result
        });

        self.state = DragState::Armed(session);
        result
    }

    /// End the drag, dropping any pending sample and timer.
    ///
    /// Returns the cleared result for the renderer.
    pub fn drag_end(&mut self) -> Arc<GuidanceResult> {
        if let DragState::Armed(session) = &self.state {
            if session.pending.is_some() {
                log::debug!("Drag end discarded a pending sample");
            }
        }
        log::debug!("Drag end after {} passes", self.passes);
        self.state = DragState::Idle;
        self.result = Arc::new(GuidanceResult::cleared());
        Arc::clone(&self.result)
    }
}

impl Default for GuidanceOrchestrator {
    fn default() -> Self {
        Self::new(GuidanceConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{CanvasSnapshot, ComponentDescriptor};
    use crate::snap::CANVAS_SOURCE_ID;
    use kurbo::{Point, Rect, Size};
    use std::cell::Cell;
    use std::time::Duration;

    struct CountingSource {
        snapshot: CanvasSnapshot,
        calls: Cell<usize>,
    }

    impl CanvasSource for CountingSource {
        fn snapshot(&self) -> CanvasSnapshot {
            self.calls.set(self.calls.get() + 1);
            self.snapshot.clone()
        }
    }

    fn source() -> CountingSource {
        CountingSource {
            snapshot: CanvasSnapshot::new(
                vec![ComponentDescriptor::new("a", Rect::new(100.0, 50.0, 300.0, 150.0))],
                Rect::new(0.0, 0.0, 1000.0, 800.0),
            ),
            calls: Cell::new(0),
        }
    }

    fn sample(x: f64, y: f64) -> PointerSample {
        PointerSample::new(Point::new(x, y), Size::new(40.0, 40.0))
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_starts_idle() {
        let orchestrator = GuidanceOrchestrator::default();
        assert_eq!(orchestrator.phase(), GuidancePhase::Idle);
        assert!(orchestrator.result().is_empty());
        assert!(orchestrator.next_deadline().is_none());
    }

    #[test]
    fn test_single_sample_runs_after_throttle() {
        let source = source();
        let mut orchestrator = GuidanceOrchestrator::default();
        let t0 = Instant::now();
        orchestrator.drag_start(Some("dragged".to_string()));
        assert_eq!(orchestrator.phase(), GuidancePhase::Armed);

        orchestrator.sample(sample(206.0, 100.0), t0).unwrap();
        assert_eq!(orchestrator.next_deadline(), Some(t0 + ms(16)));
        assert!(orchestrator.poll(t0 + ms(15), &source).is_none());

        let result = orchestrator.poll(t0 + ms(16), &source).unwrap();
        assert_eq!(result.snap_candidates[0].source_id, "a");
        assert_eq!(orchestrator.passes(), 1);
        assert_eq!(source.calls.get(), 1);
        assert_eq!(orchestrator.phase(), GuidancePhase::Armed);
        assert!(Arc::ptr_eq(&result, &orchestrator.result()));
        assert!(orchestrator.next_deadline().is_none());
    }

    #[test]
    fn test_samples_in_one_window_coalesce() {
        let source = source();
        let mut orchestrator = GuidanceOrchestrator::default();
        let t0 = Instant::now();
        orchestrator.drag_start(None);

        orchestrator.sample(sample(206.0, 100.0), t0).unwrap();
        orchestrator.sample(sample(996.0, 700.0), t0 + ms(5)).unwrap();
        // The second sample does not push the window out.
        assert_eq!(orchestrator.next_deadline(), Some(t0 + ms(16)));

        let result = orchestrator.poll(t0 + ms(16), &source).unwrap();
        assert_eq!(orchestrator.passes(), 1);
        assert!(!result.snap_candidates.is_empty());
        assert!(result.snap_candidates.iter().all(|c| c.source_id == CANVAS_SOURCE_ID));

        assert!(orchestrator.poll(t0 + ms(40), &source).is_none());
        assert_eq!(orchestrator.passes(), 1);
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn test_next_window_opens_with_next_sample() {
        let source = source();
        let mut orchestrator = GuidanceOrchestrator::default();
        let t0 = Instant::now();
        orchestrator.drag_start(None);

        orchestrator.sample(sample(206.0, 100.0), t0).unwrap();
        assert!(orchestrator.poll(t0 + ms(16), &source).is_some());

        orchestrator.sample(sample(210.0, 100.0), t0 + ms(30)).unwrap();
        assert_eq!(orchestrator.next_deadline(), Some(t0 + ms(46)));
        assert!(orchestrator.poll(t0 + ms(45), &source).is_none());
        assert!(orchestrator.poll(t0 + ms(46), &source).is_some());
        assert_eq!(orchestrator.passes(), 2);
    }

    #[test]
    fn test_drag_end_cancels_pending_timer() {
        let source = source();
        let mut orchestrator = GuidanceOrchestrator::default();
        let t0 = Instant::now();
        orchestrator.drag_start(None);
        orchestrator.sample(sample(206.0, 100.0), t0).unwrap();

        let cleared = orchestrator.drag_end();
        assert!(cleared.is_empty());
        assert_eq!(orchestrator.phase(), GuidancePhase::Idle);
        assert!(orchestrator.next_deadline().is_none());

        assert!(orchestrator.poll(t0 + ms(100), &source).is_none());
        assert_eq!(orchestrator.passes(), 0);
        assert_eq!(source.calls.get(), 0);
        assert!(orchestrator.result().is_empty());
    }

    #[test]
    fn test_drag_end_clears_published_result() {
        let source = source();
        let mut orchestrator = GuidanceOrchestrator::default();
        let t0 = Instant::now();
        orchestrator.drag_start(None);
        orchestrator.sample(sample(206.0, 100.0), t0).unwrap();
        orchestrator.poll(t0 + ms(16), &source).unwrap();
        assert!(!orchestrator.result().is_empty());

        orchestrator.drag_end();
        assert!(orchestrator.result().is_empty());
    }

    #[test]
    fn test_drag_start_clears_previous_state() {
        let source = source();
        let mut orchestrator = GuidanceOrchestrator::default();
        let t0 = Instant::now();
        orchestrator.drag_start(None);
        orchestrator.sample(sample(206.0, 100.0), t0).unwrap();
        orchestrator.poll(t0 + ms(16), &source).unwrap();
        orchestrator.sample(sample(206.0, 100.0), t0 + ms(20)).unwrap();

        orchestrator.drag_start(Some("a".to_string()));
        assert!(orchestrator.result().is_empty());
        assert!(orchestrator.next_deadline().is_none());
        assert!(orchestrator.poll(t0 + ms(100), &source).is_none());
    }

    #[test]
    fn test_excluded_id_applies_to_passes() {
        let source = source();
        let mut orchestrator = GuidanceOrchestrator::default();
        let t0 = Instant::now();
        orchestrator.drag_start(Some("a".to_string()));
        orchestrator.sample(sample(206.0, 100.0), t0).unwrap();
        let result = orchestrator.poll(t0 + ms(16), &source).unwrap();
        assert!(result.snap_candidates.iter().all(|c| c.source_id != "a"));
    }

    #[test]
    fn test_zero_throttle_computes_on_next_poll() {
        let source = source();
        let config = GuidanceConfig {
            throttle_ms: 0,
            ..GuidanceConfig::default()
        };
        let mut orchestrator = GuidanceOrchestrator::new(config);
        let t0 = Instant::now();
        orchestrator.drag_start(None);
        orchestrator.sample(sample(206.0, 100.0), t0).unwrap();
        assert!(orchestrator.poll(t0, &source).is_some());
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "no drag is active"))]
    fn test_sample_while_idle_is_rejected() {
        let mut orchestrator = GuidanceOrchestrator::default();
        let result = orchestrator.sample(sample(10.0, 10.0), Instant::now());
        assert!(matches!(result, Err(GuidanceError::NotDragging)));
        assert_eq!(orchestrator.phase(), GuidancePhase::Idle);
        assert!(orchestrator.next_deadline().is_none());
    }
}
