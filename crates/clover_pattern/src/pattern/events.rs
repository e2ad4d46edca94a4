//! Event types and sinks for observing pattern generation.
//!
//! This module defines [`PatternEvent`] and a few sinks to collect or forward events
//! while running [`crate::pattern::generator::generate_pattern_with_events`].
use crate::pattern::{Cluster, PatternConfig};

/// Describes events emitted while generating a pattern.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum PatternEvent {
    /// Emitted after the config validated, before any grid is built.
    GenerationStarted {
        /// The configuration used.
        config: PatternConfig,
    },

    /// Emitted once the base checkerboard exists.
    BaseGridBuilt { width: usize, height: usize },

    /// Emitted after each cluster was written into the grid.
    ClusterStamped {
        /// Zero-based stamp order.
        index: usize,
        cluster: Cluster,
    },

    /// Emitted when all clusters are stamped.
    GenerationFinished {
        /// Distinct cells holding the overlay glyph.
        overlay_cells: usize,
    },
}

/// Discriminant of [`PatternEvent`], used for filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternEventKind {
    GenerationStarted,
    BaseGridBuilt,
    ClusterStamped,
    GenerationFinished,
}

impl PatternEvent {
    pub fn kind(&self) -> PatternEventKind {
        match self {
            PatternEvent::GenerationStarted { .. } => PatternEventKind::GenerationStarted,
            PatternEvent::BaseGridBuilt { .. } => PatternEventKind::BaseGridBuilt,
            PatternEvent::ClusterStamped { .. } => PatternEventKind::ClusterStamped,
            PatternEvent::GenerationFinished { .. } => PatternEventKind::GenerationFinished,
        }
    }
}

/// A generic event sink that accepts [`PatternEvent`]s.
pub trait EventSink {
    /// Whether events of `kind` should be built and sent at all.
    #[inline]
    fn wants(&self, _kind: PatternEventKind) -> bool {
        true
    }

    fn send(&mut self, event: PatternEvent);
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn wants(&self, _kind: PatternEventKind) -> bool {
        false
    }

    #[inline]
    fn send(&mut self, _event: PatternEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(PatternEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(PatternEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(PatternEvent),
{
    #[inline]
    fn send(&mut self, event: PatternEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<PatternEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<PatternEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[PatternEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of collected events of the given kind.
    pub fn count(&self, kind: PatternEventKind) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: PatternEvent) {
        self.events.push(event);
    }
}
