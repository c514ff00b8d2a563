//! Event types and sinks for observing scene generation passes.
//!
//! [`crate::scene::runner::SceneGenerator::generate_with_events`] reports each step of a pass
//! as a [`SceneEvent`] to an [`EventSink`].
use crate::sampling::QuadShape;
use crate::scene::composition::Fill;

/// Describes events emitted during a generation pass.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum SceneEvent {
    /// Emitted when a pass starts.
    PassStarted {
        /// Number of dot regions that will be sampled.
        dot_region_count: usize,
        /// Number of shapes that will be sampled.
        shape_count: usize,
    },

    /// Emitted after a dot region was sampled.
    DotsPlaced {
        /// Index of the dot region in the pass.
        index: usize,
        /// Columns and rows of the sampled region.
        region_size: (usize, usize),
        /// Number of dots produced.
        count: usize,
    },

    /// Emitted after a shape was sampled.
    ShapePlaced {
        /// Index of the shape in the pass.
        index: usize,
        /// Whether the shape is the main shape.
        main: bool,
        /// Columns and rows of the region the shape was drawn from.
        region_size: (usize, usize),
        /// Mask polygon.
        polygon: QuadShape,
        /// Fill shown through the mask.
        fill: Fill,
    },

    /// Emitted when the pass finishes.
    PassFinished {
        /// Total number of dots.
        dot_count: usize,
        /// Total number of shapes.
        shape_count: usize,
    },
}

/// A generic event sink that accepts [`SceneEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: SceneEvent);

    fn send_many<I>(&mut self, events: I)
    where
        Self: Sized,
        I: IntoIterator<Item = SceneEvent>,
    {
        for e in events {
            self.send(e);
        }
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: SceneEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(SceneEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(SceneEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(SceneEvent),
{
    #[inline]
    fn send(&mut self, event: SceneEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<SceneEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<SceneEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[SceneEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: SceneEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> SceneEvent {
        SceneEvent::PassStarted {
            dot_region_count: 1,
            shape_count: 3,
        }
    }

    #[test]
    fn vec_sink_collects_events() {
        let mut sink = VecSink::new();
        assert!(sink.is_empty());
        sink.send_many([started(), started()]);
        assert_eq!(sink.len(), 2);
        matches!(sink.as_slice()[0], SceneEvent::PassStarted { .. })
            .then_some(())
            .expect("event captured");
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn fn_sink_invokes_callback() {
        let mut count = 0;
        let mut sink = FnSink::new(|_event| {
            count += 1;
        });
        sink.send(started());
        assert_eq!(count, 1);
    }
}
