/// Something that happened to the storage of a `GrowArr`.
///
/// All counts are in elements, not bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Event {
    /// A new block replaced the old one. `relocated` live elements were moved
    /// across before the old block was released.
    Grow { from: usize, to: usize, relocated: usize },
    /// The length changed through `resize` or one of its variants.
    Resize { from: usize, to: usize, capacity: usize },
    /// The block was released when the container was dropped.
    Release { capacity: usize },
}

/// Receives the storage events of one container.
///
/// The observer is handed to the container when it is constructed, so each
/// container can be watched differently. Any `Fn(Event)` closure is an observer.
pub trait Observer {
    fn notify(&self, event: Event);
}

/// The default observer. It ignores everything.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    #[inline(always)]
    fn notify(&self, _: Event) {}
}

impl<F> Observer for F
where
    F: Fn(Event),
{
    #[inline]
    fn notify(&self, event: Event) {
        self(event);
    }
}

/// Forwards every event to the `log` facade at the `debug` level, under the
/// `grow_array` target.
#[cfg(feature = "log")]
#[derive(Debug, Default, Copy, Clone)]
pub struct LogObserver;

#[cfg(feature = "log")]
impl Observer for LogObserver {
    fn notify(&self, event: Event) {
        match event {
            Event::Grow { from, to, relocated } => {
                log::debug!(target: "grow_array", "grow: capacity {from} -> {to}, relocated {relocated}")
            }
            Event::Resize { from, to, capacity } => {
                log::debug!(target: "grow_array", "resize: length {from} -> {to}, capacity = {capacity}")
            }
            Event::Release { capacity } => {
                log::debug!(target: "grow_array", "release: capacity = {capacity}")
            }
        }
    }
}
