//! # Snapshot Cell
//!
//! A single-slot publication point for immutable values. One producer replaces the
//! slot wholesale; any number of consumers clone out the `Arc` that is current at the
//! moment they look. A consumer therefore holds either the previous value or the new
//! one in full, never something in between.

use std::sync::Arc;

use super::MtResource;

/// Publishes immutable values from one producer to many readers.
///
/// The lock is only held long enough to swap or clone an `Arc`, so a slow reader
/// rendering an old snapshot never blocks the producer from publishing the next one.
///
/// # Examples
///
/// ```
/// use hole_esp::core::SnapshotCell;
///
/// let cell = SnapshotCell::new(vec![1]);
/// let before = cell.latest();
/// cell.publish(vec![1, 2]);
///
/// assert_eq!(*before, vec![1]);
/// assert_eq!(*cell.latest(), vec![1, 2]);
/// ```
pub struct SnapshotCell<T: Send + Sync> {
    current: MtResource<Arc<T>>,
}

impl<T: Send + Sync + 'static> SnapshotCell<T> {
    /// Creates a cell whose first published value is `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            current: MtResource::new(Arc::new(initial)),
        }
    }

    /// Replaces the current value.
    ///
    /// The previous value is released after the lock is dropped; readers still holding
    /// it keep it alive until they finish.
    pub fn publish(&self, value: T) {
        let next = Arc::new(value);
        let previous = std::mem::replace(&mut *self.current.get_mut(), next);
        drop(previous);
    }

    /// Returns the most recently published value.
    pub fn latest(&self) -> Arc<T> {
        self.current.get().clone()
    }
}

impl<T: Send + Sync> Clone for SnapshotCell<T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn readers_only_observe_complete_values() {
        let cell = SnapshotCell::new(vec![0u32; 64]);
        let writer = cell.clone();

        let handle = thread::spawn(move || {
            for generation in 1..200u32 {
                writer.publish(vec![generation; 64]);
            }
        });

        for _ in 0..500 {
            let seen = cell.latest();
            let first = seen[0];
            assert!(seen.iter().all(|value| *value == first));
        }

        handle.join().unwrap();
        assert_eq!(cell.latest()[0], 199);
    }
}
