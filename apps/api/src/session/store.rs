use std::sync::Arc;

/// A single-value container with whole-value replacement.
///
/// Readers get an immutable snapshot; `replace` swaps in a new one
/// (last write wins). There is no partial-update API: callers read,
/// build a new value, and replace.
#[derive(Debug)]
pub struct Store<T> {
    current: Arc<T>,
}

impl<T> Store<T> {
    pub fn new(initial: T) -> Self {
        Self {
            current: Arc::new(initial),
        }
    }

    pub fn get(&self) -> Arc<T> {
        Arc::clone(&self.current)
    }

    /// Replaces the value wholesale and returns the new snapshot.
    pub fn replace(&mut self, value: T) -> Arc<T> {
        self.current = Arc::new(value);
        self.get()
    }
}

impl<T: Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_old_snapshots_survive_replace() {
        let mut store = Store::new(vec![1, 2]);
        let before = store.get();
        let after = store.replace(vec![3]);
        assert_eq!(*before, vec![1, 2]);
        assert_eq!(*after, vec![3]);
        assert_eq!(*store.get(), vec![3]);
    }

    #[test]
    fn test_last_write_wins() {
        let mut store: Store<String> = Store::default();
        assert!(store.get().is_empty());
        store.replace("first".to_string());
        store.replace("second".to_string());
        assert_eq!(store.get().as_str(), "second");
    }
}
