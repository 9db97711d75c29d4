//! Single-slot memoization keyed by dependency values

/// Cached value plus the dependency key it was computed from
///
/// The value is recomputed only when the key changes.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    slot: Option<(K, V)>,
    computations: usize,
}

impl<K: PartialEq, V> Memo<K, V> {
    pub fn new() -> Self {
        Self {
            slot: None,
            computations: 0,
        }
    }

    /// Return the cached value for `key`, computing it first if the key changed
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> &V {
        let stale = !matches!(&self.slot, Some((cached, _)) if *cached == key);
        if stale {
            self.computations += 1;
            self.slot = None;
        }
        let (_, value) = self.slot.get_or_insert_with(|| (key, compute()));
        value
    }

    /// Cached value regardless of key, if any
    pub fn peek(&self) -> Option<&V> {
        self.slot.as_ref().map(|(_, value)| value)
    }

    /// How many times the value has been computed
    pub fn computations(&self) -> usize {
        self.computations
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}

impl<K: PartialEq, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
