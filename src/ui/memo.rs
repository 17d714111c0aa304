//! Dependency-keyed cache for derived values.

/// Holds a value derived from `deps` and recomputes it only when the
/// dependencies compare unequal to the last ones seen.
#[derive(Debug)]
pub struct Memo<D, V> {
    deps: Option<D>,
    value: Option<V>,
    computations: u64,
}

impl<D, V> Default for Memo<D, V> {
    fn default() -> Self {
        Self {
            deps: None,
            value: None,
            computations: 0,
        }
    }
}

impl<D: PartialEq + Clone, V> Memo<D, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute if `deps` changed. Returns `true` when `compute` ran.
    pub fn update(&mut self, deps: &D, compute: impl FnOnce(&D) -> V) -> bool {
        if self.deps.as_ref() == Some(deps) {
            return false;
        }
        self.value = Some(compute(deps));
        self.deps = Some(deps.clone());
        self.computations += 1;
        true
    }

    pub fn get(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Number of times the value was computed.
    pub fn computations(&self) -> u64 {
        self.computations
    }
}
