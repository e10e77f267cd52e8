//! Dimension store: owns the three cuboid records.

use shared::{BoxDimensions, BoxRole, DEFAULT_INNER, DEFAULT_OUTER, DEFAULT_SECONDARY};

/// Current dimensions of the outer, inner and secondary cuboids.
///
/// `outer` and `secondary` are fixed after construction; only `inner`
/// can be overwritten.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionStore {
    outer: BoxDimensions,
    inner: BoxDimensions,
    secondary: BoxDimensions,
}

impl DimensionStore {
    pub fn new(outer: BoxDimensions, inner: BoxDimensions, secondary: BoxDimensions) -> Self {
        Self {
            outer,
            inner,
            secondary,
        }
    }

    /// Default store with a custom starting inner cuboid
    pub fn with_inner(inner: BoxDimensions) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    pub fn outer(&self) -> &BoxDimensions {
        &self.outer
    }

    pub fn inner(&self) -> &BoxDimensions {
        &self.inner
    }

    pub fn secondary(&self) -> &BoxDimensions {
        &self.secondary
    }

    pub fn get(&self, role: BoxRole) -> &BoxDimensions {
        match role {
            BoxRole::Outer => &self.outer,
            BoxRole::Inner => &self.inner,
            BoxRole::Secondary => &self.secondary,
        }
    }

    /// Overwrite all three inner extents. No validation happens here.
    pub fn set_inner(&mut self, width: f64, height: f64, depth: f64) {
        self.inner = BoxDimensions::new(width, height, depth);
    }
}

impl Default for DimensionStore {
    fn default() -> Self {
        Self::new(DEFAULT_OUTER, DEFAULT_INNER, DEFAULT_SECONDARY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let store = DimensionStore::default();
        assert_eq!(*store.outer(), BoxDimensions::new(2.35, 2.39, 12.03));
        assert_eq!(*store.inner(), BoxDimensions::new(2.35, 0.5, 2.0));
        assert_eq!(*store.secondary(), BoxDimensions::new(1.5, 1.0, 3.0));
    }

    #[test]
    fn test_set_inner_overwrites_all_fields() {
        let mut store = DimensionStore::default();
        store.set_inner(1.0, 2.0, 3.0);
        assert_eq!(*store.inner(), BoxDimensions::new(1.0, 2.0, 3.0));
        assert_eq!(*store.outer(), DEFAULT_OUTER);
        assert_eq!(*store.secondary(), DEFAULT_SECONDARY);
    }

    #[test]
    fn test_set_inner_accepts_non_positive() {
        let mut store = DimensionStore::default();
        store.set_inner(0.0, -1.0, 0.5);
        assert_eq!(*store.inner(), BoxDimensions::new(0.0, -1.0, 0.5));
    }

    #[test]
    fn test_get_by_role() {
        let store = DimensionStore::with_inner(BoxDimensions::new(1.0, 1.0, 1.0));
        assert_eq!(*store.get(BoxRole::Inner), BoxDimensions::new(1.0, 1.0, 1.0));
        assert_eq!(*store.get(BoxRole::Outer), DEFAULT_OUTER);
        assert_eq!(*store.get(BoxRole::Secondary), DEFAULT_SECONDARY);
    }
}
