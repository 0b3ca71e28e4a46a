use crate::entities::Manifest;
use crate::geometry::Shape;

/// A placement problem: the domain together with the manifest of items to place in it.
/// Read-only for the entire lifetime of an optimization run.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    pub shape: Shape,
    pub manifest: Manifest,
}

impl Instance {
    pub fn new(shape: Shape, manifest: Manifest) -> Self {
        Self { shape, manifest }
    }

    pub fn total_item_count(&self) -> usize {
        self.manifest.total_item_count()
    }
}
