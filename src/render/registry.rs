use super::shared::SharedRenderResource;
use crate::error::Result;
use std::collections::{hash_map::Entry, HashMap};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Sphere,
    PolyLine,
    SkyBox,
}

/// One shared resource per primitive kind, created on first request and kept until the registry
/// is dropped.
pub struct SharedResourceRegistry<R = SharedRenderResource> {
    resources: HashMap<PrimitiveKind, R>,
}

impl<R> SharedResourceRegistry<R> {
    pub fn new() -> Self {
        Self {
            resources: HashMap::new(),
        }
    }

    /// Returns the resource of `kind`, running `prepare` only if there is none yet. A failed
    /// preparation leaves the slot empty.
    pub fn get_or_try_insert_with<F>(&mut self, kind: PrimitiveKind, prepare: F) -> Result<&R>
    where
        F: FnOnce() -> Result<R>,
    {
        match self.resources.entry(kind) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(prepare()?)),
        }
    }

    pub fn get(&self, kind: PrimitiveKind) -> Option<&R> {
        self.resources.get(&kind)
    }

    pub fn is_prepared(&self, kind: PrimitiveKind) -> bool {
        self.resources.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl<R> Default for SharedResourceRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}
