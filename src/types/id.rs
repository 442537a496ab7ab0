// ABOUTME: Phantom-typed natural keys for compile-time type safety.
// ABOUTME: Prevents passing a container id where a volume name is expected.

use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Marker types for phantom type parameters.
/// Empty enums prevent instantiation and require no trait bounds.
pub enum ContainerMarker {}
pub enum ImageMarker {}
pub enum VolumeMarker {}
pub enum NetworkMarker {}

/// A type-safe natural key.
///
/// Records carry no persistent identity across calls; correlation happens
/// through these externally meaningful keys. The phantom parameter makes
/// mixing keys of different resource kinds a compile error.
#[must_use = "keys reference resources and should not be ignored"]
pub struct Key<T> {
    value: String,
    _marker: PhantomData<T>,
}

impl<T> Key<T> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_inner(self) -> String {
        self.value
    }
}

// Manual impls so T does not need to implement anything itself.

impl<T> std::fmt::Debug for Key<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Key").field("value", &self.value).finish()
    }
}

impl<T> Clone for Key<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> PartialEq for Key<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Key<T> {}

impl<T> Hash for Key<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> std::fmt::Display for Key<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

pub type ContainerId = Key<ContainerMarker>;
pub type ImageId = Key<ImageMarker>;
pub type VolumeName = Key<VolumeMarker>;
pub type NetworkName = Key<NetworkMarker>;
