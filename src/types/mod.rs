// ABOUTME: Natural-key types shared across the crate.
// ABOUTME: Phantom-typed identifiers and image reference parsing.

mod id;
mod image_ref;

pub use id::{ContainerId, ImageId, NetworkName, VolumeName};
pub use image_ref::{ImageRef, ParseImageRefError};
