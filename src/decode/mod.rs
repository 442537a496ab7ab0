// ABOUTME: Permissive decoding of tool output into typed records.
// ABOUTME: Schema-tolerant across tool versions; identity fields are strict.

mod container;
mod error;
mod image;
mod network;
mod records;
mod volume;

pub use container::decode_containers;
pub use error::DecodeError;
pub use image::{ImageDetail, decode_image_detail, decode_images};
pub use network::decode_networks;
pub use records::{ContainerRecord, ImageRecord, LifecycleState, NetworkRecord, VolumeRecord};
pub use volume::decode_volumes;
