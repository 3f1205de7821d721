mod device;
#[allow(clippy::module_inception)]
mod engine;
mod entity;
mod integration;
pub mod state;

pub use device::DeviceInfo;
pub use engine::Engine;
pub use entity::Entity;
pub use integration::EntitySink;
pub use state::EntityState;
pub use state::State;
