// src/nn/mod.rs
// Layer descriptors, trainable parameters and the model trait.

pub mod init;
pub mod layers;
pub mod module;
pub mod parameter;

pub use init::UniformInit;
pub use layers::Layer;
pub use module::Module;
pub use parameter::{ParamId, Parameter};
