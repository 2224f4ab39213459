// src/model/mod.rs

pub mod neural_net;

pub use neural_net::NeuralNet;
