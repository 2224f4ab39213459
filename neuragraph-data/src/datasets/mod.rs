pub mod vec_dataset;

pub use vec_dataset::VecDataset;
