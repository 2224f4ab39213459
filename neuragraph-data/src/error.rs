use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DataError {
    #[error("Index {index} is out of bounds for a dataset of {len} samples")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Got {inputs} inputs but {labels} labels")]
    LengthMismatch { inputs: usize, labels: usize },
}
