use crate::dataset::Dataset;
use crate::error::DataError;

/// In-memory classification samples: one input vector and one class label each.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VecDataset {
    inputs: Vec<Vec<f64>>,
    labels: Vec<usize>,
}

impl VecDataset {
    /// Pairs `inputs[i]` with `labels[i]`.
    ///
    /// # Errors
    ///
    /// Returns `DataError::LengthMismatch` if the two vectors differ in length.
    pub fn new(inputs: Vec<Vec<f64>>, labels: Vec<usize>) -> Result<Self, DataError> {
        if inputs.len() != labels.len() {
            return Err(DataError::LengthMismatch {
                inputs: inputs.len(),
                labels: labels.len(),
            });
        }
        Ok(VecDataset { inputs, labels })
    }

    pub fn from_samples(samples: Vec<(Vec<f64>, usize)>) -> Self {
        let (inputs, labels) = samples.into_iter().unzip();
        VecDataset { inputs, labels }
    }

    pub fn inputs(&self) -> &[Vec<f64>] {
        &self.inputs
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }
}

impl Dataset for VecDataset {
    type Item = (Vec<f64>, usize);

    /// Returns a copy of the sample at `index`.
    fn get(&self, index: usize) -> Result<Self::Item, DataError> {
        match (self.inputs.get(index), self.labels.get(index)) {
            (Some(input), Some(&label)) => Ok((input.clone(), label)),
            _ => Err(DataError::IndexOutOfBounds {
                index,
                len: self.len(),
            }),
        }
    }

    fn len(&self) -> usize {
        self.labels.len()
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;
