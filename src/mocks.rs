use crate::errors::{Result, StoneClassifierError};
use crate::traits::BinaryImageClassifier;
use ndarray::prelude::*;
use std::cell::Cell;

/// Classifier for tests that answers every input with the same probability
/// and counts how often it was asked.
#[derive(Debug, Clone)]
pub struct MockClassifier {
    pub probability: f32,
    pub image_size: u32,
    calls: Cell<usize>,
}

impl MockClassifier {
    pub const fn new(probability: f32) -> Self {
        Self {
            probability,
            image_size: crate::traits::IMAGE_SIZE,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl BinaryImageClassifier for MockClassifier {
    fn image_size(&self) -> u32 {
        self.image_size
    }

    fn predict(&self, tensor: ArrayView4<f32>) -> Result<f32> {
        let size = self.image_size as usize;
        if tensor.shape() != [1, size, size, 3] {
            return Err(StoneClassifierError::Validation {
                field: "mock input".to_string(),
                reason: format!("has shape {:?}", tensor.shape()),
            });
        }
        self.calls.set(self.calls.get() + 1);
        Ok(self.probability)
    }
}

/// Classifier whose forward pass always fails.
#[derive(Debug, Clone, Default)]
pub struct FailingClassifier;

impl BinaryImageClassifier for FailingClassifier {
    fn predict(&self, _tensor: ArrayView4<f32>) -> Result<f32> {
        Err(StoneClassifierError::model(
            "mock inference",
            "graph execution aborted",
        ))
    }
}
