use crate::nn::parameter::ParamId;
use crate::node::Op;
use thiserror::Error;

/// Custom error type for the neuragraph engine.
///
/// Every variant describes a violated construction precondition. None of them
/// is recoverable: callers are expected to propagate them with `?` and abort
/// the current graph or training step.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum NeuraGraphError {
    #[error("Operation '{operation}' requires at least one operand")]
    EmptyOperandList { operation: String },

    #[error("Target class {target} is out of range for {len} logits")]
    TargetOutOfRange { target: usize, len: usize },

    #[error("A network needs at least one layer")]
    EmptyArchitecture,

    #[error("Invalid architecture: {0}")]
    InvalidArchitecture(String),

    #[error("Layer {layer} expects {expected} inputs but receives {actual}")]
    LayerSizeMismatch {
        layer: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Input size mismatch: expected {expected}, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error("Expected a cross-entropy loss node, got {op:?}")]
    NotALossNode { op: Op },

    #[error("Parameter {0} is not managed by this optimizer")]
    UnknownParameter(ParamId),

    #[error("Parameter {0} appears more than once in the loss graph")]
    DuplicateParameter(ParamId),

    #[error("Parameter count mismatch: expected {expected}, got {actual}")]
    ParameterCountMismatch { expected: usize, actual: usize },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
