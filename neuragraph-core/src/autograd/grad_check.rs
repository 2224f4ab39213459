use crate::error::NeuraGraphError;
use crate::node::Node;
use crate::ops::value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(NeuraGraphError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

impl From<NeuraGraphError> for GradCheckError {
    fn from(err: NeuraGraphError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks the gradients produced by [`Node::backprop`] against central finite
/// differences.
///
/// `func` builds a scalar output node from one fresh leaf per entry of
/// `inputs`. It is called once to obtain analytical gradients, then twice per
/// input with that input shifted by `±epsilon`. The two gradients are
/// accepted when they are relatively equal within `tolerance` (or absolutely
/// within `tolerance` near zero).
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Node]) -> Result<Node, NeuraGraphError>,
{
    let leaves: Vec<Node> = inputs.iter().map(|&x| value(x)).collect();
    let output = func(&leaves)?;
    output.backprop();
    let analytical: Vec<f64> = leaves.iter().map(Node::gradient).collect();

    let evaluate = |index: usize, shift: f64| -> Result<f64, GradCheckError> {
        let shifted: Vec<Node> = inputs
            .iter()
            .enumerate()
            .map(|(j, &x)| value(if j == index { x + shift } else { x }))
            .collect();
        Ok(func(&shifted)?.value())
    };

    for (i, &analytical_grad) in analytical.iter().enumerate() {
        let loss_plus = evaluate(i, epsilon)?;
        let loss_minus = evaluate(i, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    log::trace!("check_grad: {} inputs agree", inputs.len());
    Ok(())
}
