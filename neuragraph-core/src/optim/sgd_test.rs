use super::*;
use crate::ops::{cross_entropy, mul, softmax, value};
use approx::assert_relative_eq;

/// Output `i` is `p_i * input[i]`, built over mirrors of the parameters.
#[derive(Debug)]
struct MockModule {
    params: Vec<Parameter>,
}

impl MockModule {
    fn new(values: &[f64]) -> Self {
        Self::with_ids(&(0..values.len()).collect::<Vec<_>>(), values)
    }

    fn with_ids(ids: &[usize], values: &[f64]) -> Self {
        MockModule {
            params: ids
                .iter()
                .zip(values)
                .map(|(&id, &v)| Parameter::new(ParamId(id), v))
                .collect(),
        }
    }
}

impl Module for MockModule {
    fn forward(&self, input: &[f64]) -> Result<Vec<Node>, NeuraGraphError> {
        Ok(self
            .params
            .iter()
            .zip(input)
            .map(|(p, &x)| mul(&p.mirror(), &value(x)))
            .collect())
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.params.clone()
    }
}

fn loss_for(module: &MockModule, input: &[f64], target: usize) -> Result<Node, NeuraGraphError> {
    let outputs = module.forward(input)?;
    let probs = softmax(&outputs)?;
    let loss = cross_entropy(target, &probs)?;
    loss.backprop();
    Ok(loss)
}

#[test]
fn test_sgd_momentum_two_steps() -> Result<(), NeuraGraphError> {
    let module = MockModule::new(&[1.0]);
    let mut optimizer = SgdOptimizer::new(&module, 0.1, 0.9)?;
    let param = &module.params[0];
    param.add_grad(0.5);

    optimizer.step();
    assert_relative_eq!(param.velocity(), 0.5);
    assert_relative_eq!(param.value(), 0.95, epsilon = 1e-12);

    // Same gradient again, without zero_grad.
    optimizer.step();
    assert_relative_eq!(param.velocity(), 0.95, epsilon = 1e-12);
    assert_relative_eq!(param.value(), 0.855, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_without_momentum() -> Result<(), NeuraGraphError> {
    let module = MockModule::new(&[1.0, 2.0]);
    let mut optimizer = SgdOptimizer::new(&module, 0.5, 0.0)?;
    module.params[0].add_grad(0.2);
    module.params[1].add_grad(-1.0);

    optimizer.step();
    assert_relative_eq!(module.params[0].value(), 0.9, epsilon = 1e-12);
    assert_relative_eq!(module.params[1].value(), 2.5, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_zero_grad_and_norm() -> Result<(), NeuraGraphError> {
    let module = MockModule::new(&[0.0, 0.0]);
    let mut optimizer = SgdOptimizer::new(&module, 0.1, 0.5)?;
    module.params[0].add_grad(3.0);
    module.params[1].add_grad(4.0);
    assert_relative_eq!(optimizer.grad_l2_norm(), 5.0);

    optimizer.zero_grad();
    assert_eq!(optimizer.grad_l2_norm(), 0.0);
    for param in optimizer.parameters() {
        assert_eq!(param.gradient(), 0.0);
    }
    Ok(())
}

#[test]
fn test_step_through_trait_object() -> Result<(), NeuraGraphError> {
    let module = MockModule::new(&[1.0]);
    let mut sgd = SgdOptimizer::new(&module, 1.0, 0.0)?;
    module.params[0].add_grad(0.25);
    {
        let optimizer: &mut dyn Optimizer = &mut sgd;
        optimizer.step();
        optimizer.zero_grad();
    }
    assert_relative_eq!(module.params[0].value(), 0.75);
    assert_eq!(module.params[0].gradient(), 0.0);
    Ok(())
}

#[test]
fn test_accumulate_copies_shadow_gradients() -> Result<(), NeuraGraphError> {
    let module = MockModule::new(&[0.3, -0.6]);
    let mut optimizer = SgdOptimizer::new(&module, 0.1, 0.0)?;
    let loss = loss_for(&module, &[1.0, 2.0], 0)?;

    let shadow: Vec<Node> = topological_sort(std::slice::from_ref(&loss))
        .into_iter()
        .filter(|n| n.param_id().is_some())
        .collect();
    assert_eq!(shadow.len(), 2);

    optimizer.accumulate(&loss)?;
    for node in &shadow {
        let id = node.param_id().expect("shadow leaf without id");
        let live = &module.params[id.index()];
        assert!(!live.node().ptr_eq(node));
        assert_eq!(live.gradient(), node.gradient());
        assert!(live.gradient() != 0.0);
    }
    Ok(())
}

#[test]
fn test_accumulate_sums_over_examples() -> Result<(), NeuraGraphError> {
    let module = MockModule::new(&[0.3, -0.6]);
    let mut optimizer = SgdOptimizer::new(&module, 0.1, 0.0)?;

    let first = loss_for(&module, &[1.0, 2.0], 0)?;
    let second = loss_for(&module, &[-1.0, 0.5], 1)?;
    optimizer.accumulate(&first)?;
    let after_first: Vec<f64> = module.params.iter().map(|p| p.gradient()).collect();
    optimizer.accumulate(&second)?;

    let grads_of = |loss: &Node| -> Vec<f64> {
        let mut grads = vec![0.0; 2];
        for node in topological_sort(std::slice::from_ref(loss)) {
            if let Some(id) = node.param_id() {
                grads[id.index()] = node.gradient();
            }
        }
        grads
    };
    let g1 = grads_of(&first);
    let g2 = grads_of(&second);
    assert_eq!(after_first, g1);
    for (i, param) in module.params.iter().enumerate() {
        assert_relative_eq!(param.gradient(), g1[i] + g2[i], epsilon = 1e-15);
    }
    Ok(())
}

#[test]
fn test_accumulate_rejects_non_loss_node() -> Result<(), NeuraGraphError> {
    let module = MockModule::new(&[1.0]);
    let mut optimizer = SgdOptimizer::new(&module, 0.1, 0.0)?;
    let outputs = module.forward(&[2.0])?;
    assert_eq!(
        optimizer.accumulate(&outputs[0]),
        Err(NeuraGraphError::NotALossNode { op: Op::Mul })
    );
    Ok(())
}

#[test]
fn test_accumulate_rejects_unknown_parameter() -> Result<(), NeuraGraphError> {
    let module = MockModule::new(&[1.0, 1.0]);
    let stranger = MockModule::with_ids(&[0, 99], &[1.0, 1.0]);
    let mut optimizer = SgdOptimizer::new(&module, 0.1, 0.0)?;
    let loss = loss_for(&stranger, &[1.0, 1.0], 0)?;
    assert_eq!(
        optimizer.accumulate(&loss),
        Err(NeuraGraphError::UnknownParameter(ParamId(99)))
    );
    assert_eq!(module.params[0].gradient(), 0.0);
    Ok(())
}

#[test]
fn test_accumulate_rejects_duplicate_parameter() -> Result<(), NeuraGraphError> {
    let module = MockModule::new(&[0.5, 0.25]);
    let mut optimizer = SgdOptimizer::new(&module, 0.1, 0.0)?;
    let mut logits = module.forward(&[1.0, 1.0])?;
    logits.extend(module.forward(&[2.0, 2.0])?);
    let probs = softmax(&logits)?;
    let loss = cross_entropy(0, &probs)?;
    loss.backprop();

    assert!(matches!(
        optimizer.accumulate(&loss),
        Err(NeuraGraphError::DuplicateParameter(_))
    ));
    for param in &module.params {
        assert_eq!(param.gradient(), 0.0);
    }
    Ok(())
}

#[test]
fn test_accumulate_rejects_partial_graph() -> Result<(), NeuraGraphError> {
    let module = MockModule::new(&[0.5, 0.25]);
    let mut optimizer = SgdOptimizer::new(&module, 0.1, 0.0)?;
    let outputs = module.forward(&[1.0, 1.0])?;
    let probs = softmax(&outputs[..1])?;
    let loss = cross_entropy(0, &probs)?;
    loss.backprop();

    assert_eq!(
        optimizer.accumulate(&loss),
        Err(NeuraGraphError::ParameterCountMismatch {
            expected: 2,
            actual: 1
        })
    );
    Ok(())
}

#[test]
fn test_duplicate_ids_at_construction() {
    let module = MockModule::with_ids(&[3, 3], &[1.0, 2.0]);
    assert_eq!(
        SgdOptimizer::new(&module, 0.1, 0.0).unwrap_err(),
        NeuraGraphError::DuplicateParameter(ParamId(3))
    );
}

#[test]
fn test_options_validation() {
    let module = MockModule::new(&[1.0]);
    for (lr, momentum) in [
        (0.0, 0.0),
        (-0.1, 0.0),
        (f64::NAN, 0.0),
        (f64::INFINITY, 0.0),
        (0.1, 1.0),
        (0.1, -0.1),
        (0.1, f64::NAN),
    ] {
        assert!(
            matches!(
                SgdOptimizer::new(&module, lr, momentum),
                Err(NeuraGraphError::ConfigurationError(_))
            ),
            "lr={} momentum={} should be rejected",
            lr,
            momentum
        );
    }
}

#[test]
fn test_default_options_and_set_lr() -> Result<(), NeuraGraphError> {
    let defaults = SgdOptions::default();
    assert_eq!(defaults.lr, 0.01);
    assert_eq!(defaults.momentum, 0.0);

    let module = MockModule::new(&[1.0]);
    let mut optimizer = SgdOptimizer::with_options(&module, defaults)?;
    assert_eq!(optimizer.lr(), 0.01);
    assert_eq!(optimizer.momentum(), 0.0);

    optimizer.set_lr(0.5)?;
    assert_eq!(optimizer.lr(), 0.5);
    assert!(optimizer.set_lr(0.0).is_err());
    assert_eq!(optimizer.options().lr, 0.5);
    Ok(())
}
