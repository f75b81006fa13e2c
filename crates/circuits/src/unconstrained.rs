// Copyright 2024 Irreducible Inc.

use ark_ff::Field;
use gadgets_core::Variable;
use rand::{thread_rng, Rng};

use crate::builder::ConstraintSystemBuilder;

/// Allocates a free input variable, filled with a random value in witness mode.
pub fn unconstrained<F: Field>(
	builder: &mut ConstraintSystemBuilder<F>,
	name: impl ToString,
) -> Result<Variable, anyhow::Error> {
	let var = builder.add_variable(name);

	if let Some(witness) = builder.witness() {
		witness.set(var, F::rand(&mut thread_rng()))?;
	}

	Ok(var)
}

/// Allocates `N` free input variables, filled with random bits in witness mode.
///
/// The bits are not constrained to be boolean; gadgets consuming them do that.
pub fn unconstrained_bits<F: Field, const N: usize>(
	builder: &mut ConstraintSystemBuilder<F>,
	name: impl ToString,
) -> Result<[Variable; N], anyhow::Error> {
	let bits = builder.add_variables_multiple::<N>(name);

	if let Some(witness) = builder.witness() {
		let mut rng = thread_rng();
		for &bit in &bits {
			witness.set(bit, F::from(rng.gen::<bool>()))?;
		}
	}

	Ok(bits)
}
