// Copyright 2025 Irreducible Inc.

use ark_ff::Field;
use gadgets_core::constraint_system::validate::validate_witness;

use super::ConstraintSystemBuilder;

/// Builds a circuit once without and once with a witness, checks that both runs produce the same
/// constraint system, and validates the witness against it.
pub fn test_circuit<F: Field>(
	build_circuit: impl Fn(&mut ConstraintSystemBuilder<F>) -> Result<(), anyhow::Error>,
) -> Result<(), anyhow::Error> {
	let mut verifier_builder = ConstraintSystemBuilder::new();
	build_circuit(&mut verifier_builder)?;
	let verifier_constraint_system = verifier_builder.build()?;

	let mut prover_builder = ConstraintSystemBuilder::new_with_witness();
	build_circuit(&mut prover_builder)?;
	let prover_witness = prover_builder.take_witness()?;
	let prover_constraint_system = prover_builder.build()?;

	assert_eq!(verifier_constraint_system, prover_constraint_system);
	validate_witness(&verifier_constraint_system, &prover_witness)?;
	Ok(())
}
