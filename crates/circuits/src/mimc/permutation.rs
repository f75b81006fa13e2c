// Copyright 2024-2025 Irreducible Inc.

use anyhow::ensure;
use ark_ff::{Field, PrimeField};
use gadgets_core::Variable;
use gadgets_hash::{round_constants, MiMCParams};
use tracing::instrument;

use super::MiMCe7Round;
use crate::builder::ConstraintSystemBuilder;

/// The MiMC permutation with exponent 7, one [`MiMCe7Round`] per round constant.
///
/// Round `i` takes the output of round `i − 1` as its message. Every round uses the same key and
/// only the last one adds the key to its output.
pub struct MiMCe7Permutation<F: Field> {
	name: String,
	rounds: Vec<MiMCe7Round<F>>,
	result: Variable,
}

impl<F: Field> MiMCe7Permutation<F> {
	pub fn new(
		builder: &mut ConstraintSystemBuilder<F>,
		name: impl ToString,
		x: Variable,
		k: Variable,
		round_constants: &[F],
	) -> Result<Self, anyhow::Error> {
		ensure!(!round_constants.is_empty(), "a MiMC permutation needs at least one round");

		let name = name.to_string();
		builder.push_namespace(&name);
		let n_rounds = round_constants.len();
		let mut rounds = Vec::with_capacity(n_rounds);
		let mut state = x;
		for (i, &c) in round_constants.iter().enumerate() {
			let round =
				MiMCe7Round::new(builder, format!("round_{i}"), state, k, c, i + 1 == n_rounds);
			state = round.result();
			rounds.push(round);
		}
		builder.pop_namespace();
		tracing::trace!(n_rounds, "allocated MiMC permutation");

		Ok(Self {
			name,
			rounds,
			result: state,
		})
	}

	/// Builds the permutation with round constants derived from `params`.
	pub fn with_params(
		builder: &mut ConstraintSystemBuilder<F>,
		name: impl ToString,
		x: Variable,
		k: Variable,
		params: &MiMCParams,
	) -> Result<Self, anyhow::Error>
	where
		F: PrimeField,
	{
		Self::new(builder, name, x, k, &round_constants::<F>(params))
	}

	#[instrument("MiMCe7Permutation::generate_constraints", skip_all, level = "debug")]
	pub fn generate_constraints(&self, builder: &mut ConstraintSystemBuilder<F>) {
		builder.push_namespace(&self.name);
		for round in &self.rounds {
			round.generate_constraints(builder);
		}
		builder.pop_namespace();
	}

	#[instrument("MiMCe7Permutation::generate_witness", skip_all, level = "debug")]
	pub fn generate_witness(
		&self,
		builder: &mut ConstraintSystemBuilder<F>,
	) -> Result<(), anyhow::Error> {
		for round in &self.rounds {
			round.generate_witness(builder)?;
		}
		Ok(())
	}

	pub fn rounds(&self) -> &[MiMCe7Round<F>] {
		&self.rounds
	}

	/// Output of the last round, which includes the final key addition.
	pub const fn result(&self) -> Variable {
		self.result
	}
}

#[cfg(test)]
mod tests {
	use ark_bn254::Fr;
	use gadgets_hash::MiMCe7;

	use super::*;
	use crate::{builder::test_utils::test_circuit, unconstrained::unconstrained};

	#[test]
	fn test_matches_native_permutation() {
		let params = MiMCParams::default();
		let native = MiMCe7::<Fr>::new(&params);

		test_circuit::<Fr>(|builder| {
			let x = unconstrained(builder, "x")?;
			let k = unconstrained(builder, "k")?;
			let permutation = MiMCe7Permutation::with_params(builder, "mimc", x, k, &params)?;
			permutation.generate_constraints(builder);
			permutation.generate_witness(builder)?;

			assert_eq!(permutation.rounds().len(), params.n_rounds());
			if let Some(witness) = builder.witness() {
				let expected = native.permute(witness.get(x)?, witness.get(k)?);
				assert_eq!(witness.get(permutation.result())?, expected);
			}
			Ok(())
		})
		.unwrap();
	}

	#[test]
	fn test_constraint_count_and_names() {
		let mut builder = ConstraintSystemBuilder::<Fr>::new();
		let x = builder.add_variable("x");
		let k = builder.add_variable("k");
		let constants = [Fr::from(0u64), Fr::from(1u64), Fr::from(2u64)];
		let permutation = MiMCe7Permutation::new(&mut builder, "mimc", x, k, &constants).unwrap();
		permutation.generate_constraints(&mut builder);

		assert_eq!(builder.n_constraints(), 4 * constants.len());
		assert_eq!(builder.constraints()[11].name, "mimc::round_2::t7");
		assert_eq!(builder.label(permutation.result()), "mimc::round_2::t7");
	}

	#[test]
	fn test_rejects_empty_constants() {
		let mut builder = ConstraintSystemBuilder::<Fr>::new();
		let x = builder.add_variable("x");
		let k = builder.add_variable("k");
		assert!(MiMCe7Permutation::<Fr>::new(&mut builder, "mimc", x, k, &[]).is_err());
	}
}
