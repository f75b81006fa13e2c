// Copyright 2024-2025 Irreducible Inc.

use ark_ff::{Field, PrimeField};
use gadgets_core::{LinearCombination, Variable};
use gadgets_hash::MiMCParams;

use super::MiMCe7Permutation;
use crate::builder::ConstraintSystemBuilder;

/// Miyaguchi–Preneel compression of two field elements, `E_y(x) + x + y`.
pub struct MiMCe7Compression<F: Field> {
	name: String,
	x: Variable,
	y: Variable,
	permutation: MiMCe7Permutation<F>,
	result: Variable,
}

impl<F: Field> MiMCe7Compression<F> {
	pub fn new(
		builder: &mut ConstraintSystemBuilder<F>,
		name: impl ToString,
		x: Variable,
		y: Variable,
		round_constants: &[F],
	) -> Result<Self, anyhow::Error> {
		let name = name.to_string();
		builder.push_namespace(&name);
		let permutation = MiMCe7Permutation::new(builder, "permutation", x, y, round_constants)?;
		let result = builder.add_variable("result");
		builder.pop_namespace();

		Ok(Self {
			name,
			x,
			y,
			permutation,
			result,
		})
	}

	pub fn with_params(
		builder: &mut ConstraintSystemBuilder<F>,
		name: impl ToString,
		x: Variable,
		y: Variable,
		params: &MiMCParams,
	) -> Result<Self, anyhow::Error>
	where
		F: PrimeField,
	{
		Self::new(builder, name, x, y, &gadgets_hash::round_constants::<F>(params))
	}

	pub fn generate_constraints(&self, builder: &mut ConstraintSystemBuilder<F>) {
		builder.push_namespace(&self.name);
		self.permutation.generate_constraints(builder);
		let one = builder.one();
		let sum = LinearCombination::from(self.permutation.result()) + self.x + self.y;
		builder.assert_mul("result", sum, one, self.result);
		builder.pop_namespace();
	}

	pub fn generate_witness(
		&self,
		builder: &mut ConstraintSystemBuilder<F>,
	) -> Result<(), anyhow::Error> {
		self.permutation.generate_witness(builder)?;
		if let Some(witness) = builder.witness() {
			let value = witness.get(self.permutation.result())?
				+ witness.get(self.x)?
				+ witness.get(self.y)?;
			witness.set(self.result, value)?;
		}
		Ok(())
	}

	pub const fn result(&self) -> Variable {
		self.result
	}
}
