// Copyright 2024-2025 Irreducible Inc.

use ark_ff::Field;
use gadgets_core::{LinearCombination, Variable};

use crate::builder::ConstraintSystemBuilder;

/// One MiMC round with exponent 7: `(x + k + c)^7`, plus `k` on the last round of a permutation.
///
/// With `t = x + k + c` the seventh power is computed with four products:
/// `t2 = t·t`, `t4 = t2·t2`, `t6 = t4·t2`, `t7 = t6·t`.
pub struct MiMCe7Round<F: Field> {
	name: String,
	x: Variable,
	k: Variable,
	c: F,
	add_k_to_result: bool,

	t2: Variable,
	t4: Variable,
	t6: Variable,
	t7: Variable,
}

impl<F: Field> MiMCe7Round<F> {
	pub fn new(
		builder: &mut ConstraintSystemBuilder<F>,
		name: impl ToString,
		x: Variable,
		k: Variable,
		c: F,
		add_k_to_result: bool,
	) -> Self {
		let name = name.to_string();
		builder.push_namespace(&name);
		let t2 = builder.add_variable("t2");
		let t4 = builder.add_variable("t4");
		let t6 = builder.add_variable("t6");
		let t7 = builder.add_variable("t7");
		builder.pop_namespace();

		Self {
			name,
			x,
			k,
			c,
			add_k_to_result,
			t2,
			t4,
			t6,
			t7,
		}
	}

	fn t(&self, one: Variable) -> LinearCombination<F> {
		LinearCombination::from_terms([(self.x, F::one()), (self.k, F::one()), (one, self.c)])
	}

	pub fn generate_constraints(&self, builder: &mut ConstraintSystemBuilder<F>) {
		let t = self.t(builder.one());
		let t7 = if self.add_k_to_result {
			LinearCombination::from(self.t7) - self.k
		} else {
			self.t7.into()
		};

		builder.push_namespace(&self.name);
		builder.assert_mul("t2", t.clone(), t.clone(), self.t2);
		builder.assert_mul("t4", self.t2, self.t2, self.t4);
		builder.assert_mul("t6", self.t4, self.t2, self.t6);
		builder.assert_mul("t7", self.t6, t, t7);
		builder.pop_namespace();
	}

	/// Computes and binds `t2, t4, t6, t7` from the values of `x` and `k`.
	///
	/// `x` and `k` must already be bound. The values are not checked against the constraints.
	/// Does nothing on a builder without a witness.
	pub fn generate_witness(
		&self,
		builder: &mut ConstraintSystemBuilder<F>,
	) -> Result<(), anyhow::Error> {
		let Some(witness) = builder.witness() else {
			return Ok(());
		};

		let x = witness.get(self.x)?;
		let k = witness.get(self.k)?;

		let t = x + k + self.c;
		let t2 = t.square();
		let t4 = t2.square();
		let t6 = t4 * t2;
		let mut t7 = t6 * t;
		if self.add_k_to_result {
			t7 += k;
		}

		witness.set(self.t2, t2)?;
		witness.set(self.t4, t4)?;
		witness.set(self.t6, t6)?;
		witness.set(self.t7, t7)?;
		Ok(())
	}

	/// The round output variable.
	pub const fn result(&self) -> Variable {
		self.t7
	}
}

#[cfg(test)]
mod tests {
	use ark_bn254::Fr;
	use ark_ff::Field;
	use assert_matches::assert_matches;
	use gadgets_core::{constraint_system::validate::validate_witness, Error};

	use super::*;

	fn bind(builder: &mut ConstraintSystemBuilder<Fr>, name: &str, value: u64) -> Variable {
		let var = builder.add_variable(name);
		if let Some(witness) = builder.witness() {
			witness.set(var, Fr::from(value)).unwrap();
		}
		var
	}

	fn run_round(add_k_to_result: bool) -> Fr {
		let mut builder = ConstraintSystemBuilder::<Fr>::new_with_witness();
		let x = bind(&mut builder, "x", 3);
		let k = bind(&mut builder, "k", 5);

		let round = MiMCe7Round::new(&mut builder, "round", x, k, Fr::from(7u64), add_k_to_result);
		round.generate_constraints(&mut builder);
		round.generate_witness(&mut builder).unwrap();
		let result = builder.witness().unwrap().get(round.result()).unwrap();

		let witness = builder.take_witness().unwrap();
		let constraint_system = builder.build().unwrap();
		assert_eq!(constraint_system.n_constraints(), 4);
		validate_witness(&constraint_system, &witness).unwrap();
		result
	}

	#[test]
	fn test_round() {
		assert_eq!(run_round(false), Fr::from(15u64).pow([7u64]));
	}

	#[test]
	fn test_round_adds_key() {
		assert_eq!(run_round(true), Fr::from(15u64).pow([7u64]) + Fr::from(5u64));
	}

	#[test]
	fn test_result_handle_before_witness() {
		let mut builder = ConstraintSystemBuilder::<Fr>::new_with_witness();
		let x = bind(&mut builder, "x", 3);
		let k = bind(&mut builder, "k", 5);
		let round = MiMCe7Round::new(&mut builder, "round", x, k, Fr::from(7u64), false);

		assert_eq!(builder.label(round.result()), "round::t7");
		assert!(!builder.witness().unwrap().is_bound(round.result()));
		assert_eq!(builder.n_constraints(), 0);
	}

	#[test]
	fn test_witness_requires_bound_inputs() {
		let mut builder = ConstraintSystemBuilder::<Fr>::new_with_witness();
		let x = builder.add_variable("x");
		let k = bind(&mut builder, "k", 5);
		let round = MiMCe7Round::new(&mut builder, "round", x, k, Fr::from(7u64), false);
		round.generate_constraints(&mut builder);

		let err = round.generate_witness(&mut builder).unwrap_err();
		assert_matches!(
			err.downcast_ref::<Error>(),
			Some(Error::UnboundVariable { label }) if label == "x"
		);
	}

	#[test]
	fn test_witness_is_noop_in_verifier_mode() {
		let mut builder = ConstraintSystemBuilder::<Fr>::new();
		let x = builder.add_variable("x");
		let k = builder.add_variable("k");
		let round = MiMCe7Round::new(&mut builder, "round", x, k, Fr::from(7u64), true);
		round.generate_constraints(&mut builder);
		round.generate_witness(&mut builder).unwrap();
		assert_eq!(builder.n_constraints(), 4);
	}

	#[test]
	fn test_wrong_result_is_caught_by_validation() {
		let mut builder = ConstraintSystemBuilder::<Fr>::new_with_witness();
		let x = bind(&mut builder, "x", 3);
		let k = bind(&mut builder, "k", 5);
		let round = MiMCe7Round::new(&mut builder, "round", x, k, Fr::from(7u64), true);
		round.generate_constraints(&mut builder);
		round.generate_witness(&mut builder).unwrap();

		// Pretend the witness forgot to add the key.
		let witness = builder.witness().unwrap();
		let t7 = witness.get(round.result()).unwrap();
		witness.set(round.result(), t7 - Fr::from(5u64)).unwrap();

		let witness = builder.take_witness().unwrap();
		let constraint_system = builder.build().unwrap();
		assert_matches!(
			validate_witness(&constraint_system, &witness),
			Err(Error::UnsatisfiedConstraint { name, index: 3 }) if name == "round::t7"
		);
	}
}
