// Copyright 2024-2025 Irreducible Inc.

//! Field arithmetic that can be carried out either on concrete values or inside a constraint
//! system.
//!
//! A formula written once against [`FieldArith`] yields the witness when run on [`Native`] and
//! the constraints (plus the witness, in witness mode) when run on a
//! [`ConstraintSystemBuilder`]. Both phases therefore come from the same expression.

use ark_ff::Field;
use gadgets_core::{Error, LinearCombination, Variable};

use crate::builder::ConstraintSystemBuilder;

pub trait FieldArith<F: Field> {
	type Value: Clone;

	fn constant(&mut self, value: F) -> Self::Value;

	fn add(&mut self, lhs: &Self::Value, rhs: &Self::Value) -> Self::Value;

	fn sub(&mut self, lhs: &Self::Value, rhs: &Self::Value) -> Self::Value;

	fn scale(&mut self, value: &Self::Value, coeff: F) -> Self::Value;

	fn mul(&mut self, lhs: &Self::Value, rhs: &Self::Value) -> Result<Self::Value, Error>;
}

/// Evaluation on concrete field elements.
#[derive(Debug, Default, Clone, Copy)]
pub struct Native;

impl<F: Field> FieldArith<F> for Native {
	type Value = F;

	fn constant(&mut self, value: F) -> F {
		value
	}

	fn add(&mut self, lhs: &F, rhs: &F) -> F {
		*lhs + rhs
	}

	fn sub(&mut self, lhs: &F, rhs: &F) -> F {
		*lhs - rhs
	}

	fn scale(&mut self, value: &F, coeff: F) -> F {
		*value * coeff
	}

	fn mul(&mut self, lhs: &F, rhs: &F) -> Result<F, Error> {
		Ok(*lhs * rhs)
	}
}

/// Evaluation over linear combinations.
///
/// Additions and scalings stay linear and cost nothing. Each product of two non-constant
/// operands allocates one variable and one constraint; products with a constant operand are
/// folded into a scaling.
impl<F: Field> FieldArith<F> for ConstraintSystemBuilder<F> {
	type Value = LinearCombination<F>;

	fn constant(&mut self, value: F) -> LinearCombination<F> {
		LinearCombination::from_terms([(self.one(), value)])
	}

	fn add(
		&mut self,
		lhs: &LinearCombination<F>,
		rhs: &LinearCombination<F>,
	) -> LinearCombination<F> {
		(lhs.clone() + rhs.clone()).compact()
	}

	fn sub(
		&mut self,
		lhs: &LinearCombination<F>,
		rhs: &LinearCombination<F>,
	) -> LinearCombination<F> {
		(lhs.clone() - rhs.clone()).compact()
	}

	fn scale(&mut self, value: &LinearCombination<F>, coeff: F) -> LinearCombination<F> {
		(value.clone() * coeff).compact()
	}

	fn mul(
		&mut self,
		lhs: &LinearCombination<F>,
		rhs: &LinearCombination<F>,
	) -> Result<LinearCombination<F>, Error> {
		if let Some(c) = constant_value(lhs, self.one()) {
			return Ok(self.scale(rhs, c));
		}
		if let Some(c) = constant_value(rhs, self.one()) {
			return Ok(self.scale(lhs, c));
		}

		let product = self.add_variable(format!("mul_{}", self.n_vars()));
		if let Some(witness) = self.witness() {
			let value = witness.evaluate(lhs)? * witness.evaluate(rhs)?;
			witness.set(product, value)?;
		}
		self.assert_mul(format!("mul_{}", product.index()), lhs.clone(), rhs.clone(), product);
		Ok(product.into())
	}
}

/// The value of `lc` if it only refers to the constant-one variable.
fn constant_value<F: Field>(lc: &LinearCombination<F>, one: Variable) -> Option<F> {
	lc.terms()
		.iter()
		.try_fold(F::zero(), |acc, &(var, coeff)| (var == one).then(|| acc + coeff))
}
