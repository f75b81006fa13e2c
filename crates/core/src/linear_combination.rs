// Copyright 2024-2025 Irreducible Inc.

use std::ops::{Add, Mul, Neg, Sub};

use ark_ff::Field;
use itertools::Itertools;

use crate::Variable;

/// A weighted sum of variables, `Σ coeff_i · var_i`.
///
/// Constants are expressed as multiples of the constant-one variable of the owning constraint
/// system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearCombination<F: Field> {
	terms: Vec<(Variable, F)>,
}

impl<F: Field> Default for LinearCombination<F> {
	fn default() -> Self {
		Self { terms: Vec::new() }
	}
}

impl<F: Field> LinearCombination<F> {
	/// The empty sum, which evaluates to zero.
	pub fn zero() -> Self {
		Self::default()
	}

	pub fn from_terms(terms: impl IntoIterator<Item = (Variable, F)>) -> Self {
		Self {
			terms: terms.into_iter().collect(),
		}
	}

	pub fn add_term(&mut self, var: Variable, coeff: F) {
		self.terms.push((var, coeff));
	}

	pub fn terms(&self) -> &[(Variable, F)] {
		&self.terms
	}

	pub fn is_empty(&self) -> bool {
		self.terms.is_empty()
	}

	/// Merges repeated variables and drops zero coefficients.
	pub fn compact(self) -> Self {
		let terms = self
			.terms
			.into_iter()
			.sorted_by_key(|(var, _)| *var)
			.coalesce(|(var_a, coeff_a), (var_b, coeff_b)| {
				if var_a == var_b {
					Ok((var_a, coeff_a + coeff_b))
				} else {
					Err(((var_a, coeff_a), (var_b, coeff_b)))
				}
			})
			.filter(|(_, coeff)| !coeff.is_zero())
			.collect();
		Self { terms }
	}

	/// Evaluates the sum given a lookup of variable values.
	pub fn evaluate<E>(
		&self,
		mut value_of: impl FnMut(Variable) -> Result<F, E>,
	) -> Result<F, E> {
		self.terms
			.iter()
			.try_fold(F::zero(), |acc, &(var, coeff)| Ok(acc + coeff * value_of(var)?))
	}
}

impl<F: Field> From<Variable> for LinearCombination<F> {
	fn from(var: Variable) -> Self {
		Self {
			terms: vec![(var, F::one())],
		}
	}
}

impl<F: Field> Add for LinearCombination<F> {
	type Output = Self;

	fn add(mut self, rhs: Self) -> Self {
		self.terms.extend(rhs.terms);
		self
	}
}

impl<F: Field> Add<Variable> for LinearCombination<F> {
	type Output = Self;

	fn add(mut self, rhs: Variable) -> Self {
		self.add_term(rhs, F::one());
		self
	}
}

impl<F: Field> Sub for LinearCombination<F> {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self {
		self + (-rhs)
	}
}

impl<F: Field> Sub<Variable> for LinearCombination<F> {
	type Output = Self;

	fn sub(mut self, rhs: Variable) -> Self {
		self.add_term(rhs, -F::one());
		self
	}
}

impl<F: Field> Neg for LinearCombination<F> {
	type Output = Self;

	fn neg(self) -> Self {
		self * -F::one()
	}
}

impl<F: Field> Mul<F> for LinearCombination<F> {
	type Output = Self;

	fn mul(mut self, rhs: F) -> Self {
		for (_, coeff) in &mut self.terms {
			*coeff *= rhs;
		}
		self
	}
}
