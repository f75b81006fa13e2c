// Copyright 2024 Irreducible Inc.

use ark_ff::Field;

use crate::Variable;

/// Concrete assignment of field elements to the slots of a constraint system.
///
/// Slots that were never bound stay `None`; validation reports them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WitnessIndex<F: Field> {
	values: Vec<Option<F>>,
}

impl<F: Field> WitnessIndex<F> {
	pub fn new(values: Vec<Option<F>>) -> Self {
		Self { values }
	}

	/// A witness with every slot bound.
	pub fn from_values(values: impl IntoIterator<Item = F>) -> Self {
		Self {
			values: values.into_iter().map(Some).collect(),
		}
	}

	pub fn n_vars(&self) -> usize {
		self.values.len()
	}

	pub fn get(&self, var: Variable) -> Option<F> {
		self.values.get(var.index()).copied().flatten()
	}

	pub fn values(&self) -> &[Option<F>] {
		&self.values
	}
}
