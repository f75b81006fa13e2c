// Copyright 2024-2025 Irreducible Inc.

pub mod error;
pub mod validate;


use ark_ff::Field;

use crate::{LinearCombination, Variable};

/// A single rank-1 constraint `a · b = c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint<F: Field> {
	pub name: String,
	pub a: LinearCombination<F>,
	pub b: LinearCombination<F>,
	pub c: LinearCombination<F>,
}

/// An ordered list of rank-1 constraints over named variables.
///
/// `one` is the constant-one slot. It is part of the system rather than a process-wide
/// convention, so two systems never share hidden state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSystem<F: Field> {
	pub one: Variable,
	pub variable_names: Vec<String>,
	pub constraints: Vec<Constraint<F>>,
}

impl<F: Field> ConstraintSystem<F> {
	pub fn n_vars(&self) -> usize {
		self.variable_names.len()
	}

	pub fn n_constraints(&self) -> usize {
		self.constraints.len()
	}

	/// Name the variable was allocated under, or its index if it is out of range.
	pub fn label(&self, var: Variable) -> String {
		self.variable_names
			.get(var.index())
			.cloned()
			.unwrap_or_else(|| var.to_string())
	}
}
