// Copyright 2024-2025 Irreducible Inc.

use std::{cell::RefCell, rc::Rc};

use ark_ff::Field;
use gadgets_core::{Error, LinearCombination, Variable, WitnessIndex};
use gadgets_utils::{bail, ensure};

/// Values bound to the variables of a [`super::ConstraintSystemBuilder`] in witness mode.
pub struct Builder<F: Field> {
	variable_names: Rc<RefCell<Vec<String>>>,
	values: Vec<Option<F>>,
}

impl<F: Field> Builder<F> {
	pub fn new(variable_names: Rc<RefCell<Vec<String>>>) -> Self {
		Self {
			variable_names,
			values: Vec::new(),
		}
	}

	/// Value bound to `var`.
	///
	/// Fails if the variable does not exist or nothing has been bound to it yet.
	pub fn get(&self, var: Variable) -> Result<F, Error> {
		self.check_in_range(var)?;
		match self.values.get(var.index()).copied().flatten() {
			Some(value) => Ok(value),
			None => bail!(Error::UnboundVariable {
				label: self.variable_names.borrow()[var.index()].clone(),
			}),
		}
	}

	pub fn is_bound(&self, var: Variable) -> bool {
		matches!(self.values.get(var.index()), Some(Some(_)))
	}

	/// Binds `value` to `var`, overwriting any earlier value.
	pub fn set(&mut self, var: Variable, value: F) -> Result<(), Error> {
		self.check_in_range(var)?;
		self.set_unchecked(var, value);
		Ok(())
	}

	pub(super) fn set_unchecked(&mut self, var: Variable, value: F) {
		let index = var.index();
		if index >= self.values.len() {
			self.values.resize(index + 1, None);
		}
		self.values[index] = Some(value);
	}

	/// Evaluates `lc` over the values bound so far.
	pub fn evaluate(&self, lc: &LinearCombination<F>) -> Result<F, Error> {
		lc.evaluate(|var| self.get(var))
	}

	pub fn build(self) -> WitnessIndex<F> {
		let mut values = self.values;
		values.resize(self.variable_names.borrow().len(), None);
		WitnessIndex::new(values)
	}

	fn check_in_range(&self, var: Variable) -> Result<(), Error> {
		let n_vars = self.variable_names.borrow().len();
		ensure!(
			var.index() < n_vars,
			Error::VariableOutOfRange {
				index: var.index(),
				n_vars,
			}
		);
		Ok(())
	}
}
