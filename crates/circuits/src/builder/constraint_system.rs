// Copyright 2024-2025 Irreducible Inc.

use std::{cell::RefCell, rc::Rc};

use anyhow::anyhow;
use ark_ff::Field;
use gadgets_core::{Constraint, ConstraintSystem, LinearCombination, Variable, WitnessIndex};
use tracing::instrument;

use crate::builder::witness;

/// Incrementally assembles a rank-1 constraint system, and optionally its witness.
///
/// Slot 0 is allocated on construction as the constant-one variable and is available through
/// [`Self::one`]. Gadgets only keep [`Variable`] handles; the builder owns every constraint and
/// every bound value.
pub struct ConstraintSystemBuilder<F: Field> {
	one: Variable,
	variable_names: Rc<RefCell<Vec<String>>>,
	constraints: Vec<Constraint<F>>,
	witness: Option<witness::Builder<F>>,
	namespace_path: Vec<String>,
}

impl<F: Field> Default for ConstraintSystemBuilder<F> {
	fn default() -> Self {
		Self::new()
	}
}

impl<F: Field> ConstraintSystemBuilder<F> {
	/// A builder that records constraints only, as used for setup and verification.
	pub fn new() -> Self {
		Self {
			one: Variable::new(Variable::ONE_INDEX),
			variable_names: Rc::new(RefCell::new(vec!["one".to_string()])),
			constraints: Vec::new(),
			witness: None,
			namespace_path: Vec::new(),
		}
	}

	/// A builder that records constraints and computes the witness alongside them.
	pub fn new_with_witness() -> Self {
		let mut builder = Self::new();
		let mut witness = witness::Builder::new(builder.variable_names.clone());
		witness.set_unchecked(builder.one, F::one());
		builder.witness = Some(witness);
		builder
	}

	#[instrument("ConstraintSystemBuilder::build", skip_all, level = "debug")]
	pub fn build(self) -> Result<ConstraintSystem<F>, anyhow::Error> {
		let Self {
			one,
			variable_names,
			constraints,
			witness,
			..
		} = self;
		drop(witness);

		let variable_names = Rc::into_inner(variable_names)
			.ok_or_else(|| {
				anyhow!("Failed to build ConstraintSystem: references still exist to variable names")
			})?
			.into_inner();
		tracing::debug!(
			n_vars = variable_names.len(),
			n_constraints = constraints.len(),
			"built constraint system"
		);

		Ok(ConstraintSystem {
			one,
			variable_names,
			constraints,
		})
	}

	pub fn witness(&mut self) -> Option<&mut witness::Builder<F>> {
		self.witness.as_mut()
	}

	pub fn take_witness(&mut self) -> Result<WitnessIndex<F>, anyhow::Error> {
		Ok(Option::take(&mut self.witness)
			.ok_or_else(|| {
				anyhow!(
					"Witness is missing. Are you in verifier mode, or have you already extracted the witness?"
				)
			})?
			.build())
	}

	/// The constant-one variable of this system.
	pub const fn one(&self) -> Variable {
		self.one
	}

	pub fn n_vars(&self) -> usize {
		self.variable_names.borrow().len()
	}

	pub fn n_constraints(&self) -> usize {
		self.constraints.len()
	}

	pub fn constraints(&self) -> &[Constraint<F>] {
		&self.constraints
	}

	/// Full name of a variable, including the namespace it was allocated in.
	pub fn label(&self, var: Variable) -> String {
		self.variable_names
			.borrow()
			.get(var.index())
			.cloned()
			.unwrap_or_else(|| var.to_string())
	}

	pub fn add_variable(&mut self, name: impl ToString) -> Variable {
		let name = self.scoped_name(name);
		let mut variable_names = self.variable_names.borrow_mut();
		let var = Variable::new(variable_names.len());
		variable_names.push(name);
		var
	}

	pub fn add_variables_multiple<const N: usize>(&mut self, name: impl ToString) -> [Variable; N] {
		let name = name.to_string();
		std::array::from_fn(|i| self.add_variable(format!("{name}[{i}]")))
	}

	/// Registers the constraint `a · b = c`.
	pub fn assert_mul(
		&mut self,
		name: impl ToString,
		a: impl Into<LinearCombination<F>>,
		b: impl Into<LinearCombination<F>>,
		c: impl Into<LinearCombination<F>>,
	) {
		let name = self.scoped_name(name);
		self.constraints.push(Constraint {
			name,
			a: a.into(),
			b: b.into(),
			c: c.into(),
		});
	}

	/// Registers `var · (var − 1) = 0`, which holds exactly when `var` is 0 or 1.
	pub fn assert_boolean(&mut self, name: impl ToString, var: Variable) {
		let one = self.one;
		self.assert_mul(name, var, LinearCombination::from(var) - one, LinearCombination::zero());
	}

	/// Allocates a variable constrained to equal `lc`, binding its value in witness mode.
	pub fn add_linear_combination(
		&mut self,
		name: impl ToString,
		lc: LinearCombination<F>,
	) -> Result<Variable, anyhow::Error> {
		let name = name.to_string();
		let var = self.add_variable(&name);
		if let Some(witness) = self.witness() {
			let value = witness.evaluate(&lc)?;
			witness.set(var, value)?;
		}
		let one = self.one;
		self.assert_mul(name, lc, one, var);
		Ok(var)
	}

	fn scoped_name(&self, name: impl ToString) -> String {
		let name = name.to_string();
		if self.namespace_path.is_empty() {
			name
		} else {
			format!("{}::{name}", self.namespace_path.join("::"))
		}
	}

	/// Anything pushed to the namespace becomes part of the names of variables and constraints
	/// added afterwards, which is useful for debugging.
	///
	/// Use `pop_namespace(&mut self)` to remove the latest name.
	///
	/// Example
	/// ```
	/// use ark_bn254::Fr;
	/// use gadgets_circuits::builder::ConstraintSystemBuilder;
	///
	/// let mut builder = ConstraintSystemBuilder::<Fr>::new();
	/// builder.push_namespace("a");
	/// let x = builder.add_variable("x");
	/// builder.push_namespace("b");
	/// let y = builder.add_variable("y");
	/// builder.pop_namespace();
	/// builder.pop_namespace();
	/// let z = builder.add_variable("z");
	///
	/// let system = builder.build().unwrap();
	/// assert_eq!(system.label(x), "a::x");
	/// assert_eq!(system.label(y), "a::b::y");
	/// assert_eq!(system.label(z), "z");
	/// ```
	pub fn push_namespace(&mut self, name: impl ToString) {
		self.namespace_path.push(name.to_string());
	}

	pub fn pop_namespace(&mut self) {
		self.namespace_path.pop();
	}
}
