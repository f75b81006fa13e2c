// Copyright 2024-2025 Irreducible Inc.

use ark_ff::Field;
use gadgets_utils::{bail, ensure};
use tracing::instrument;

use super::{error::Error, ConstraintSystem};
use crate::{LinearCombination, Variable, WitnessIndex};

/// Checks that `witness` binds every variable of `constraint_system`, that the constant-one slot
/// holds one, and that every constraint holds.
///
/// This is the only place where a disagreement between constraint generation and witness
/// generation becomes visible.
#[instrument("constraint_system::validate_witness", skip_all, level = "debug")]
pub fn validate_witness<F: Field>(
	constraint_system: &ConstraintSystem<F>,
	witness: &WitnessIndex<F>,
) -> Result<(), Error> {
	ensure!(
		witness.n_vars() == constraint_system.n_vars(),
		Error::WitnessSizeMismatch {
			expected: constraint_system.n_vars(),
			got: witness.n_vars(),
		}
	);

	for index in 0..constraint_system.n_vars() {
		lookup(constraint_system, witness, Variable::new(index))?;
	}

	ensure!(
		witness.get(constraint_system.one) == Some(F::one()),
		Error::InvalidConstantOne
	);

	for (index, constraint) in constraint_system.constraints.iter().enumerate() {
		let eval = |lc: &LinearCombination<F>| {
			lc.evaluate(|var| lookup(constraint_system, witness, var))
		};
		if eval(&constraint.a)? * eval(&constraint.b)? != eval(&constraint.c)? {
			tracing::debug!(name = %constraint.name, index, "unsatisfied constraint");
			bail!(Error::UnsatisfiedConstraint {
				name: constraint.name.clone(),
				index,
			});
		}
	}

	Ok(())
}

fn lookup<F: Field>(
	constraint_system: &ConstraintSystem<F>,
	witness: &WitnessIndex<F>,
	var: Variable,
) -> Result<F, Error> {
	if var.index() >= constraint_system.n_vars() {
		bail!(Error::VariableOutOfRange {
			index: var.index(),
			n_vars: constraint_system.n_vars(),
		});
	}
	witness.get(var).ok_or_else(|| Error::UnboundVariable {
		label: constraint_system.label(var),
	})
}
