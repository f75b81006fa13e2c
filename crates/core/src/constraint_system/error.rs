// Copyright 2024 Irreducible Inc.

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("value must be 0 or 1 (element {index} of the operand)")]
	InvalidBooleanValue { index: usize },

	#[error("expected a bit vector of length {expected}, got {actual}")]
	InvalidBitLength { expected: usize, actual: usize },

	#[error("operands must have the same length, got {lhs} and {rhs}")]
	OperandLengthMismatch { lhs: usize, rhs: usize },

	#[error("variable {label} has no value bound in the witness")]
	UnboundVariable { label: String },

	#[error("variable index {index} is out of range for a system with {n_vars} variables")]
	VariableOutOfRange { index: usize, n_vars: usize },

	#[error("the constant-one slot must hold the value 1")]
	InvalidConstantOne,

	#[error("witness has {got} slots but the constraint system has {expected} variables")]
	WitnessSizeMismatch { expected: usize, got: usize },

	#[error("constraint {name} (index {index}) is not satisfied by the witness")]
	UnsatisfiedConstraint { name: String, index: usize },
}
