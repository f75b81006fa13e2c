// Copyright 2024 Irreducible Inc.

use std::fmt;

/// Handle to a slot in a constraint system.
///
/// Variables are plain indices; the constraint system owns the values bound to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(usize);

impl Variable {
	/// Slot reserved for the constant-one variable in every constraint system.
	pub const ONE_INDEX: usize = 0;

	pub const fn new(index: usize) -> Self {
		Self(index)
	}

	pub const fn index(&self) -> usize {
		self.0
	}
}

impl fmt::Display for Variable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "v{}", self.0)
	}
}
