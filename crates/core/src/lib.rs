// Copyright 2024-2025 Irreducible Inc.

//! Rank-1 constraint system data model.
//!
//! A constraint system is an ordered list of constraints `A · B = C` over linear combinations of
//! variables. Slot 0 always holds the constant-one variable, which is how constants enter linear
//! combinations. A witness assigns a field element to every slot.

pub mod constraint_system;
pub mod linear_combination;
pub mod variable;
pub mod witness;

pub use constraint_system::{error::Error, Constraint, ConstraintSystem};
pub use linear_combination::LinearCombination;
pub use variable::Variable;
pub use witness::WitnessIndex;
