// Copyright 2024 Irreducible Inc.

//! R1CS gadgets: bit encodings, binary arithmetic and the MiMC permutation.
//!
//! Circuits are assembled on a [`builder::ConstraintSystemBuilder`]. A builder created with
//! [`builder::ConstraintSystemBuilder::new`] only records constraints; one created with
//! [`builder::ConstraintSystemBuilder::new_with_witness`] also computes the witness as gadgets
//! are applied.

pub mod add;
pub mod arith;
pub mod binary_arithmetic;
pub mod bitwise;
pub mod builder;
pub mod encoding;
pub mod mimc;
pub mod pack;
pub mod unconstrained;
