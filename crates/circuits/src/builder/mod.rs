// Copyright 2024-2025 Irreducible Inc.

pub mod constraint_system;
#[cfg(test)]
pub mod test_utils;
pub mod witness;

pub use constraint_system::ConstraintSystemBuilder;
