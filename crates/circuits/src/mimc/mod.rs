// Copyright 2024-2025 Irreducible Inc.

//! MiMC with exponent 7 as R1CS gadgets.
//!
//! Every gadget here follows the same three steps: `new` allocates the variables, then
//! `generate_constraints` (when building the constraint system) and `generate_witness` (when
//! proving) may be called, in that order. `result` is valid right after `new`, but its value only
//! exists once the witness has been generated.

mod compression;
mod permutation;
mod round;

pub use compression::MiMCe7Compression;
pub use permutation::MiMCe7Permutation;
pub use round::MiMCe7Round;
