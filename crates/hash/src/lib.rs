// Copyright 2023 Ulvetanna Inc.

//! Native implementations of the permutations that have circuit counterparts.

pub mod mimc;

pub use mimc::*;
