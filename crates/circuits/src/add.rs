// Copyright 2024 Irreducible Inc.

use ark_ff::Field;
use gadgets_core::{LinearCombination, Variable};

use crate::{
	binary_arithmetic::add_no_carry_with,
	bitwise::{assert_bits, materialize},
	builder::ConstraintSystemBuilder,
};

/// Adds two little-endian `N`-bit integers modulo `2^N`.
///
/// The inputs are constrained to be bits. Each bit position costs four product constraints for
/// the full-adder formula plus one for the output bit; the carries stay linear combinations of the
/// products and never get their own variables.
pub fn add_no_carry<F: Field, const N: usize>(
	builder: &mut ConstraintSystemBuilder<F>,
	name: impl ToString,
	xin: [Variable; N],
	yin: [Variable; N],
) -> Result<[Variable; N], anyhow::Error> {
	builder.push_namespace(name);
	assert_bits(builder, "xin", &xin)?;
	assert_bits(builder, "yin", &yin)?;

	let x = xin.map(LinearCombination::from);
	let y = yin.map(LinearCombination::from);
	let z = add_no_carry_with::<F, _>(builder, &x, &y)?;
	let zout = materialize(builder, "zout", z)?;

	builder.pop_namespace();
	Ok(zout)
}
