// Copyright 2024 Irreducible Inc.

use ark_ff::Field;
use gadgets_core::{LinearCombination, Variable};

use crate::{
	binary_arithmetic::{check_boolean, xor_with},
	builder::ConstraintSystemBuilder,
};

/// Constrains every variable in `bits` to be 0 or 1.
///
/// In witness mode the bound values are checked first, so a non-boolean input fails here with
/// [`gadgets_core::Error::InvalidBooleanValue`] instead of producing an unsatisfiable witness.
pub fn assert_bits<F: Field>(
	builder: &mut ConstraintSystemBuilder<F>,
	name: impl ToString,
	bits: &[Variable],
) -> Result<(), anyhow::Error> {
	builder.push_namespace(name);
	if let Some(witness) = builder.witness() {
		let values = bits
			.iter()
			.map(|&bit| witness.get(bit))
			.collect::<Result<Vec<_>, _>>()?;
		check_boolean(&values)?;
	}
	for (i, &bit) in bits.iter().enumerate() {
		builder.assert_boolean(format!("bit[{i}]"), bit);
	}
	builder.pop_namespace();
	Ok(())
}

/// Allocates one output variable per linear combination.
pub(crate) fn materialize<F: Field, const N: usize>(
	builder: &mut ConstraintSystemBuilder<F>,
	name: &str,
	lcs: Vec<LinearCombination<F>>,
) -> Result<[Variable; N], anyhow::Error> {
	let mut out = [builder.one(); N];
	anyhow::ensure!(lcs.len() == N, "expected {N} outputs, got {}", lcs.len());
	for (i, (dst, lc)) in out.iter_mut().zip(lcs).enumerate() {
		*dst = builder.add_linear_combination(format!("{name}[{i}]"), lc)?;
	}
	Ok(out)
}

/// Bitwise XOR of two bit vectors, `z_i = x_i + y_i − 2·x_i·y_i`.
pub fn xor<F: Field, const N: usize>(
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
	let z = xor_with::<F, _>(builder, &x, &y)?;
	let zout = materialize(builder, "out", z)?;

	builder.pop_namespace();
	Ok(zout)
}
