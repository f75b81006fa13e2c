// Copyright 2024-2025 Irreducible Inc.

//! Binary addition and XOR on boolean field elements, expressed with field operations only.
//!
//! The `*_with` functions are the formulas, generic over [`FieldArith`] so the same expression
//! produces witness values and constraints. [`add_no_carry`] and [`xor`] are the checked entry
//! points on concrete values.

use ark_ff::Field;
use gadgets_core::Error;
use gadgets_utils::ensure;

use crate::arith::{FieldArith, Native};

/// Checks `(v − 1) · v = 0` for every element, i.e. that every value is 0 or 1.
pub fn check_boolean<F: Field>(values: &[F]) -> Result<(), Error> {
	for (index, value) in values.iter().enumerate() {
		ensure!((*value - F::one()) * value == F::zero(), Error::InvalidBooleanValue { index });
	}
	Ok(())
}

/// Bitwise XOR, `a_i + b_i − 2·a_i·b_i`.
pub fn xor_with<F: Field, A: FieldArith<F>>(
	arith: &mut A,
	a: &[A::Value],
	b: &[A::Value],
) -> Result<Vec<A::Value>, Error> {
	check_lengths(a, b)?;
	a.iter()
		.zip(b)
		.map(|(a_i, b_i)| {
			let ab = arith.mul(a_i, b_i)?;
			let a_plus_b = arith.add(a_i, b_i);
			let two_ab = arith.scale(&ab, F::from(2u64));
			Ok(arith.sub(&a_plus_b, &two_ab))
		})
		.collect()
}

/// Little-endian ripple-carry addition modulo `2^len`; the carry out of the top bit is dropped.
///
/// Per position, with `c` the incoming carry (zero for bit 0):
///
/// ```text
/// sum   = a + b + c − 2ab − 2ac − 2bc + 4abc
/// carry = ab + ac + bc − 2abc
/// ```
pub fn add_no_carry_with<F: Field, A: FieldArith<F>>(
	arith: &mut A,
	a: &[A::Value],
	b: &[A::Value],
) -> Result<Vec<A::Value>, Error> {
	check_lengths(a, b)?;
	let two = F::from(2u64);
	let four = F::from(4u64);

	let mut carry = arith.constant(F::zero());
	let mut sum = Vec::with_capacity(a.len());
	for (a_i, b_i) in a.iter().zip(b) {
		let ab = arith.mul(a_i, b_i)?;
		let ac = arith.mul(a_i, &carry)?;
		let bc = arith.mul(b_i, &carry)?;
		let abc = arith.mul(&ab, &carry)?;

		let linear = arith.add(a_i, b_i);
		let linear = arith.add(&linear, &carry);
		let pairs = arith.add(&ab, &ac);
		let pairs = arith.add(&pairs, &bc);

		let two_pairs = arith.scale(&pairs, two);
		let four_abc = arith.scale(&abc, four);
		let sum_i = arith.sub(&linear, &two_pairs);
		sum.push(arith.add(&sum_i, &four_abc));

		let two_abc = arith.scale(&abc, two);
		carry = arith.sub(&pairs, &two_abc);
	}
	Ok(sum)
}

/// `a + b mod 2^N` on little-endian bit vectors.
///
/// Fails with [`Error::InvalidBooleanValue`] if any element of either operand is not 0 or 1. Both
/// operands are checked before anything is computed.
pub fn add_no_carry<F: Field, const N: usize>(a: &[F; N], b: &[F; N]) -> Result<[F; N], Error> {
	check_boolean(a)?;
	check_boolean(b)?;
	let sum = add_no_carry_with::<F, Native>(&mut Native, a, b)?;
	Ok(to_array(sum))
}

/// Bitwise XOR of two bit vectors.
///
/// Fails with [`Error::InvalidBooleanValue`] if any element of either operand is not 0 or 1.
pub fn xor<F: Field, const N: usize>(a: &[F; N], b: &[F; N]) -> Result<[F; N], Error> {
	check_boolean(a)?;
	check_boolean(b)?;
	let out = xor_with::<F, Native>(&mut Native, a, b)?;
	Ok(to_array(out))
}

fn check_lengths<T>(a: &[T], b: &[T]) -> Result<(), Error> {
	ensure!(
		a.len() == b.len(),
		Error::OperandLengthMismatch {
			lhs: a.len(),
			rhs: b.len(),
		}
	);
	Ok(())
}

fn to_array<F: Field, const N: usize>(values: Vec<F>) -> [F; N] {
	let mut out = [F::zero(); N];
	for (dst, src) in out.iter_mut().zip(values) {
		*dst = src;
	}
	out
}
