// Copyright 2024-2025 Irreducible Inc.

//! Conversions between native integers, bit vectors and field elements.
//!
//! Bit order matters everywhere here and is part of each function's name or documentation:
//! `_le` vectors start with the least significant bit, `_be` vectors with the most significant.

use ark_ff::{BigInteger, Field};
use gadgets_core::{Error, Variable};
use gadgets_utils::ensure;

use crate::builder::ConstraintSystemBuilder;

/// The `bit_len` least significant bits of `x`, least significant first.
///
/// Positions past the 64 bits of `x` are `false`.
pub fn bits_from_int_le(x: u64, bit_len: usize) -> Vec<bool> {
	(0..bit_len)
		.map(|i| i < u64::BITS as usize && (x >> i) & 1 == 1)
		.collect()
}

/// Reverses the byte order of a 64-bit vector, keeping the bit order within each byte.
///
/// Byte `i` is swapped with byte `7 − i`, so applying this twice is the identity.
pub fn swap_endianness_u64(bits: &[bool]) -> Result<Vec<bool>, Error> {
	ensure!(
		bits.len() == 64,
		Error::InvalidBitLength {
			expected: 64,
			actual: bits.len(),
		}
	);
	Ok(bits.chunks_exact(8).rev().flatten().copied().collect())
}

/// Packs a bit vector into a field element, the first bit being the most significant.
///
/// The result is `Σ bits[n − 1 − i] · 2^i`, reduced modulo the field order when `bits` is longer
/// than the field's bit size.
pub fn pack_bits<F: Field>(bits: &[bool]) -> F {
	bits.iter()
		.fold(F::zero(), |acc, &bit| acc.double() + F::from(bit))
}

/// Maps constant bits to variables: `true` to the constant-one variable of `builder`, `false` to
/// the caller-supplied `zero` variable.
pub fn bits_to_constants<F: Field>(
	builder: &ConstraintSystemBuilder<F>,
	bits: &[bool],
	zero: Variable,
) -> Vec<Variable> {
	let one = builder.one();
	bits.iter()
		.map(|&bit| if bit { one } else { zero })
		.collect()
}

/// Big-endian decomposition of a non-negative integer into 0/1 field elements.
///
/// The length is the bit length of `n`, without leading zeros, and zero decomposes to `[0]`.
pub fn bits_from_uint_be<F: Field, B: BigInteger>(n: &B) -> Vec<F> {
	let bit_len = (n.num_bits() as usize).max(1);
	(0..bit_len)
		.rev()
		.map(|i| F::from(n.get_bit(i)))
		.collect()
}
