// Copyright 2024 Irreducible Inc.

use anyhow::Result;
use ark_ff::Field;
use gadgets_core::{LinearCombination, Variable};

use crate::builder::ConstraintSystemBuilder;

/// Packs bit variables into one variable, the first bit being the most significant.
///
/// This is the in-circuit counterpart of [`crate::encoding::pack_bits`]. The bits are not
/// constrained to be boolean here.
pub fn pack<F: Field>(
	builder: &mut ConstraintSystemBuilder<F>,
	name: impl ToString,
	bits: &[Variable],
) -> Result<Variable> {
	let mut weight = F::one();
	let mut lc = LinearCombination::zero();
	for &bit in bits.iter().rev() {
		lc.add_term(bit, weight);
		weight.double_in_place();
	}
	builder.add_linear_combination(name, lc)
}

#[cfg(test)]
mod tests {
	use ark_bn254::Fr;

	use super::*;
	use crate::{
		builder::test_utils::test_circuit, encoding::pack_bits, unconstrained::unconstrained_bits,
	};

	#[test]
	fn test_pack_matches_native() {
		test_circuit::<Fr>(|builder| {
			let bits = unconstrained_bits::<_, 40>(builder, "bits")?;
			let packed = pack(builder, "packed", &bits)?;

			if let Some(witness) = builder.witness() {
				let values = bits
					.iter()
					.map(|&bit| -> Result<bool> { Ok(witness.get(bit)? == Fr::from(1u64)) })
					.collect::<Result<Vec<_>>>()?;
				assert_eq!(witness.get(packed)?, pack_bits::<Fr>(&values));
			}
			Ok(())
		})
		.unwrap();
	}
}
