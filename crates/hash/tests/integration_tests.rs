// Copyright 2024 Ulvetanna Inc.

use ark_bn254::Fr;
use ark_ff::{Field, PrimeField};
use gadgets_hash::{round_constants, MiMCParams, MiMCe7};
use hex_literal::hex;
use proptest::prelude::*;
use tiny_keccak::{Hasher, Keccak};

fn keccak256(data: &[u8]) -> [u8; 32] {
	let mut keccak = Keccak::v256();
	keccak.update(data);
	let mut out = [0u8; 32];
	keccak.finalize(&mut out);
	out
}

fn fr(decimal: &str) -> Fr {
	decimal.parse().unwrap()
}

#[test]
fn test_constants_from_empty_seed() {
	let params = MiMCParams::new(b"".as_slice(), 3).unwrap();
	let constants = round_constants::<Fr>(&params);
	// Keccak-256 of the empty string, which is skipped.
	let first = hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470");
	assert_eq!(keccak256(b""), first);

	let c1 = keccak256(&first);
	let c2 = keccak256(&c1);
	assert_eq!(
		constants,
		vec![
			Fr::from(0u64),
			Fr::from_be_bytes_mod_order(&c1),
			Fr::from_be_bytes_mod_order(&c2)
		]
	);
}

#[test]
fn test_default_compression_known_answer() {
	let mimc = MiMCe7::<Fr>::new(&MiMCParams::default());
	let x = fr("3703141493535563179657531719960160174296085208671919316200479060314459804651");
	let y = fr("15683951496311901749339509118960676303290224812129752890706581988986633412003");
	let expected =
		fr("16797922449555994684063104214233396200599693715764605878168345782964540311877");
	assert_eq!(mimc.compress(x, y), expected);
}

#[test]
fn test_constants_are_prefix_stable() {
	let short = round_constants::<Fr>(&MiMCParams::new(b"seed".as_slice(), 10).unwrap());
	let long = round_constants::<Fr>(&MiMCParams::new(b"seed".as_slice(), 20).unwrap());
	assert_eq!(short[..], long[..10]);
}

#[test]
fn test_seed_changes_constants() {
	let a = round_constants::<Fr>(&MiMCParams::new(b"a".as_slice(), 4).unwrap());
	let b = round_constants::<Fr>(&MiMCParams::new(b"b".as_slice(), 4).unwrap());
	assert_eq!(a[0], b[0]);
	assert_ne!(a[1..], b[1..]);
}

proptest! {
	#[test]
	fn test_two_rounds_match_formula(x in any::<u64>(), k in any::<u64>()) {
		let params = MiMCParams::new(b"proptest".as_slice(), 2).unwrap();
		let mimc = MiMCe7::<Fr>::new(&params);
		let (x, k) = (Fr::from(x), Fr::from(k));
		let c1 = mimc.round_constants()[1];

		let round_0 = (x + k).pow([7u64]);
		let expected = (round_0 + k + c1).pow([7u64]) + k;
		prop_assert_eq!(mimc.permute(x, k), expected);
	}
}
