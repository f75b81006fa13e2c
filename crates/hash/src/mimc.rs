// Copyright 2024-2025 Irreducible Inc.

//! MiMC with the S-box `t ↦ t^7` over a prime field.
//!
//! A round maps `x` to `(x + k + c_i)^7`. The key is added once more after the last round, so the
//! permutation is `E_k(x) = R_{n-1}(… R_0(x) …) + k`. Round constant 0 is zero and the others are
//! derived from a seed by iterated Keccak-256.

use ark_ff::PrimeField;
use tiny_keccak::{Hasher, Keccak};

/// Seed used to derive the default round constants.
pub const DEFAULT_SEED: &[u8] = b"clearmatics_mt_seed";

/// Number of rounds of the default instance.
pub const DEFAULT_N_ROUNDS: usize = 91;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
	#[error("a MiMC instance needs at least one round")]
	ZeroRounds,
}

/// Parameters of a MiMC instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiMCParams {
	seed: Vec<u8>,
	n_rounds: usize,
}

impl MiMCParams {
	pub fn new(seed: impl Into<Vec<u8>>, n_rounds: usize) -> Result<Self, Error> {
		if n_rounds == 0 {
			return Err(Error::ZeroRounds);
		}
		Ok(Self {
			seed: seed.into(),
			n_rounds,
		})
	}

	pub fn seed(&self) -> &[u8] {
		&self.seed
	}

	pub const fn n_rounds(&self) -> usize {
		self.n_rounds
	}
}

impl Default for MiMCParams {
	fn default() -> Self {
		Self {
			seed: DEFAULT_SEED.to_vec(),
			n_rounds: DEFAULT_N_ROUNDS,
		}
	}
}

/// Derives `n_rounds` round constants.
///
/// `c_0 = 0`, and for `i >= 1`, `c_i` is the `(i + 1)`-th iterated Keccak-256 digest of `seed`,
/// read big-endian and reduced modulo the field order. The first digest of the seed is never used
/// as a constant.
pub fn round_constants<F: PrimeField>(params: &MiMCParams) -> Vec<F> {
	let mut constants = Vec::with_capacity(params.n_rounds);
	constants.push(F::zero());

	let mut digest = keccak256(&params.seed);
	for _ in 1..params.n_rounds {
		digest = keccak256(&digest);
		constants.push(F::from_be_bytes_mod_order(&digest));
	}
	constants
}

fn keccak256(data: &[u8]) -> [u8; 32] {
	let mut keccak = Keccak::v256();
	keccak.update(data);
	let mut out = [0u8; 32];
	keccak.finalize(&mut out);
	out
}

/// One round, `(x + k + c)^7`, using four multiplications.
#[inline]
pub fn mimc_e7_round<F: PrimeField>(x: F, k: F, c: F) -> F {
	let t = x + k + c;
	let t2 = t.square();
	let t4 = t2.square();
	let t6 = t4 * t2;
	t6 * t
}

/// The MiMC permutation with exponent 7, keyed per call.
#[derive(Debug, Clone)]
pub struct MiMCe7<F: PrimeField> {
	round_constants: Vec<F>,
}

impl<F: PrimeField> MiMCe7<F> {
	pub fn new(params: &MiMCParams) -> Self {
		Self {
			round_constants: round_constants(params),
		}
	}

	pub fn round_constants(&self) -> &[F] {
		&self.round_constants
	}

	pub fn n_rounds(&self) -> usize {
		self.round_constants.len()
	}

	/// Encrypts `x` under key `k`.
	pub fn permute(&self, x: F, k: F) -> F {
		let state = self
			.round_constants
			.iter()
			.fold(x, |state, &c| mimc_e7_round(state, k, c));
		state + k
	}

	/// Miyaguchi–Preneel compression of two field elements, `E_y(x) + x + y`.
	pub fn compress(&self, x: F, y: F) -> F {
		self.permute(x, y) + x + y
	}
}

impl<F: PrimeField> Default for MiMCe7<F> {
	fn default() -> Self {
		Self::new(&MiMCParams::default())
	}
}
