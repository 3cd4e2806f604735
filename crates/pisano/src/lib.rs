//! # pisano — one-way embeddings and the protocols over them
//!
//! A family of lightweight "embedding" primitives: one-way encodings `E(x)`
//! of an integer into a bounded algebraic space with a homomorphic combine
//! operation, used to build a digital-signature scheme and a
//! zero-knowledge-style proof that one secret integer exceeds another.
//!
//! Three concrete spaces realize the [`embedding::Embedding`] contract:
//! - [`exp::ExpEmbedding`] — discrete exponentiation in a fixed modulus;
//! - [`fib::FibEmbedding`] — Fibonacci matrix powers modulo a large modulus,
//!   whose one-wayness rests on the Pisano period of the modulus being hard
//!   to compute;
//! - [`cyc::CycSqrEmbedding`] — squaring in the end-around-carry space, with
//!   empirically-validated algebra only.
//!
//! The protocols ([`sign`], [`compare`]) are written against the contract
//! alone and never touch raw arithmetic, so new embeddings slot in without
//! protocol changes. Every operation is pure and deterministic for fixed
//! construction parameters.
//!
//! This is NOT a production-ready cryptographic library: no side-channel
//! resistance, and no formal security claim — the one-wayness assumptions
//! are documented per space, not proven.

#![forbid(unsafe_code)]

pub mod compare;
pub mod cyc;
pub mod digest;
pub mod embedding;
pub mod exp;
pub mod fib;
pub mod sign;

pub use compare::ComparisonError;
pub use cyc::{CycPoint, CycSqrEmbedding};
pub use embedding::{AnyPoint, AnyScheme, Embedding, EmbeddingError, EmbeddingScheme};
pub use exp::{ExpEmbedding, ExpPoint};
pub use fib::{FibEmbedding, FibPoint};
pub use sign::{KeyPair, SignatureError, KEY_MUL};
