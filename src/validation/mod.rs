//! Checking proofs that did not come from the search

pub mod proof_check;

pub use proof_check::{verify_proof, ProofTrace};
