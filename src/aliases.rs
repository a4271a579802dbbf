// src/aliases.rs
//! Re-exports secure-gate's secret wrappers
//!
//! Derived key material and raw cipher buffers only ever live inside these
//! types, so they are wiped when a call returns.

pub use secure_gate::{dynamic_alias, fixed_alias};

// Fixed-size secrets
fixed_alias!(DerivedKey32, 32); // SHA-256 of the passphrase, AES-256 key
fixed_alias!(DerivedIv16, 16); // MD5 of the passphrase, CBC initialization vector

// Dynamic secrets
dynamic_alias!(PlainText, Vec<u8>);
dynamic_alias!(CypherText, Vec<u8>);
