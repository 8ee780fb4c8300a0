//! OS-level interactions.
//!
//! Provides [`EnvLookup`](env::EnvLookup), the seam through which every resolver reads
//! environmental variables.

pub mod env;
