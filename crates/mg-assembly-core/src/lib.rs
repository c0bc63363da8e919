//! MG Assembly Schema Types
//!
//! This crate contains the parameter and result records exchanged with the
//! metagenome assembly and contig filtering jobs, with no dependencies on:
//! - Network/RPC
//! - Database
//! - Runtime specifics
//!
//! Records are plain owned values: every field is optional at construction
//! and on the wire, absent fields are omitted from the encoding, and keys
//! outside the declared schema are preserved losslessly in an extras bag.

pub mod assembly;
pub mod error;
pub mod filter;
pub mod upa;
pub mod wire;

// Re-export commonly used types
pub use assembly::{AssemblyPipelineParams, AssemblyPipelineResults};
pub use error::SchemaError;
pub use filter::{FilterContigsParams, FilterContigsResults};
pub use upa::Upa;
pub use wire::{ExtraProps, WireRecord};
