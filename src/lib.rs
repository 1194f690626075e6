pub mod analysis;
pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod server;

pub use analysis::{auto_decode, auto_decode_by_id, DecodeOutcome, Language};
pub use crate::core::transform::{brute_force, decode, encode, encode_text, rot13};
pub use error::CipherError;
