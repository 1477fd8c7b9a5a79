//! Trait definitions for the ecelgamal library

pub mod pke;
pub mod serialize;

pub use pke::Pke;
pub use serialize::SerializeSecret;
