//! Password hashing and key derivation functions.

pub mod catena;

pub use catena::{Catena, CatenaParams, Topology};
