//! Various general-purpose collection types.
//!
//! # Purpose
//! I wrote these types to learn about each of the data structures themselves, but also concepts
//! such as ownership, reference counting and structural sharing.
//!
//! # Method
//! Collections here are persistent: operations build new values rather than modifying existing
//! ones, so anything that can be shared between the old and new value is.

#[cfg(feature = "cons")]
pub mod cons;
