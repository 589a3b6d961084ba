//! A persistent cons list, [`Link`](collections::cons::Link), and the handful of functions that
//! build new lists out of existing ones.
//!
//! # Purpose
//! This crate is a learning exercise in recursive data structures: an immutable list made of
//! nested two-part cells, where each cell holds one element and the rest of the sequence. Writing
//! it out by hand is a good excuse to think about shared ownership and about how far "just
//! recurse" gets you before the stack runs out.
//!
//! # Method
//! Lists are never mutated after they are built, so tails are shared between lists using
//! reference counting. Every traversal is a loop rather than a recursive call, including
//! formatting, comparison and dropping, which means a list of a million elements is as safe to
//! use as a list of three.
//!
//! # Error Handling
//! There is very little that can go wrong with an immutable list. Building a Link from a
//! dynamically typed tail can fail, as can parsing a Link from its debug form. Both use strongly
//! typed errors implementing [`Error`](std::error::Error), and the former follows the usual
//! pattern of a `try_` method returning a [`Result`] alongside a method that panics instead.
//!
//! # Dependencies
//! This crate depends on `derive_more` for its derive macros, because they remove the need for
//! some very repetitive error and enum boilerplate.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
