//! ReachGraph - A lightweight graph reachability toolkit implemented in Rust
//!
//! This crate provides visited-guarded depth-first reachability algorithms
//! over two in-memory graph representations: an arena of value-carrying
//! vertices addressed by stable handles, and an integer adjacency map.
//! The algorithms are read-only consumers of externally built graphs and
//! terminate on any graph shape, cyclic graphs included.

pub mod core;
pub mod services;
