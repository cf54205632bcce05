//! Working-Time Compliance Engine for the German Arbeitszeitgesetz (ArbZG)
//!
//! This crate turns a day's raw clock events into effective work and break
//! minutes, deducts missing mandatory breaks, and checks the day against the
//! statutory daily maximum, break and rest-period rules. Every operation is a
//! pure function over in-memory values.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
