//! Constant values for ecelgamal curve operations
//!
//! This crate provides named short-Weierstrass domain parameters. Values are
//! kept as hexadecimal strings so the crate has no big-integer dependency;
//! the algorithms crate parses them when building a group.

pub mod traditional;
