//! Constants for traditional (pre-quantum) curve-based schemes

pub mod weierstrass;
