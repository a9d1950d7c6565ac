//! Kani proof harnesses
//!
//! - `operation_proofs.rs`: size conservation and extreme correctness of
//!   each operation on small symbolic heaps
//! - `index_proofs.rs`: implicit-tree index arithmetic

#[cfg(kani)]
#[path = "index_proofs.rs"]
mod index_proofs;
#[cfg(kani)]
#[path = "operation_proofs.rs"]
mod operation_proofs;
