//! Shared domain crate for the HotelFlow dashboard.
//!
//! Everything here is target-independent: entity records, status lookup tables,
//! filter predicates, aggregate computations, the navigation table and the
//! capability interface the UI calls into. The WASM frontend only renders it.

pub mod dashboards;
pub mod data;
pub mod domain;
pub mod shared;
pub mod system;
