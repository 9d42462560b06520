//! Shared contracts between the GridCast frontend and its REST backend.
//!
//! Every wire payload has a typed schema here, validated at the network
//! boundary instead of ad hoc optional field access in view code. The crate
//! also hosts the pure reconciliation and classification logic that the
//! dashboard and the project pages share.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
