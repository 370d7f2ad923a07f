//! Claims Domain
//!
//! This crate models customer claims as they move through the portal:
//! a claim is filed against an order, starts out `Pending`, and is
//! updated by support staff until it reaches a terminal status.

pub mod claim;
pub mod notify;
pub mod status;

pub use claim::{Claim, ClaimPatch};
pub use notify::{StatusNotifier, StatusUpdate};
pub use status::ClaimStatus;
