//! Application layer: identity resolution and service orchestration.

pub mod identity;
pub mod services;
