//! Request guards.
//!
//! Handlers call `AuthGuard::require` as their first step; there is no router-level
//! auth layer.

pub mod auth;

#[cfg(test)]
mod test;
