//! Shared building blocks for the staking pool contracts.
//!
//! This crate provides:
//! - [`authority`]: the single-owner check that gates administrative calls
//!   (the pool's `is_owner` collaborator) and ownership hand-over.

#![cfg_attr(not(feature = "std"), no_std)]

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod authority;
