//! qrelease - release identity and disk image layout for the Amazon Q CLI
//!
//! This crate holds the names and identifiers every release artifact is
//! stamped with, the macOS disk image layout handed to dmgbuild, and the
//! small amount of release plumbing that reads them.

// Enforce strict code quality and reliability
#![deny(
    // Safety
    unsafe_code,

    // Correctness
    missing_debug_implementations,
    unreachable_pub,

    // Future compatibility
    future_incompatible,

    // Rust 2018 idioms
    rust_2018_idioms,
)]
#![warn(
    // Documentation
    missing_docs,

    // Error handling best practices
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::unimplemented,
    clippy::todo,

    // Code clarity and maintainability
    clippy::cognitive_complexity,
    clippy::type_complexity,

    // Best practices
    clippy::wildcard_imports,
    clippy::enum_glob_use,
    clippy::if_not_else,
    clippy::explicit_iter_loop,
)]
#![allow(
    missing_docs, // constants and plain data fields are self-describing
)]

pub mod api;
pub mod dmg;
pub mod exceptions;
pub mod exit_codes;
pub mod identity;
pub mod logger;
pub mod release;
pub mod version;

// Re-export main API functions
pub use api::{
    DmgOptions, IdentityFormat, ReleasePlan, identity_report, load_descriptor, prepare_dmg_settings,
    release_plan,
};
pub use dmg::DmgDescriptor;
pub use exceptions::{ReleaseError, Result};
pub use identity::{BuildVariant, Identity, IdentityTable};
