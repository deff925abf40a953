//! Classic object-oriented design patterns reworked as idiomatic Rust.
//!
//! The library holds the two mechanisms with actual control flow in them:
//! an approval chain (Chain of Responsibility) and a command dispatch table
//! (Command). The remaining patterns from the collection live as standalone
//! demo binaries under `src/bin/` and share nothing with this core.

pub mod approval;
pub mod dispatch;
