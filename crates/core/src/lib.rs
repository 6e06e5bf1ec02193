//! Pure session logic for the Cardiff Airport TV VEO3 prompt builder.
//!
//! This crate holds everything that does not touch the network or a UI:
//! the reference catalogs, the user-edit override layer, the mutable
//! composition session, the derived view summaries, the prompt
//! assembler, and the project snapshot serializer. A view layer drives
//! it by calling session operations and re-deriving whichever views the
//! operation reports as stale.

pub mod assembler;
pub mod camera;
pub mod catalog;
pub mod character;
pub mod compatibility;
pub mod dialogue;
pub mod error;
pub mod gallery;
pub mod overrides;
pub mod project;
pub mod scene;
pub mod session;
pub mod summary;
pub mod types;
