// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! 3D tile layout engine with a staggered transition scheduler.
//!
//! Tilescape turns a list of records into tiles and moves them between
//! named spatial arrangements (table, sphere, helix, grid, tetrahedron).
//! Every tile travels on its own position and orientation tweens with
//! slightly different durations, so a layout change reads as a swarm
//! rather than a rigid jump.
//!
//! # Key entry points
//!
//! - [`engine::TileSession`] - owns tiles, poses, scheduler and camera
//! - [`layout::Layout`] - the named layouts and their target generators
//! - [`animation::TransitionScheduler`] - per-tick tween advancement
//! - [`source`] - record loading behind token and source traits
//! - [`options::Options`] - layout geometry, timing, camera and colors
//!
//! # Architecture
//!
//! Layout generators are pure functions of tile count. The session caches
//! one target set per layout and hands it to the scheduler, which writes
//! interpolated poses into a contiguous pose array. Drawing is left to the
//! host: the session calls an [`engine::RenderHook`] with a
//! [`engine::Frame`] whenever something on screen changed.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod layout;
pub mod options;
pub mod source;
pub mod tile;
pub mod util;
