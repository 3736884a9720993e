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

//! Editor camera navigation.
//!
//! A [`nav::NavigationComponent`] sits next to a camera entity and turns raw
//! keyboard, mouse-drag and mouse-wheel input into camera pose changes. It
//! supports a free-flying perspective mode and three axis-locked
//! orthographic modes, and remembers the perspective orientation across an
//! orthographic excursion.
//!
//! # Key entry points
//!
//! - [`nav::NavigationRegistry`] - owns one component per entity, forwards
//!   input events and ticks every component once per frame
//! - [`nav::NavigationComponent`] - the per-entity navigation state machine
//! - [`camera::Camera`] - the camera pose the components write
//! - [`input::InputState`] - polled key/button/axis state and the listener
//!   registration list
//! - [`options::Options`] - tunables and key bindings, loadable from TOML
//!
//! # Frame flow
//!
//! The host forwards each window event to [`input::InputState::apply`] and
//! then [`nav::NavigationRegistry::dispatch`]. Once per frame it advances a
//! [`time::FrameClock`] and calls [`nav::NavigationRegistry::tick`]. All of
//! this runs on one thread; cameras are shared with the host through
//! [`camera::SharedCamera`] handles.

pub mod camera;
pub mod entity;
pub mod error;
pub mod input;
pub mod nav;
pub mod options;
pub mod time;

pub use entity::EntityId;
pub use error::NavError;
