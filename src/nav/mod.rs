//! Camera navigation.
//!
//! [`NavigationComponent`] drives one camera from keyboard, drag and wheel
//! input. [`NavigationRegistry`] owns every component, routes input events
//! to them and ticks them once per frame.
//!
//! Four modes are available through [`NavProjection`]: free-fly perspective
//! and three orthographic views locked to the world axes. The perspective
//! orientation is remembered while an orthographic mode is active and
//! restored on return.

pub mod command;
pub mod component;
pub mod projection;
pub mod registry;

pub use command::NavCommand;
pub use component::NavigationComponent;
pub use projection::NavProjection;
pub use registry::NavigationRegistry;
