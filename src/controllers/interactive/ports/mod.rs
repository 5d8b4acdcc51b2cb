//! Port definitions for the interactive controller.
//!
//! Interfaces between the controller and the window system it is driven by.

pub mod display_surface;
