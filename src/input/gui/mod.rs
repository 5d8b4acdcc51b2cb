//! GUI input adapter for interactive exploration.
//!
//! A fixed-size winit window presents frames through `pixels` and feeds
//! translated window events to the view controller.

pub mod commands;
pub mod translator;
