//! macOS disk image layout
//!
//! The descriptor is consumed by dmgbuild; this crate never builds the image.

pub mod defaults;
pub mod descriptor;
pub mod settings;

pub use descriptor::{DmgDescriptor, Point, WindowRect};
pub use settings::{DmgbuildSettings, render_settings, write_settings};
