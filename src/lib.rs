//! # raybind
//!
//! Loads a prebuilt raylib shared library at runtime and bounces a circle
//! around a window with it.
//!
//! ## Features
//!
//! - **Declarative bindings**: one static [`bindings::CallDescriptor`] table describes every native call
//! - **Bind-time validation**: missing symbols and signature mismatches fail before the first frame
//! - **Scoped resources**: the library handle and the native window are released on every exit path
//! - **Swappable backend**: the frame loop runs against [`platform::GraphicsBackend`]
//!
//! ### Example
//!
//! ```no_run
//! use raybind::bindings::{LibraryHandle, RaylibApi};
//! use raybind::config::DemoConfig;
//! use raybind::core::FrameLoop;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let handle = LibraryHandle::open("zig-out/bin/libraylib.so")?;
//!     let api = RaylibApi::bind(&handle)?;
//!     let mut frame_loop = FrameLoop::new(api, &DemoConfig::default())?;
//!     frame_loop.run(None)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`bindings`]: native library loading and typed binding
//! - [`core`]: frame loop, simulation and entry point
//! - [`platform`]: graphics backend abstraction and FFI value types
//! - [`config`]: configuration

/// Core program flow: entry point, frame loop and simulation
pub mod core;
/// Native library loading and descriptor-driven binding
pub mod bindings;
/// Graphics backend abstraction
pub mod platform;
/// Configuration system
pub mod config;
/// Command line interface
pub mod cli;
