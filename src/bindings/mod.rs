//! Native Binding Layer (FFI)
//!
//! Loads a prebuilt graphics library at runtime and binds its exports through
//! a declarative descriptor table.
//!
//! Failure stages, in the order they are checked:
//! ```text
//! locate ──> open ──> registry (table validation) ──> bind (symbol, then shape)
//!   │          │                 │                          │
//! NotFound   Load        InvalidDescriptor      SymbolNotFound / SignatureMismatch
//! ```
//!
//! Every bound function borrows the [`LibraryHandle`], so no call can outlive
//! the library mapping.

pub mod descriptor;
pub mod error;
pub mod loader;
pub mod raylib;
pub mod shape;

pub use descriptor::{BindingRegistry, BoundFn, CallDescriptor};
pub use error::{BindingError, BindingResult};
pub use loader::{
    default_library_relative_path, executable_dir, locate, platform_library_name, LibraryHandle,
};
pub use raylib::{RaylibApi, RAYLIB_CALLS};
pub use shape::{NativeReturn, NativeSignature, NativeType, Shape, StructLayout};
