//! Conversion between Go import paths and filesystem directories.
//!
//! Three stateless operations, each parameterized over an [`Env`] so behavior
//! is testable without touching real process state:
//!
//! - [`name()`] resolves an import path (plus a source directory for vendor
//!   disambiguation) to the package name declared in its source files.
//! - [`dir()`] resolves an import path to the directory containing it.
//! - [`path()`] resolves a directory back to its import path.
//!
//! Dependency graphs, build orchestration, and module version selection stay
//! with the surrounding toolchain; this crate only locates source.

mod env;
mod error;
mod name;
mod resolve;
mod util;

pub use env::{Env, MapEnv, OsEnv};
pub use error::{Error, Result};
pub use name::name;
pub use resolve::{dir, path};
