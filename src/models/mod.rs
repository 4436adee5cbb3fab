//! Built-in solids and their registry

mod registry;
mod solids;

pub use registry::*;
