//! Output destination implementations

pub mod filesystem;

pub use filesystem::{FilesystemConfig, FilesystemDestination};
