//! General useful bits and bobs

use super::*;

pub mod config;
mod filesystem;
#[cfg(test)]
pub mod test_helpers;
mod thin_ptr;

pub use filesystem::{real_filesystem, Filesystem, FilesystemTrait};
pub use thin_ptr::ThinPtr;
