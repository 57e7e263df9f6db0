pub mod assets;
pub mod config;
pub mod events;
pub mod http_error;
pub mod kernel;
pub mod pagination;
pub mod plugins;
pub mod store;

#[cfg(test)]
mod test_util;


pub use crate::kernel::*;
