pub mod catalog;
pub mod handlers;
pub mod models;
mod plugin;

pub use plugin::ClassesPlugin;
