pub mod handlers;
mod plugin;

pub use plugin::AssetsPlugin;
