mod assets;
#[cfg(test)]
mod test_utils;

pub mod columns;
pub mod config;
pub mod format;
pub mod loader;
pub mod model;
pub mod render;
pub mod result;
pub mod scores;
pub mod source;
pub mod table;

pub use crate::assets::get_data_dir;
