pub mod handler;

pub use handler::{apply_resize, bounds_for};
