pub mod hash;
#[allow(clippy::module_inception)]
pub mod routes;

pub use hash::{current_path, navigate};
