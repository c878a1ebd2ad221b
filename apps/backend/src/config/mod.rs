pub mod app;
pub mod path_policy;

pub use app::Config;
pub use path_policy::{PathPolicy, Requirement};

#[cfg(test)]
mod tests_props_path_policy;
