pub mod gif;
pub mod paths;
