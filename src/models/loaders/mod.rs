pub mod toml_loader;

pub use toml_loader::{load_toml_to_request, parse_request_toml};
