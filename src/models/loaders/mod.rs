pub mod toml_loader;

pub use toml_loader::{load_site_profile, parse_site_profile};
