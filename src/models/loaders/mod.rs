pub mod toml_loader;

pub use toml_loader::{default_query_table, load_query_table, resolve_query_table};
