pub mod loaders;
pub mod query;
pub mod search_result;

pub use loaders::{default_query_table, load_query_table, resolve_query_table};
pub use query::{QuerySpec, QueryTable};
pub use search_result::{ResultBundle, SearchResult};
