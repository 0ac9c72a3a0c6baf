pub mod scholar_client;

pub use scholar_client::{HttpScholarClient, ScholarClient};
