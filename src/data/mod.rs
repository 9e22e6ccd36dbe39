mod fetcher;

pub use fetcher::{Fetcher, collect_results, fetch_questions};
