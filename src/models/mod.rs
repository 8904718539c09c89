pub mod fetch_result;
pub mod quote;
pub mod symbol;

pub use fetch_result::{FetchOutcome, QuoteFetchResult};
pub use quote::Quote;
pub use symbol::Symbol;
