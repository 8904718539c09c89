pub mod quote_batch_service;
pub mod throttle;

pub use quote_batch_service::QuoteBatchService;
pub use throttle::{NoopThrottle, Throttle, TokioThrottle};
