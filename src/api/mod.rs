pub mod av;
pub mod av_dto;
pub mod provider;
pub mod utils;

pub use av::AlphaVantageClient;
pub use provider::QuoteProvider;
