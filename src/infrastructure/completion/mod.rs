mod http;

pub use http::HttpCompletionClient;
