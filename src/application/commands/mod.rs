pub mod posts;
pub mod session;
