pub mod config;
pub mod crawl;
pub mod http_client;
pub mod output;
pub mod probe;
pub mod target;
pub mod wordlist;

// re-export the types tests and the runner touch most
pub use crate::crawl::collector::Finding;
pub use crate::crawl::Crawler;
