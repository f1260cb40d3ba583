mod expiry;
mod merge;
mod port;
mod storage;

pub use storage::ServerCache;
