pub mod server_cache;
