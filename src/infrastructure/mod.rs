pub mod api_clients;
pub mod config;
pub mod security;
