pub mod astro;
pub mod chat;
pub mod config;
pub mod error;
pub mod gateway;
pub mod model;
pub mod proxy;
pub mod report;
pub mod session;
pub mod store;
pub mod types;
