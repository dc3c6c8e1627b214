pub mod config;
pub mod logging;

pub mod activation;
pub mod entity;
pub mod error;
pub mod pipeline;
pub mod songlink;
pub mod template;
pub mod vault;
