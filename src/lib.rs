pub mod clock;
pub mod config;
pub mod models;
pub mod page;
pub mod service;
pub mod store;
pub mod web;
