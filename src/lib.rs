pub mod common;
pub mod config;
pub mod gateway;
pub mod models;
pub mod navigation;
pub mod pages;
pub mod pipeline;
pub mod services;
