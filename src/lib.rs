pub mod admin;
pub mod catalog;
pub mod config;
pub mod db;
pub mod drafts;
pub mod error;
pub mod handlers;
pub mod models;
pub mod storage;
pub mod templates;
pub mod wizard;

pub use db::create_pool;
