pub mod handler;
pub mod middleware;
pub mod presenter;
pub mod repository;
