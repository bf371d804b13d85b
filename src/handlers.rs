pub mod auth;
pub mod dashboard;
pub mod export;
pub mod health;
pub mod intake;
pub mod orders;
pub mod pages;
