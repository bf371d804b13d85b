//! Persistence model of the workshop order book.

pub mod entities;
