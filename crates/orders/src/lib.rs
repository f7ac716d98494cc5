//! Orders module: clients, their orders, and per-client grouping.

pub mod book;
pub mod client;
pub mod order;

pub use book::OrderBook;
pub use client::Client;
pub use order::Order;
