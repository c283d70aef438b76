//! Client SDK for the sum service.

pub mod client;

pub use client::{ClientError, SumClient};
