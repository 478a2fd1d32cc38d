//! Reqwest adapter implementing the `OllamaPort` backend contract.

#![deny(unsafe_code)]

pub mod client;

pub use client::OllamaClient;
