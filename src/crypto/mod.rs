/// Key encoding utilities for Stellar account identifiers
pub mod strkey;
