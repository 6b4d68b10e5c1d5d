//! Wallet provider, contract and event services

pub mod contract;
pub mod events;
pub mod provider;
