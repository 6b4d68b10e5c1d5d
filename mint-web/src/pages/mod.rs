//! Page components

pub mod mint;

pub use mint::MintPage;
