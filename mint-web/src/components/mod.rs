//! Reusable UI components

pub mod footer;

pub use footer::Footer;
