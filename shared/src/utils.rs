//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! Functions for formatting Ethereum wallet addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters after `0x`)
//! - [`truncate_address`] - `format_address` with 4/4 characters
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x170F5FFEB11F56F35505C54C55233040C54227C8";
//! assert_eq!(format_address(address, 4, 4), "0x170F...27C8");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// The `0x` prefix is kept and not counted. Addresses too short to shorten are returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x170F5FFEB11F56F35505C54C55233040C54227C8";
/// assert_eq!(format_address(addr, 4, 4), "0x170F...27C8");
/// assert_eq!(format_address(addr, 6, 2), "0x170F5F...C8");
/// assert_eq!(format_address("0xabc", 4, 4), "0xabc");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let (lead, body) = match address.strip_prefix("0x") {
        Some(rest) => ("0x", rest),
        None => ("", address),
    };

    if !body.is_ascii() || body.len() <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix = &body[..prefix_len];
    let suffix = &body[body.len() - suffix_len..];

    format!("{}{}...{}", lead, prefix, suffix)
}

/// Format a wallet address with the default 4-character prefix and suffix.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}
