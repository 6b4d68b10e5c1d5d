//! # Formatting Utilities for the Mint Page
//!
//! Hex quantity helpers for JSON-RPC values and the user-facing messages the
//! widget shows. For address formatting, use [`shared::utils::truncate_address`].

use alloy_primitives::U64;

/// Parse a `0x`-prefixed hex quantity (`eth_blockNumber`, `blockNumber`, ...).
pub fn parse_quantity(value: &str) -> Option<u64> {
    let digits = value.strip_prefix("0x").filter(|d| !d.is_empty())?;
    U64::from_str_radix(digits, 16).ok().map(|quantity| quantity.to())
}

/// Encode a number as a JSON-RPC quantity (no leading zeros).
pub fn to_quantity(value: u64) -> String {
    format!("{:#x}", value)
}

/// Alert shown when the wallet reports an unexpected chain.
pub fn wrong_network_message(network_name: &str) -> String {
    format!("You are not connected to the {}!", network_name)
}

/// Alert shown when a `NewEpicNFTMinted` event arrives.
pub fn minted_message(asset_url: &str) -> String {
    format!(
        "Hey there! We've minted your NFT and sent it to your wallet. It may be blank right now. \
         It can take a max of 10 min to show up on OpenSea. Here's the link: {}",
        asset_url
    )
}
