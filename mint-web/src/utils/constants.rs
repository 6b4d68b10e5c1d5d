//! Application constants

/// Deployed `MyEpicNFT` contract.
pub const CONTRACT_ADDRESS: &str = "0x170F5FFEB11F56F35505C54C55233040C54227C8";

/// Rinkeby, as returned by `eth_chainId`.
pub const EXPECTED_CHAIN_ID: &str = "0x4";
pub const NETWORK_NAME: &str = "Rinkeby Test Network";

// Marketplace and explorer links
pub const MARKETPLACE_URL: &str = "https://testnets.opensea.io/collection/squarenft-ax0kwjubqi";
pub const MARKETPLACE_ASSETS_URL: &str = "https://testnets.opensea.io/assets";
pub const EXPLORER_URL: &str = "https://rinkeby.etherscan.io";

pub const SOCIAL_HANDLE: &str = "ViviPlasenciaC";
pub const SOCIAL_BASE_URL: &str = "https://twitter.com";

// Receipt and log polling
pub const POLL_INTERVAL_MS: u32 = 4000;
