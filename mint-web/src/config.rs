//! # Mint Page Configuration
//!
//! Immutable configuration injected into the widget at construction.
//!
//! The page has no runtime environment, so every value is a build-time
//! constant: the defaults in [`crate::utils::constants`] can be overridden
//! by setting `MINT_*` variables when compiling the wasm bundle.
//!
//! | Variable                      | Field                    |
//! |-------------------------------|--------------------------|
//! | `MINT_CONTRACT_ADDRESS`       | `contract_address`       |
//! | `MINT_CHAIN_ID`               | `expected_chain_id`      |
//! | `MINT_NETWORK_NAME`           | `network_name`           |
//! | `MINT_MARKETPLACE_URL`        | `marketplace_url`        |
//! | `MINT_MARKETPLACE_ASSETS_URL` | `marketplace_assets_url` |
//! | `MINT_EXPLORER_URL`           | `explorer_url`           |
//! | `MINT_SOCIAL_HANDLE`          | `social_handle`          |
//! | `MINT_POLL_INTERVAL_MS`       | `poll_interval_ms`       |

use alloy_primitives::{Address, U256};
use thiserror::Error;

use crate::utils::constants;
use crate::utils::format::parse_quantity;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a 0x-prefixed 20-byte address, got {value:?}")]
    InvalidAddress { name: &'static str, value: String },

    #[error("{name} must be a 0x-prefixed hex quantity, got {value:?}")]
    InvalidChainId { name: &'static str, value: String },

    #[error("{name} must be an http(s) URL, got {value:?}")]
    InvalidUrl { name: &'static str, value: String },

    #[error("{name} must be a valid number: {value:?}")]
    WrongFormat { name: &'static str, value: String },

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintConfig {
    pub contract_address: String,
    /// Compared against `eth_chainId`; hex string such as `0x4`.
    pub expected_chain_id: String,
    /// Human readable name used in the wrong-network alert.
    pub network_name: String,
    /// Collection page linked from the header.
    pub marketplace_url: String,
    /// Base for `<base>/<contract>/<token id>` asset links.
    pub marketplace_assets_url: String,
    pub explorer_url: String,
    pub social_handle: String,
    /// Interval between receipt and event polls.
    pub poll_interval_ms: u32,
}

impl Default for MintConfig {
    fn default() -> Self {
        Self {
            contract_address: constants::CONTRACT_ADDRESS.to_string(),
            expected_chain_id: constants::EXPECTED_CHAIN_ID.to_string(),
            network_name: constants::NETWORK_NAME.to_string(),
            marketplace_url: constants::MARKETPLACE_URL.to_string(),
            marketplace_assets_url: constants::MARKETPLACE_ASSETS_URL.to_string(),
            explorer_url: constants::EXPLORER_URL.to_string(),
            social_handle: constants::SOCIAL_HANDLE.to_string(),
            poll_interval_ms: constants::POLL_INTERVAL_MS,
        }
    }
}

impl MintConfig {
    /// Load configuration from the `MINT_*` variables captured at compile time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| match name {
            "MINT_CONTRACT_ADDRESS" => option_env!("MINT_CONTRACT_ADDRESS"),
            "MINT_CHAIN_ID" => option_env!("MINT_CHAIN_ID"),
            "MINT_NETWORK_NAME" => option_env!("MINT_NETWORK_NAME"),
            "MINT_MARKETPLACE_URL" => option_env!("MINT_MARKETPLACE_URL"),
            "MINT_MARKETPLACE_ASSETS_URL" => option_env!("MINT_MARKETPLACE_ASSETS_URL"),
            "MINT_EXPLORER_URL" => option_env!("MINT_EXPLORER_URL"),
            "MINT_SOCIAL_HANDLE" => option_env!("MINT_SOCIAL_HANDLE"),
            "MINT_POLL_INTERVAL_MS" => option_env!("MINT_POLL_INTERVAL_MS"),
            _ => None,
        })
    }

    /// Build-time configuration, or the defaults when it does not validate.
    pub fn load() -> Self {
        match Self::from_build_env() {
            Ok(config) => config,
            Err(e) => {
                log::error!("Invalid build configuration ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Build a validated config, taking each override from `lookup` and
    /// falling back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<&'static str>,
    {
        let defaults = Self::default();
        let pick = |name: &'static str, default: String| {
            lookup(name).map(str::to_string).unwrap_or(default)
        };

        let poll_interval_ms = match lookup("MINT_POLL_INTERVAL_MS") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::WrongFormat {
                name: "MINT_POLL_INTERVAL_MS",
                value: raw.to_string(),
            })?,
            None => defaults.poll_interval_ms,
        };

        let config = Self {
            contract_address: pick("MINT_CONTRACT_ADDRESS", defaults.contract_address),
            expected_chain_id: pick("MINT_CHAIN_ID", defaults.expected_chain_id),
            network_name: pick("MINT_NETWORK_NAME", defaults.network_name),
            marketplace_url: pick("MINT_MARKETPLACE_URL", defaults.marketplace_url),
            marketplace_assets_url: pick(
                "MINT_MARKETPLACE_ASSETS_URL",
                defaults.marketplace_assets_url,
            ),
            explorer_url: pick("MINT_EXPLORER_URL", defaults.explorer_url),
            social_handle: pick("MINT_SOCIAL_HANDLE", defaults.social_handle),
            poll_interval_ms,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let address_ok = self.contract_address.starts_with("0x")
            && self.contract_address.parse::<Address>().is_ok();
        if !address_ok {
            return Err(ConfigError::InvalidAddress {
                name: "MINT_CONTRACT_ADDRESS",
                value: self.contract_address.clone(),
            });
        }

        if parse_quantity(&self.expected_chain_id).is_none() {
            return Err(ConfigError::InvalidChainId {
                name: "MINT_CHAIN_ID",
                value: self.expected_chain_id.clone(),
            });
        }

        for (name, url) in [
            ("MINT_MARKETPLACE_URL", &self.marketplace_url),
            ("MINT_MARKETPLACE_ASSETS_URL", &self.marketplace_assets_url),
            ("MINT_EXPLORER_URL", &self.explorer_url),
        ] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigError::InvalidUrl {
                    name,
                    value: url.clone(),
                });
            }
        }

        if self.network_name.trim().is_empty() {
            return Err(ConfigError::Empty("MINT_NETWORK_NAME"));
        }
        if self.social_handle.trim().is_empty() {
            return Err(ConfigError::Empty("MINT_SOCIAL_HANDLE"));
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::WrongFormat {
                name: "MINT_POLL_INTERVAL_MS",
                value: "0".to_string(),
            });
        }

        Ok(())
    }

    /// `true` when `chain_id` names the configured network. Hex digits are
    /// compared case-insensitively.
    pub fn is_expected_chain(&self, chain_id: &str) -> bool {
        chain_id.eq_ignore_ascii_case(&self.expected_chain_id)
    }

    pub fn social_url(&self) -> String {
        format!("{}/{}", constants::SOCIAL_BASE_URL, self.social_handle)
    }

    pub fn asset_url(&self, token_id: U256) -> String {
        format!(
            "{}/{}/{}",
            self.marketplace_assets_url.trim_end_matches('/'),
            self.contract_address,
            token_id
        )
    }

    pub fn transaction_url(&self, hash: &str) -> String {
        format!("{}/tx/{}", self.explorer_url.trim_end_matches('/'), hash)
    }
}
