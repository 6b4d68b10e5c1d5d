//! Deployed `MyEpicNFT` contract access.
//!
//! [`NftInterface`] is the interface descriptor (one mutating entry point and
//! one event); [`ContractHandle`] binds it to an address, a signer and a
//! provider. Handles are cheap and built fresh for every operation.

use std::future::Future;

use alloy_primitives::{hex, Address, LogData, B256, U256};
use alloy_sol_types::{sol, SolCall, SolEvent};
use shared::dto::{Log, LogFilter, TransactionReceipt, TransactionRequest};

use crate::config::MintConfig;
use crate::error::{MintError, MintResult};
use crate::services::provider::WalletProvider;
use crate::utils::format::{parse_quantity, to_quantity};

sol! {
    function makeAnEpicNFT() external;

    event NewEpicNFTMinted(address from, uint256 tokenId);
}

/// Decoded `NewEpicNFTMinted` event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MintedToken {
    pub from: Address,
    pub token_id: U256,
}

impl From<NewEpicNFTMinted> for MintedToken {
    fn from(event: NewEpicNFTMinted) -> Self {
        Self {
            from: event.from,
            token_id: event.tokenId,
        }
    }
}

/// Function selector and event topic the page uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NftInterface {
    pub mint_selector: [u8; 4],
    pub minted_topic: B256,
}

impl NftInterface {
    pub fn epic_nft() -> Self {
        Self {
            mint_selector: makeAnEpicNFTCall::SELECTOR,
            minted_topic: NewEpicNFTMinted::SIGNATURE_HASH,
        }
    }

    /// Calldata of `makeAnEpicNFT()`, `0x`-prefixed.
    pub fn mint_calldata(&self) -> String {
        hex::encode_prefixed(makeAnEpicNFTCall {}.abi_encode())
    }

    pub fn minted_topic_hex(&self) -> String {
        hex::encode_prefixed(self.minted_topic)
    }

    /// Decode a `NewEpicNFTMinted` log. The first topic must be the event
    /// signature hash.
    pub fn decode_minted(&self, log_entry: &Log) -> MintResult<MintedToken> {
        let topics = log_entry
            .topics
            .iter()
            .map(|topic| topic.parse::<B256>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| MintError::Decode(format!("bad log topic: {}", e)))?;
        let data = hex::decode(&log_entry.data)
            .map_err(|e| MintError::Decode(format!("bad log data: {}", e)))?;

        let log_data = LogData::new_unchecked(topics, data.into());
        let event = NewEpicNFTMinted::decode_log_data(&log_data, true)
            .map_err(|e| MintError::Decode(e.to_string()))?;
        Ok(event.into())
    }
}

/// A submitted, not yet confirmed mint transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingMint {
    pub hash: String,
}

/// `{contract address, interface, signer}` bound to a provider.
#[derive(Clone, Debug)]
pub struct ContractHandle<P> {
    address: String,
    interface: NftInterface,
    signer: String,
    provider: P,
}

impl<P: WalletProvider> ContractHandle<P> {
    pub fn connect(provider: P, config: &MintConfig, signer: impl Into<String>) -> Self {
        Self {
            address: config.contract_address.clone(),
            interface: NftInterface::epic_nft(),
            signer: signer.into(),
            provider,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn signer(&self) -> &str {
        &self.signer
    }

    /// Submit `makeAnEpicNFT()`. Suspends while the wallet asks the user to sign.
    pub async fn make_an_epic_nft(&self) -> MintResult<PendingMint> {
        let tx = TransactionRequest {
            from: self.signer.clone(),
            to: self.address.clone(),
            data: self.interface.mint_calldata(),
            value: None,
        };
        let hash = self.provider.sign_and_send(&tx).await?;
        Ok(PendingMint { hash })
    }

    /// Poll for the receipt of `pending` until it is mined.
    ///
    /// There is no timeout; an unresolved transaction keeps this pending.
    pub async fn wait<S, F>(
        &self,
        pending: &PendingMint,
        interval_ms: u32,
        sleep: S,
    ) -> MintResult<TransactionReceipt>
    where
        S: Fn(u32) -> F,
        F: Future<Output = ()>,
    {
        loop {
            match self.provider.get_transaction_receipt(&pending.hash).await {
                Ok(Some(receipt)) if receipt.is_reverted() => {
                    return Err(MintError::Reverted {
                        hash: pending.hash.clone(),
                    });
                }
                Ok(Some(receipt)) => return Ok(receipt),
                Ok(None) => {}
                Err(MintError::Rpc { code, message }) => {
                    return Err(MintError::TransactionFailed(format!("{} ({})", message, code)));
                }
                Err(e) => return Err(e),
            }
            sleep(interval_ms).await;
        }
    }

    /// Current head; the first block an event watcher should look at.
    pub async fn current_block(&self) -> MintResult<u64> {
        self.provider.block_number().await
    }

    /// Collect `NewEpicNFTMinted` events in `[from_block, head]`.
    ///
    /// Returns the decoded events and the block to continue from. Logs that
    /// fail to decode are skipped with a warning.
    pub async fn poll_mint_events(&self, from_block: u64) -> MintResult<(Vec<MintedToken>, u64)> {
        let head = self.provider.block_number().await?;
        if head < from_block {
            return Ok((Vec::new(), from_block));
        }

        let filter = LogFilter {
            address: self.address.clone(),
            topics: vec![self.interface.minted_topic_hex()],
            from_block: to_quantity(from_block),
            to_block: to_quantity(head),
        };
        let logs = self.provider.get_logs(&filter).await?;

        let mut events = Vec::with_capacity(logs.len());
        for log_entry in logs {
            match self.interface.decode_minted(&log_entry) {
                Ok(event) => events.push(event),
                Err(e) => log::warn!(
                    "Skipping undecodable NewEpicNFTMinted log in block {}: {}",
                    log_entry
                        .block_number
                        .as_deref()
                        .and_then(parse_quantity)
                        .unwrap_or(head),
                    e
                ),
            }
        }

        Ok((events, head + 1))
    }
}
