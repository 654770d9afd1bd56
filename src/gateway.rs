// SPDX-License-Identifier: AGPL-3.0-or-later

//! Per-call connection/signer/contract bundle.
//!
//! A [`Gateway`] is opened fresh for every operation and dropped when the
//! operation finishes. The variant is resolved once, from which of the two
//! optional inputs (private key, token address) were supplied, and each
//! variant carries exactly the fields it guarantees.

use alloy::{
    network::EthereumWallet,
    providers::{DynProvider, Provider},
    signers::local::PrivateKeySigner,
};

use crate::client;
use crate::erc20::Erc20Contract;
use crate::error::GatewayError;

/// Fixed gas limit for a native value transfer.
pub const NATIVE_TRANSFER_GAS: u64 = 21_000;

/// A per-call gateway to the node.
///
/// Every variant holds a fresh provider and the gas price fetched at open
/// time. Signing variants add the parsed signer and its pending transaction
/// count; token variants add the contract binding.
pub enum Gateway {
    /// No private key, no token address.
    Bare {
        provider: DynProvider,
        gas_price: u128,
    },
    /// Token address only: contract bound to the read-only provider.
    ReadOnly {
        provider: DynProvider,
        gas_price: u128,
        contract: Erc20Contract,
    },
    /// Private key only.
    SignerOnly {
        provider: DynProvider,
        gas_price: u128,
        signer: PrivateKeySigner,
        nonce: u64,
    },
    /// Private key and token address: contract bound to a signing provider.
    Full {
        provider: DynProvider,
        gas_price: u128,
        signer: PrivateKeySigner,
        nonce: u64,
        contract: Erc20Contract,
    },
}

impl Gateway {
    /// Open a gateway against the given RPC endpoint.
    ///
    /// Always fetches the current gas price. With a private key, also fetches
    /// the signer's pending transaction count; with a token address, also
    /// binds the ERC-20 contract. Node failures propagate unchanged.
    pub async fn open(
        rpc_url: &str,
        private_key: Option<&str>,
        token_address: Option<&str>,
    ) -> Result<Self, GatewayError> {
        let provider = client::connect_http(rpc_url)?;

        let gas_price = provider
            .get_gas_price()
            .await
            .map_err(|e| GatewayError::Rpc(e.to_string()))?;

        let gateway = match (private_key, token_address) {
            (Some(key), Some(token)) => {
                let signer = client::parse_signer(key)?;
                let nonce = provider
                    .get_transaction_count(signer.address())
                    .await
                    .map_err(|e| GatewayError::Rpc(e.to_string()))?;
                let signing =
                    client::connect_signing(rpc_url, EthereumWallet::from(signer.clone()))?;
                let contract = Erc20Contract::new(signing, token)?;

                Gateway::Full {
                    provider,
                    gas_price,
                    signer,
                    nonce,
                    contract,
                }
            }
            (Some(key), None) => {
                let signer = client::parse_signer(key)?;
                let nonce = provider
                    .get_transaction_count(signer.address())
                    .await
                    .map_err(|e| GatewayError::Rpc(e.to_string()))?;

                Gateway::SignerOnly {
                    provider,
                    gas_price,
                    signer,
                    nonce,
                }
            }
            (None, Some(token)) => {
                let contract = Erc20Contract::new(provider.clone(), token)?;

                Gateway::ReadOnly {
                    provider,
                    gas_price,
                    contract,
                }
            }
            (None, None) => Gateway::Bare {
                provider,
                gas_price,
            },
        };

        tracing::debug!(gas_price, mode = gateway.mode(), "gateway opened");

        Ok(gateway)
    }

    /// The variant name, for logging.
    pub fn mode(&self) -> &'static str {
        match self {
            Gateway::Bare { .. } => "bare",
            Gateway::ReadOnly { .. } => "read-only",
            Gateway::SignerOnly { .. } => "signer-only",
            Gateway::Full { .. } => "full",
        }
    }

    /// The provider the gateway was opened with.
    pub fn provider(&self) -> &DynProvider {
        match self {
            Gateway::Bare { provider, .. }
            | Gateway::ReadOnly { provider, .. }
            | Gateway::SignerOnly { provider, .. }
            | Gateway::Full { provider, .. } => provider,
        }
    }

    /// Gas price fetched when the gateway was opened, in wei.
    pub fn gas_price(&self) -> u128 {
        match self {
            Gateway::Bare { gas_price, .. }
            | Gateway::ReadOnly { gas_price, .. }
            | Gateway::SignerOnly { gas_price, .. }
            | Gateway::Full { gas_price, .. } => *gas_price,
        }
    }

    /// Fixed gas limit for native transfers.
    pub fn gas_limit(&self) -> u64 {
        NATIVE_TRANSFER_GAS
    }

    /// The contract binding, when a token address was supplied.
    pub fn contract(&self) -> Option<&Erc20Contract> {
        match self {
            Gateway::ReadOnly { contract, .. } | Gateway::Full { contract, .. } => Some(contract),
            _ => None,
        }
    }

    /// The signer, when a private key was supplied.
    pub fn signer(&self) -> Option<&PrivateKeySigner> {
        match self {
            Gateway::SignerOnly { signer, .. } | Gateway::Full { signer, .. } => Some(signer),
            _ => None,
        }
    }

    /// The signer's pending transaction count, when a private key was supplied.
    pub fn nonce(&self) -> Option<u64> {
        match self {
            Gateway::SignerOnly { nonce, .. } | Gateway::Full { nonce, .. } => Some(*nonce),
            _ => None,
        }
    }
}
