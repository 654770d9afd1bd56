// SPDX-License-Identifier: AGPL-3.0-or-later

//! Request and response payload types.
//!
//! Inputs are plain data records; wire names are camelCase.

use serde::{Deserialize, Serialize};

/// Balance query request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancePayload {
    /// RPC endpoint URL
    pub rpc_url: String,
    /// ERC-20 contract address; absent for a native balance
    #[serde(default)]
    pub token_address: Option<String>,
    /// Address whose balance to read
    pub address: String,
}

/// Transfer request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferPayload {
    /// RPC endpoint URL
    pub rpc_url: String,
    /// Hex private key of the sending account
    pub private_key: String,
    /// ERC-20 contract address; absent for a native transfer
    #[serde(default)]
    pub token_address: Option<String>,
    /// Recipient address
    pub recipient_address: String,
    /// Amount in display units (e.g. 1.5)
    pub amount: f64,
    /// Gas price override in gwei; absent to use the node's current price
    #[serde(default)]
    pub gas_price: Option<String>,
    /// Nonce override; absent to use the pending transaction count
    #[serde(default)]
    pub nonce: Option<u64>,
}

/// Balance query result.
#[derive(Debug, Clone, Serialize)]
pub struct Balance {
    /// Balance in display units
    pub balance: f64,
}

/// A freshly generated keypair.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletKeypair {
    /// Checksummed account address
    pub address: String,
    /// Hex private key, 0x-prefixed
    pub private_key: String,
}

/// Transfer result.
#[derive(Debug, Clone, Serialize)]
pub struct TransferReceipt {
    /// Hash of the submitted transaction (not a confirmation of inclusion)
    pub hash: String,
}
