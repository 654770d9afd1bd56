// SPDX-License-Identifier: AGPL-3.0-or-later

//! Gateway error type.

/// Errors that can occur during gateway operations.
///
/// Underlying node and contract failures are carried through unchanged as
/// message strings; no recovery or retry happens at this layer.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Contract error: {0}")]
    Contract(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),
}
