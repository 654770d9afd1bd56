// SPDX-License-Identifier: AGPL-3.0-or-later

//! evm-gateway - Thin wallet/contract gateway over an EVM JSON-RPC node
//!
//! This crate wraps an EVM client library (alloy) with four operations:
//! gateway construction, balance queries (native + ERC-20), wallet keypair
//! generation, and transfer submission. It holds no state between calls:
//! every provider, signer, and contract binding is built fresh per call and
//! discarded afterwards.
//!
//! ## Modules
//!
//! - `gateway` - per-call connection/signer/contract bundle
//! - `balance` - native and token balance queries
//! - `wallet` - random keypair generation
//! - `transfer` - native and token transfer submission
//! - `client` - provider and signer construction helpers
//! - `erc20` - fixed ERC-20 interface binding
//! - `units` - decimal scaling between raw integers and display amounts

pub mod balance;
pub mod client;
pub mod erc20;
pub mod error;
pub mod gateway;
pub mod response;
pub mod transfer;
pub mod types;
pub mod units;
pub mod wallet;

pub use balance::get_balance;
pub use error::GatewayError;
pub use gateway::{Gateway, NATIVE_TRANSFER_GAS};
pub use response::{success_response, SuccessResponse};
pub use transfer::transfer;
pub use types::{Balance, BalancePayload, TransferPayload, TransferReceipt, WalletKeypair};
pub use wallet::create_wallet;
