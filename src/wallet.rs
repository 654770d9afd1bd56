// SPDX-License-Identifier: AGPL-3.0-or-later

//! Wallet keypair generation.

use alloy::signers::local::PrivateKeySigner;

use crate::response::{success_response, SuccessResponse};
use crate::types::WalletKeypair;

/// Generate a fresh random keypair.
///
/// Key generation is delegated to the signer library's CSPRNG; no copy of
/// the key is retained here.
pub fn create_wallet() -> SuccessResponse<WalletKeypair> {
    let signer = PrivateKeySigner::random();

    let keypair = WalletKeypair {
        address: signer.address().to_string(),
        private_key: format!("0x{}", alloy::hex::encode(signer.to_bytes())),
    };

    tracing::debug!(address = %keypair.address, "wallet created");

    success_response(keypair)
}
