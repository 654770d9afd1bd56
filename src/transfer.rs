// SPDX-License-Identifier: AGPL-3.0-or-later

//! Transfer submission.

use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::providers::Provider;
use alloy::rpc::types::TransactionRequest;

use crate::client;
use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::response::{success_response, SuccessResponse};
use crate::types::{TransferPayload, TransferReceipt};
use crate::units::{self, NATIVE_DECIMALS};

/// Submit a native or token transfer and return the transaction hash.
///
/// The hash identifies a *submitted* transaction; inclusion is not awaited.
/// Gas price resolves to the caller's gwei override when supplied and
/// parseable, else the gateway's fetched price; nonce resolves to the
/// caller's override when supplied, else the fetched pending count.
pub async fn transfer(
    payload: &TransferPayload,
) -> Result<SuccessResponse<TransferReceipt>, GatewayError> {
    let gateway = Gateway::open(
        &payload.rpc_url,
        Some(&payload.private_key),
        payload.token_address.as_deref(),
    )
    .await?;

    // Independent spend wallet from the same key, alongside the gateway's
    // own signer.
    let signer = client::parse_signer(&payload.private_key)?;
    let spend = client::connect_signing(&payload.rpc_url, EthereumWallet::from(signer))?;

    let gas_price = resolve_gas_price(payload.gas_price.as_deref(), gateway.gas_price());

    let tx_hash = match &gateway {
        Gateway::Full {
            contract, nonce, ..
        } => {
            let nonce = resolve_nonce(payload.nonce, *nonce);
            let decimals = contract.decimals().await?;
            let amount = units::parse_amount(&payload.amount.to_string(), decimals)?;

            contract
                .transfer(&payload.recipient_address, amount, gas_price, nonce)
                .await?
        }
        Gateway::SignerOnly { nonce, .. } => {
            let nonce = resolve_nonce(payload.nonce, *nonce);
            let to = client::parse_address(&payload.recipient_address)?;
            let value = units::parse_amount(&payload.amount.to_string(), NATIVE_DECIMALS)?;

            let tx = TransactionRequest::default()
                .to(to)
                .value(value)
                .gas_limit(gateway.gas_limit())
                .with_gas_price(gas_price)
                .with_nonce(nonce);

            let pending = spend
                .send_transaction(tx)
                .await
                .map_err(|e| GatewayError::TransactionFailed(e.to_string()))?;

            *pending.tx_hash()
        }
        Gateway::Bare { .. } | Gateway::ReadOnly { .. } => {
            return Err(GatewayError::InvalidPrivateKey(
                "transfer requires a private key".to_string(),
            ))
        }
    };

    let hash = format!("{tx_hash:?}");

    tracing::info!(hash = %hash, "transfer submitted");

    Ok(success_response(TransferReceipt { hash }))
}

/// Caller override in gwei when supplied and parseable, else the fetched
/// gas price.
fn resolve_gas_price(override_gwei: Option<&str>, fetched: u128) -> u128 {
    match override_gwei {
        Some(raw) => units::parse_gwei(raw).unwrap_or(fetched),
        None => fetched,
    }
}

/// Caller override when supplied, else the fetched pending count.
fn resolve_nonce(override_nonce: Option<u64>, fetched: u64) -> u64 {
    override_nonce.unwrap_or(fetched)
}
