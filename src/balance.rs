// SPDX-License-Identifier: AGPL-3.0-or-later

//! Balance queries.

use alloy::providers::Provider;

use crate::client;
use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::response::{success_response, SuccessResponse};
use crate::types::{Balance, BalancePayload};
use crate::units::{self, NATIVE_DECIMALS};

/// Read the native or token balance of an address.
///
/// With a token address the balance is scaled by the contract-reported
/// decimals; otherwise by the chain's fixed 18-decimal convention. Node and
/// contract failures propagate unchanged.
pub async fn get_balance(
    payload: &BalancePayload,
) -> Result<SuccessResponse<Balance>, GatewayError> {
    let gateway = Gateway::open(&payload.rpc_url, None, payload.token_address.as_deref()).await?;

    let balance = if let Some(contract) = gateway.contract() {
        let decimals = contract.decimals().await?;
        let raw = contract.balance_of(&payload.address).await?;
        units::units_to_f64(raw, decimals)?
    } else {
        let addr = client::parse_address(&payload.address)?;
        let raw = gateway
            .provider()
            .get_balance(addr)
            .await
            .map_err(|e| GatewayError::Rpc(e.to_string()))?;
        units::units_to_f64(raw, NATIVE_DECIMALS)?
    };

    tracing::debug!(address = %payload.address, balance, "balance read");

    Ok(success_response(Balance { balance }))
}
