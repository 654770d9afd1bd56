// SPDX-License-Identifier: AGPL-3.0-or-later

//! ERC-20 token contract interactions.
//!
//! The interface is fixed to the three entry points the gateway needs:
//! `decimals`, `balanceOf`, and `transfer`.

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, B256, U256},
    providers::{DynProvider, Provider},
    rpc::types::TransactionRequest,
    sol,
    sol_types::SolCall,
};

use crate::client;
use crate::error::GatewayError;

sol! {
    #[sol(rpc)]
    interface IERC20 {
        function decimals() external view returns (uint8);
        function balanceOf(address account) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
    }
}

/// ERC-20 contract wrapper.
///
/// Reads go through the generated instance; transfers are submitted through
/// the provider the contract was bound to, so a contract built over a signing
/// provider is read-write and one built over a plain provider is read-only.
pub struct Erc20Contract {
    contract: IERC20::IERC20Instance<DynProvider>,
    provider: DynProvider,
    address: Address,
}

impl Erc20Contract {
    /// Bind the fixed ERC-20 interface to a contract address.
    pub fn new(provider: DynProvider, contract_address: &str) -> Result<Self, GatewayError> {
        let address = client::parse_address(contract_address)?;
        let contract = IERC20::new(address, provider.clone());

        Ok(Self {
            contract,
            provider,
            address,
        })
    }

    /// The token contract address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Get the token decimals.
    pub async fn decimals(&self) -> Result<u8, GatewayError> {
        self.contract
            .decimals()
            .call()
            .await
            .map_err(|e| GatewayError::Contract(e.to_string()))
    }

    /// Get the raw token balance of an address.
    pub async fn balance_of(&self, wallet_address: &str) -> Result<U256, GatewayError> {
        let addr = client::parse_address(wallet_address)?;

        self.contract
            .balanceOf(addr)
            .call()
            .await
            .map_err(|e| GatewayError::Contract(e.to_string()))
    }

    /// Submit a `transfer(to, amount)` call with explicit gas price and nonce.
    ///
    /// Returns the hash of the submitted transaction; inclusion is not
    /// awaited.
    pub async fn transfer(
        &self,
        to: &str,
        amount: U256,
        gas_price: u128,
        nonce: u64,
    ) -> Result<B256, GatewayError> {
        let to_addr = client::parse_address(to)?;

        let call = IERC20::transferCall {
            to: to_addr,
            amount,
        };
        let data = call.abi_encode();

        let tx = TransactionRequest::default()
            .to(self.address)
            .input(data.into())
            .with_gas_price(gas_price)
            .with_nonce(nonce);

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| GatewayError::TransactionFailed(e.to_string()))?;

        Ok(*pending.tx_hash())
    }
}
