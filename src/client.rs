// SPDX-License-Identifier: AGPL-3.0-or-later

//! Provider and signer construction.
//!
//! Providers are pure functions of the RPC URL: every call builds a fresh
//! handle and nothing is cached process-wide. Signing providers carry an
//! [`EthereumWallet`] so transactions sent through them are signed locally.

use std::str::FromStr;

use alloy::{
    network::EthereumWallet,
    primitives::Address,
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};

use crate::error::GatewayError;

/// Build a fresh read-only provider for the given RPC endpoint.
pub fn connect_http(rpc_url: &str) -> Result<DynProvider, GatewayError> {
    let url: url::Url = rpc_url
        .parse()
        .map_err(|e: url::ParseError| GatewayError::InvalidRpcUrl(e.to_string()))?;

    Ok(ProviderBuilder::new().connect_http(url).erased())
}

/// Build a fresh signing provider bound to the given wallet.
pub fn connect_signing(
    rpc_url: &str,
    wallet: EthereumWallet,
) -> Result<DynProvider, GatewayError> {
    let url: url::Url = rpc_url
        .parse()
        .map_err(|e: url::ParseError| GatewayError::InvalidRpcUrl(e.to_string()))?;

    Ok(ProviderBuilder::new().wallet(wallet).connect_http(url).erased())
}

/// Parse a signer from a hex private key, with or without `0x` prefix.
pub fn parse_signer(private_key: &str) -> Result<PrivateKeySigner, GatewayError> {
    let hex_key = private_key.strip_prefix("0x").unwrap_or(private_key);

    let key_bytes = alloy::hex::decode(hex_key)
        .map_err(|e| GatewayError::InvalidPrivateKey(e.to_string()))?;

    PrivateKeySigner::from_slice(&key_bytes)
        .map_err(|e| GatewayError::InvalidPrivateKey(e.to_string()))
}

/// Parse a `0x`-prefixed hex account address.
pub fn parse_address(address: &str) -> Result<Address, GatewayError> {
    Address::from_str(address).map_err(|e| GatewayError::InvalidAddress(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_KEY: &str = "0000000000000000000000000000000000000000000000000000000000000001";

    #[test]
    fn connect_http_rejects_invalid_url() {
        let result = connect_http("not a valid url");
        assert!(matches!(result, Err(GatewayError::InvalidRpcUrl(_))));
    }

    #[test]
    fn connect_http_accepts_https_endpoint() {
        assert!(connect_http("https://node.example/rpc").is_ok());
    }

    #[test]
    fn parse_signer_accepts_prefixed_and_bare_keys() {
        let bare = parse_signer(TEST_KEY).unwrap();
        let prefixed = parse_signer(&format!("0x{TEST_KEY}")).unwrap();
        assert_eq!(bare.address(), prefixed.address());
    }

    #[test]
    fn parse_signer_derives_known_address() {
        // secp256k1 private key 1 has a well-known account address
        let signer = parse_signer(TEST_KEY).unwrap();
        assert_eq!(
            signer.address().to_string(),
            "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"
        );
    }

    #[test]
    fn parse_signer_rejects_garbage() {
        assert!(matches!(
            parse_signer("zz"),
            Err(GatewayError::InvalidPrivateKey(_))
        ));
        // valid hex, wrong length
        assert!(matches!(
            parse_signer("abcd"),
            Err(GatewayError::InvalidPrivateKey(_))
        ));
    }

    #[test]
    fn parse_address_rejects_short_input() {
        assert!(matches!(
            parse_address("0xABC"),
            Err(GatewayError::InvalidAddress(_))
        ));
    }

    #[test]
    fn parse_address_accepts_full_address() {
        let addr = parse_address("0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf").unwrap();
        assert_eq!(
            addr.to_string(),
            "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"
        );
    }
}
