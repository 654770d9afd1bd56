// SPDX-License-Identifier: AGPL-3.0-or-later

//! Decimal scaling between raw integer units and display amounts.

use alloy::primitives::U256;

use crate::error::GatewayError;

/// Decimals of the chain's native currency.
pub const NATIVE_DECIMALS: u8 = 18;

/// Decimals of the gwei gas-price subunit.
const GWEI_DECIMALS: u8 = 9;

/// Parse a human-readable amount into raw units.
///
/// # Arguments
/// * `amount` - Amount as a string (e.g., "1.5")
/// * `decimals` - Number of decimals (18 for native, token-reported for ERC-20)
pub fn parse_amount(amount: &str, decimals: u8) -> Result<U256, GatewayError> {
    let parts: Vec<&str> = amount.split('.').collect();

    if parts.len() > 2 {
        return Err(GatewayError::InvalidAmount(
            "Invalid amount format".to_string(),
        ));
    }

    let whole = parts[0]
        .parse::<u128>()
        .map_err(|_| GatewayError::InvalidAmount("Invalid whole number".to_string()))?;

    let decimal_part = if parts.len() == 2 {
        let dec_str = parts[1];
        if dec_str.len() > decimals as usize {
            return Err(GatewayError::InvalidAmount(format!(
                "Too many decimal places (max {})",
                decimals
            )));
        }
        // Pad with zeros to match decimals
        let padded = format!("{:0<width$}", dec_str, width = decimals as usize);
        padded
            .parse::<u128>()
            .map_err(|_| GatewayError::InvalidAmount("Invalid decimal".to_string()))?
    } else {
        0u128
    };

    let multiplier = 10u128
        .checked_pow(decimals as u32)
        .ok_or_else(|| GatewayError::InvalidAmount(format!("Decimals out of range: {decimals}")))?;
    let total = whole
        .checked_mul(multiplier)
        .and_then(|w| w.checked_add(decimal_part))
        .ok_or_else(|| GatewayError::InvalidAmount("Amount overflow".to_string()))?;

    Ok(U256::from(total))
}

/// Parse a human-readable gwei amount into wei.
pub fn parse_gwei(amount: &str) -> Result<u128, GatewayError> {
    let wei = parse_amount(amount, GWEI_DECIMALS)?;
    u128::try_from(wei).map_err(|_| GatewayError::InvalidAmount("Amount overflow".to_string()))
}

/// Format raw units as a human-readable decimal string.
///
/// `decimals` comes from the token contract and is untrusted; values whose
/// divisor exceeds `U256` are rejected.
pub fn format_units(amount: U256, decimals: u8) -> Result<String, GatewayError> {
    if amount.is_zero() {
        return Ok("0".to_string());
    }

    let divisor = U256::from(10u64)
        .checked_pow(U256::from(decimals))
        .ok_or_else(|| GatewayError::InvalidAmount(format!("Decimals out of range: {decimals}")))?;
    let whole = amount / divisor;
    let remainder = amount % divisor;

    if remainder.is_zero() {
        Ok(whole.to_string())
    } else {
        let decimal_str = format!("{:0>width$}", remainder, width = decimals as usize);
        let trimmed = decimal_str.trim_end_matches('0');
        if trimmed.is_empty() {
            Ok(whole.to_string())
        } else {
            Ok(format!("{}.{}", whole, trimmed))
        }
    }
}

/// Scale raw units down by `10^decimals` into a float.
pub fn units_to_f64(amount: U256, decimals: u8) -> Result<f64, GatewayError> {
    format_units(amount, decimals)?
        .parse::<f64>()
        .map_err(|e| GatewayError::InvalidAmount(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_whole() {
        let result = parse_amount("1", 18).unwrap();
        assert_eq!(result, U256::from(1_000_000_000_000_000_000u64));
    }

    #[test]
    fn parse_amount_decimal() {
        let result = parse_amount("1.5", 18).unwrap();
        assert_eq!(result, U256::from(1_500_000_000_000_000_000u64));
    }

    #[test]
    fn parse_amount_six_decimals() {
        // amount 10 with 6 token decimals scales to 10000000
        let result = parse_amount("10", 6).unwrap();
        assert_eq!(result, U256::from(10_000_000u64));
    }

    #[test]
    fn parse_amount_small() {
        let result = parse_amount("0.001", 18).unwrap();
        assert_eq!(result, U256::from(1_000_000_000_000_000u64));
    }

    #[test]
    fn parse_amount_rejects_double_dot() {
        assert!(matches!(
            parse_amount("1.2.3", 18),
            Err(GatewayError::InvalidAmount(_))
        ));
    }

    #[test]
    fn parse_amount_rejects_excess_precision() {
        assert!(matches!(
            parse_amount("1.0000001", 6),
            Err(GatewayError::InvalidAmount(_))
        ));
    }

    #[test]
    fn parse_gwei_to_wei() {
        assert_eq!(parse_gwei("20").unwrap(), 20_000_000_000u128);
        assert_eq!(parse_gwei("1.5").unwrap(), 1_500_000_000u128);
    }

    #[test]
    fn format_units_whole_and_fraction() {
        let one = U256::from(1_000_000_000_000_000_000u64);
        assert_eq!(format_units(one, 18).unwrap(), "1");

        let one_and_half = U256::from(1_500_000_000_000_000_000u64);
        assert_eq!(format_units(one_and_half, 18).unwrap(), "1.5");

        assert_eq!(format_units(U256::ZERO, 18).unwrap(), "0");
    }

    #[test]
    fn format_units_six_decimals() {
        let one = U256::from(1_000_000u64);
        assert_eq!(format_units(one, 6).unwrap(), "1");

        let one_and_half = U256::from(1_500_000u64);
        assert_eq!(format_units(one_and_half, 6).unwrap(), "1.5");
    }

    #[test]
    fn parse_amount_rejects_out_of_range_decimals() {
        // 10^40 exceeds u128; a hostile contract can report any decimals value
        assert!(matches!(
            parse_amount("1", 40),
            Err(GatewayError::InvalidAmount(_))
        ));
        assert!(matches!(
            parse_amount("1", u8::MAX),
            Err(GatewayError::InvalidAmount(_))
        ));
    }

    #[test]
    fn format_units_rejects_out_of_range_decimals() {
        // 10^80 exceeds U256
        assert!(matches!(
            format_units(U256::from(1u64), 80),
            Err(GatewayError::InvalidAmount(_))
        ));
    }

    #[test]
    fn units_to_f64_rejects_out_of_range_decimals() {
        assert!(matches!(
            units_to_f64(U256::from(1u64), 80),
            Err(GatewayError::InvalidAmount(_))
        ));
    }

    #[test]
    fn units_to_f64_native_balance() {
        // raw native balance 2500000000000000000 reads as 2.5
        let raw = U256::from(2_500_000_000_000_000_000u64);
        assert_eq!(units_to_f64(raw, NATIVE_DECIMALS).unwrap(), 2.5);
    }

    #[test]
    fn units_to_f64_token_balance() {
        let raw = U256::from(10_000_000u64);
        assert_eq!(units_to_f64(raw, 6).unwrap(), 10.0);
    }
}
