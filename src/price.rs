//! Uniswap V3 sqrtPriceX96 fixed-point price codec.
//!
//! A pool price is stored as `sqrt(price) * 2^96` in an unsigned integer,
//! so `price = sqrtPriceX96^2 / 2^192`. Intermediates reach 2^192 and
//! beyond, hence the U256/U512 arithmetic.

use primitive_types::{U256, U512};
use serde::{Deserialize, Serialize};

use crate::core::error::ParserError;

/// Fractional digits preserved when expanding prices below 1.0. Very small
/// prices would otherwise lose every significant digit.
const SMALL_PRICE_DIGITS: usize = 20;

/// Decimal price and its reciprocal, both as decimal strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub price: String,
    pub inverted_price: String,
}

/// Encode a human decimal price as `floor(sqrt(price) * 2^96)`.
///
/// The square root runs in double precision (price magnitudes are bounded
/// in practice); the 2^96 scale is applied exactly on the float's
/// mantissa/exponent so the multiply loses nothing.
pub fn price_to_sqrt_x96(price: f64) -> Result<U256, ParserError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ParserError::InvalidPrice(price));
    }
    let scaled = price.sqrt() * 2f64.powi(96);
    f64_to_u256_floor(scaled).ok_or(ParserError::InvalidPrice(price))
}

/// Decode a sqrtPriceX96 value into a decimal price and its inverse.
///
/// Prices below 1.0 are expanded by scaled-integer division keeping
/// [`SMALL_PRICE_DIGITS`] fractional digits; at or above 1.0, double
/// division is precise enough. A zero price cannot be inverted and is
/// reported as `DivisionByZero`.
pub fn sqrt_x96_to_price(sqrt_price_x96: U256) -> Result<PriceQuote, ParserError> {
    let numerator: U512 = sqrt_price_x96.full_mul(sqrt_price_x96);
    let denominator: U512 = U512::one() << 192;

    let price = if numerator < denominator {
        expand_small_price(numerator, denominator)
    } else {
        let ratio = u512_to_f64(numerator) / 2f64.powi(192);
        format!("{ratio}")
    };

    let price_value: f64 = price.parse().unwrap_or(0.0);
    if price_value == 0.0 {
        return Err(ParserError::DivisionByZero);
    }
    let inverted_price = format!("{}", 1.0 / price_value);

    Ok(PriceQuote {
        price,
        inverted_price,
    })
}

/// Parse a decimal-string sqrtPriceX96, the form it arrives in from JSON
/// payloads and form input.
pub fn parse_sqrt_x96(value: &str) -> Result<U256, ParserError> {
    U256::from_dec_str(value.trim())
        .map_err(|_| ParserError::InvalidSqrtPrice(value.to_string()))
}

/// Decimal expansion of `numerator / denominator` for ratios below 1.0,
/// with trailing zeros trimmed.
fn expand_small_price(numerator: U512, denominator: U512) -> String {
    let precision = U512::from(10u64).pow(U512::from(SMALL_PRICE_DIGITS));
    // numerator < 2^192, precision < 2^67: the product fits U512 easily.
    let scaled = numerator * precision / denominator;

    let digits = format!("{:0>width$}", scaled.to_string(), width = SMALL_PRICE_DIGITS + 1);
    let split = digits.len() - SMALL_PRICE_DIGITS;
    let integer_part = &digits[..split];
    let decimal_part = digits[split..].trim_end_matches('0');

    if decimal_part.is_empty() {
        integer_part.to_string()
    } else {
        format!("{integer_part}.{decimal_part}")
    }
}

/// Exact floor conversion of a non-negative finite f64 into a U256, via
/// mantissa/exponent decomposition. Returns None when the value does not
/// fit 256 bits.
fn f64_to_u256_floor(value: f64) -> Option<U256> {
    if value < 1.0 {
        return Some(U256::zero());
    }

    let bits = value.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i64 - 1075;
    let mantissa = (bits & ((1u64 << 52) - 1)) | (1u64 << 52);

    if exponent >= 0 {
        if exponent as u32 + 53 > 256 {
            return None;
        }
        Some(U256::from(mantissa) << (exponent as usize))
    } else {
        Some(U256::from(mantissa) >> ((-exponent) as usize))
    }
}

fn u512_to_f64(value: U512) -> f64 {
    // Decimal round trip keeps the full 53-bit precision of the target.
    value.to_string().parse::<f64>().unwrap_or(f64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative_error(actual: f64, expected: f64) -> f64 {
        ((actual - expected) / expected).abs()
    }

    #[test]
    fn negative_price_is_rejected() {
        assert!(matches!(
            price_to_sqrt_x96(-1.5),
            Err(ParserError::InvalidPrice(_))
        ));
    }

    #[test]
    fn non_finite_price_is_rejected() {
        assert!(price_to_sqrt_x96(f64::NAN).is_err());
        assert!(price_to_sqrt_x96(f64::INFINITY).is_err());
    }

    #[test]
    fn zero_price_encodes_to_zero() {
        assert_eq!(price_to_sqrt_x96(0.0).unwrap(), U256::zero());
    }

    #[test]
    fn unit_price_encodes_to_two_pow_96() {
        let sqrt = price_to_sqrt_x96(1.0).unwrap();
        assert_eq!(sqrt, U256::one() << 96);
    }

    #[test]
    fn round_trip_preserves_price() {
        for price in [1e-6, 0.01, 0.25, 1.0, 1.5, 42.0, 1e4, 1e6] {
            let sqrt = price_to_sqrt_x96(price).unwrap();
            let quote = sqrt_x96_to_price(sqrt).unwrap();
            let decoded: f64 = quote.price.parse().unwrap();
            assert!(
                relative_error(decoded, price) < 1e-6,
                "price {price} decoded as {decoded}"
            );
        }
    }

    #[test]
    fn inversion_is_symmetric() {
        for price in [0.25, 1.5, 100.0] {
            let sqrt = price_to_sqrt_x96(price).unwrap();
            let quote = sqrt_x96_to_price(sqrt).unwrap();
            let inverted: f64 = quote.inverted_price.parse().unwrap();
            assert!(relative_error(inverted, 1.0 / price) < 1e-6);
        }
    }

    #[test]
    fn encoding_is_strictly_monotonic() {
        let prices = [1e-9, 1e-6, 0.5, 1.0, 1.5, 2.0, 1e3, 1e6, 1e9];
        let encoded: Vec<U256> = prices
            .iter()
            .map(|p| price_to_sqrt_x96(*p).unwrap())
            .collect();
        for pair in encoded.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn small_price_expansion_is_exact() {
        // sqrt = 2^95 means price = 2^190 / 2^192 = 0.25 exactly.
        let quote = sqrt_x96_to_price(U256::one() << 95).unwrap();
        assert_eq!(quote.price, "0.25");
        let inverted: f64 = quote.inverted_price.parse().unwrap();
        assert!((inverted - 4.0).abs() < 1e-12);
    }

    #[test]
    fn zero_sqrt_price_cannot_be_inverted() {
        assert!(matches!(
            sqrt_x96_to_price(U256::zero()),
            Err(ParserError::DivisionByZero)
        ));
    }

    #[test]
    fn decimal_string_parsing() {
        let sqrt = parse_sqrt_x96("79228162514264337593543950336").unwrap();
        assert_eq!(sqrt, U256::one() << 96);
        assert!(parse_sqrt_x96("not-a-number").is_err());
        assert!(parse_sqrt_x96("-5").is_err());
    }

    #[test]
    fn concrete_price_example() {
        // The 1.5 example: encode then decode stays within tolerance.
        let sqrt = price_to_sqrt_x96(1.5).unwrap();
        let quote = sqrt_x96_to_price(sqrt).unwrap();
        let decoded: f64 = quote.price.parse().unwrap();
        assert!(relative_error(decoded, 1.5) < 1e-6);
    }
}
