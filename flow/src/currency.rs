//! Conversion between token amounts and fiat amounts.
//!
//! Only the field the user is editing is authoritative; the other one is
//! recomputed here from a live price and fed back through the reducer.

use api::amount::DecimalAmount;
use api::amount::MAX_DECIMALS;
use api::amount::ParseAmountError;
use api::fiat_currency::FiatCurrency;
use api::price_map::PriceMap;
use api::price_map::PRICE_DECIMALS;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use num_traits::Zero;
use thiserror::Error;

use crate::draft::FiatOrCoin;
use crate::draft::TransactionDraft;
use crate::reducer::TransactionAction;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("no token selected")]
    NoToken,
    #[error("no price available for {0}")]
    NoPrice(String),
    #[error("exchange rate is zero")]
    ZeroPrice,
    #[error("converted amount is out of range")]
    Overflow,
    #[error(transparent)]
    Parse(#[from] ParseAmountError),
}

fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u32).pow(exp)
}

fn check_scale(decimals: u8) -> Result<(), ConversionError> {
    if decimals > MAX_DECIMALS {
        return Err(ConversionError::Overflow);
    }
    Ok(())
}

/// Converts a token amount to fiat at `price` per token, rounding down to the
/// currency's minor unit.
pub fn coin_to_fiat(
    amount: &DecimalAmount,
    price: &DecimalAmount,
    fiat: FiatCurrency,
) -> Result<DecimalAmount, ConversionError> {
    check_scale(amount.decimals())?;
    check_scale(price.decimals())?;
    let product = BigInt::from(amount.units()) * BigInt::from(price.units());
    let scaled = product * pow10(fiat.decimals() as u32);
    let minor = scaled / pow10(amount.decimals() as u32 + price.decimals() as u32);

    minor
        .to_u128()
        .map(|units| DecimalAmount::from_units(units, fiat.decimals()))
        .ok_or(ConversionError::Overflow)
}

/// Converts a fiat amount to token units at `price` per token, rounding down
/// to `token_decimals`.
pub fn fiat_to_coin(
    fiat_amount: &DecimalAmount,
    price: &DecimalAmount,
    token_decimals: u8,
) -> Result<DecimalAmount, ConversionError> {
    check_scale(token_decimals)?;
    check_scale(price.decimals())?;
    let price_big = BigInt::from(price.units());
    if price_big.is_zero() {
        return Err(ConversionError::ZeroPrice);
    }

    let numerator = BigInt::from(fiat_amount.units())
        * pow10(price.decimals() as u32 + token_decimals as u32);
    let denominator = price_big * pow10(fiat_amount.decimals() as u32);

    (numerator / denominator)
        .to_u128()
        .map(|units| DecimalAmount::from_units(units, token_decimals))
        .ok_or(ConversionError::Overflow)
}

/// The action that brings the non-authoritative amount field of `draft` in
/// line with `prices`.
pub fn derived_amount_action(
    draft: &TransactionDraft,
    prices: &PriceMap,
) -> Result<TransactionAction, ConversionError> {
    let token = draft.token_info.as_ref().ok_or(ConversionError::NoToken)?;
    let price = match prices.get(&token.symbol) {
        Some(price) => price,
        None => token
            .price
            .as_deref()
            .map(|p| DecimalAmount::parse(p, PRICE_DECIMALS))
            .transpose()?
            .ok_or_else(|| ConversionError::NoPrice(token.symbol.clone()))?,
    };
    let fiat = prices.currency();

    match draft.fiat_or_coin {
        FiatOrCoin::Coin => {
            let amount = DecimalAmount::parse(&draft.amount, token.decimals)?;
            let fiat_amount = coin_to_fiat(&amount, &price, fiat)?;
            Ok(TransactionAction::SetFiatAmount(fiat_amount.to_string()))
        }
        FiatOrCoin::Fiat => {
            let fiat_amount = DecimalAmount::parse(&draft.fiat_amount, fiat.decimals())?;
            let amount = fiat_to_coin(&fiat_amount, &price, token.decimals)?;
            Ok(TransactionAction::SetAmount(amount.to_trimmed_string()))
        }
    }
}
