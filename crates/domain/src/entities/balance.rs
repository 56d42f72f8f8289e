//! Per-account liquidity pool balances.

use crate::error::{Result, XswapError};
use crate::value_objects::Balance;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Holding of one constituent asset inside a pool position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBalance {
    /// Asset identifier.
    pub asset: String,
    /// Total amount of the asset held by the pool, when known.
    #[serde(default)]
    pub total_amount: Option<Decimal>,
    /// USD price of one unit of the asset.
    #[serde(default)]
    pub usd_price: Decimal,
    /// The account's share of the asset.
    pub user_balance: Balance,
}

/// An account's position in a single liquidity pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolBalance {
    /// Account holding the position.
    pub account: String,
    /// Pool address.
    pub address: String,
    /// Constituent asset balances.
    pub assets: Vec<AssetBalance>,
    /// Total LP token supply of the pool, when known.
    #[serde(default)]
    pub total_supply: Option<Decimal>,
    /// The account's LP token balance.
    pub user_balance: Balance,
    /// Position NFT for concentrated liquidity pools.
    #[serde(default)]
    pub nft_id: Option<String>,
    /// Price bounds for concentrated liquidity pools.
    #[serde(default)]
    pub price_range: Option<Vec<Decimal>>,
}

impl PoolBalance {
    /// Folds another position in the same pool into this one.
    ///
    /// `user_balance` is summed. Assets already present are summed in place;
    /// unseen assets are appended in the order they arrive. Every other
    /// field, `account` included, keeps the value this record was seeded with.
    ///
    /// # Errors
    /// Returns `Overflow` if a sum leaves the decimal range. `account` names
    /// the holder of `other` in the error.
    pub fn merge(&mut self, other: &PoolBalance, account: &str) -> Result<()> {
        let address = self.address.as_str();
        let overflow = || XswapError::overflow(format!("pool {address} of account {account}"));

        self.user_balance = self
            .user_balance
            .checked_add(other.user_balance)
            .ok_or_else(overflow)?;

        for incoming in &other.assets {
            match self.assets.iter_mut().find(|a| a.asset == incoming.asset) {
                Some(existing) => {
                    existing.user_balance = existing
                        .user_balance
                        .checked_add(incoming.user_balance)
                        .ok_or_else(overflow)?;
                }
                None => self.assets.push(incoming.clone()),
            }
        }
        Ok(())
    }

    /// Asset identifiers in pool order.
    pub fn asset_ids(&self) -> Vec<String> {
        self.assets.iter().map(|a| a.asset.clone()).collect()
    }

    /// Checks that the identifiers aggregation keys on are present.
    ///
    /// # Errors
    /// Returns `MalformedInput` for a blank pool address or asset identifier.
    pub fn validate(&self, account: &str) -> Result<()> {
        if self.address.trim().is_empty() {
            return Err(XswapError::malformed(
                format!("balances of account {account}"),
                "pool address is empty",
            ));
        }
        if let Some(pos) = self.assets.iter().position(|a| a.asset.trim().is_empty()) {
            return Err(XswapError::malformed(
                format!("pool {} of account {account}", self.address),
                format!("asset #{pos} has an empty identifier"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn asset(id: &str, amount: Decimal) -> AssetBalance {
        AssetBalance {
            asset: id.to_string(),
            total_amount: Some(dec!(1000)),
            usd_price: dec!(2),
            user_balance: Balance::new(amount, amount * dec!(2)),
        }
    }

    fn position(account: &str, assets: Vec<AssetBalance>, lp: Decimal) -> PoolBalance {
        PoolBalance {
            account: account.to_string(),
            address: "0xpool".to_string(),
            assets,
            total_supply: Some(dec!(100)),
            user_balance: Balance::new(lp, lp),
            nft_id: None,
            price_range: None,
        }
    }

    #[test]
    fn test_merge_sums_existing_and_appends_new_assets() {
        let mut seed = position("0xa", vec![asset("WETH", dec!(1)), asset("DAI", dec!(10))], dec!(3));
        let other = position("0xb", vec![asset("USDC", dec!(4)), asset("WETH", dec!(2))], dec!(2));

        seed.merge(&other, "0xb").unwrap();

        assert_eq!(seed.account, "0xa");
        assert_eq!(seed.user_balance, Balance::new(dec!(5), dec!(5)));
        assert_eq!(seed.asset_ids(), vec!["WETH", "DAI", "USDC"]);
        assert_eq!(seed.assets[0].user_balance, Balance::new(dec!(3), dec!(6)));
        assert_eq!(seed.assets[0].usd_price, dec!(2));
        assert_eq!(seed.assets[1].user_balance.amount, dec!(10));
        assert_eq!(seed.assets[2].user_balance.amount, dec!(4));
    }

    #[test]
    fn test_merge_does_not_touch_the_other_record() {
        let mut seed = position("0xa", vec![asset("WETH", dec!(1))], dec!(1));
        let other = position("0xb", vec![asset("WETH", dec!(2))], dec!(1));
        let snapshot = other.clone();

        seed.merge(&other, "0xb").unwrap();
        assert_eq!(other, snapshot);
    }

    #[test]
    fn test_merge_overflow_is_an_error() {
        let mut seed = position("0xa", vec![asset("WETH", dec!(1))], Decimal::MAX);
        let other = position("0xb", vec![asset("WETH", dec!(1))], dec!(1));

        let err = seed.merge(&other, "0xb").unwrap_err();
        assert!(matches!(err, XswapError::Overflow { .. }));
        assert_eq!(err.to_string(), "Sum overflows in pool 0xpool of account 0xb");

        let large = dec!(30000000000000000000000000000);
        let mut seed = position("0xa", vec![asset("WETH", large)], dec!(1));
        let other = position("0xb", vec![asset("WETH", large)], dec!(1));
        assert!(matches!(
            seed.merge(&other, "0xb"),
            Err(XswapError::Overflow { .. })
        ));
    }

    #[test]
    fn test_nullable_fields_serialize_as_null() {
        let record = position("0xa", Vec::new(), dec!(1));
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["nftId"].is_null());
        assert!(json["priceRange"].is_null());
        assert!(json.as_object().unwrap().contains_key("nftId"));
        assert!(json.as_object().unwrap().contains_key("priceRange"));
    }

    #[test]
    fn test_price_range_accepts_any_length() {
        let json = r#"{"account": "0xa", "address": "0xpool", "assets": [],
            "userBalance": {"amount": "1", "usdValue": "1"}, "priceRange": ["1", "2", "3"]}"#;
        let record: PoolBalance = serde_json::from_str(json).unwrap();
        assert_eq!(record.price_range.map(|r| r.len()), Some(3));
        assert_eq!(record.total_supply, None);
    }

    #[test]
    fn test_validate_rejects_blank_identifiers() {
        let mut record = position("0xa", vec![asset("WETH", dec!(1))], dec!(1));
        assert!(record.validate("0xa").is_ok());

        record.assets.push(asset(" ", dec!(1)));
        let err = record.validate("0xa").unwrap_err();
        assert!(err.to_string().contains("asset #1"));

        record.address = String::new();
        let err = record.validate("0xa").unwrap_err();
        assert!(matches!(err, XswapError::MalformedInput { .. }));
    }

    #[test]
    fn test_deserialize_frontend_shape() {
        let json = r#"{
            "account": "0xa",
            "address": "0xpool",
            "assets": [
                {"asset": "WETH", "totalAmount": "10", "usdPrice": "2000",
                 "userBalance": {"amount": "1", "usdValue": "2000"}}
            ],
            "totalSupply": null,
            "userBalance": {"amount": "0.5", "usdValue": "4000"},
            "nftId": "42",
            "priceRange": ["1800", "2200"]
        }"#;

        let record: PoolBalance = serde_json::from_str(json).unwrap();
        assert_eq!(record.total_supply, None);
        assert_eq!(record.nft_id.as_deref(), Some("42"));
        assert_eq!(record.price_range, Some(vec![dec!(1800), dec!(2200)]));
        assert_eq!(record.assets[0].total_amount, Some(dec!(10)));
    }
}
