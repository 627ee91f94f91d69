//! Payment types and the request shape handed to the transaction
//! builder.

use serde::Serialize;

use satchel_explorer::Utxo;

/// Satoshis per whole BSV unit.
pub const SATOSHIS_PER_BSV: f64 = 100_000_000.0;

/// Convert a BSV amount to satoshis: scaled by 10^8 and rounded to the
/// nearest integer, ties away from zero.
pub fn bsv_to_satoshis(amount: f64) -> u64 {
    (amount * SATOSHIS_PER_BSV).round() as u64
}

/// A payment recipient as the caller supplies it, in BSV units.
#[derive(Debug, Clone)]
pub struct Payee {
    /// Destination address string.
    pub to: String,
    /// Amount in BSV.
    pub amount: f64,
}

impl Payee {
    /// The satoshi-denominated form forwarded to the builder.
    pub fn pay_to(&self) -> PayTo {
        PayTo {
            address: self.to.clone(),
            value: bsv_to_satoshis(self.amount),
        }
    }
}

/// A recipient in the builder's wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayTo {
    /// Destination address string.
    pub address: String,
    /// Amount in satoshis.
    pub value: u64,
}

/// The pay descriptor: everything the builder needs to fund and sign.
#[derive(Debug, Clone, Serialize)]
pub struct Pay {
    /// Explorer endpoint for the wallet's network, for builders that do
    /// their own lookups.
    pub rpc: String,
    /// The signing key in WIF form.
    pub key: String,
    /// Recipients in satoshis.
    pub to: Vec<PayTo>,
    /// Fee rate in satoshis per byte.
    pub feeb: f64,
    /// The inputs to spend.
    pub utxos: Vec<Utxo>,
}

/// A complete build request: data payload, pay descriptor, and any
/// caller-supplied overrides merged in at the top level.
#[derive(Debug, Clone, Serialize)]
pub struct BuildRequest {
    /// Raw data payload carried by the transaction, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Payment descriptor.
    pub pay: Pay,
    /// Extra fields forwarded verbatim to the builder.
    #[serde(flatten)]
    pub overrides: serde_json::Map<String, serde_json::Value>,
}

/// Caller-side knobs for [`Wallet::build_tx`](crate::Wallet::build_tx).
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Pre-selected inputs. When set, the wallet skips its own UTXO
    /// fetch entirely (manual coin control).
    pub utxos: Option<Vec<Utxo>>,
    /// Extra fields forwarded verbatim to the builder.
    pub overrides: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_satoshi() {
        assert_eq!(bsv_to_satoshis(0.00000001), 1);
    }

    #[test]
    fn test_exact_scaling() {
        assert_eq!(bsv_to_satoshis(1.23456789), 123_456_789);
        assert_eq!(bsv_to_satoshis(0.0), 0);
        assert_eq!(bsv_to_satoshis(21.0), 2_100_000_000);
    }

    #[test]
    fn test_fractional_satoshis_round_to_nearest() {
        assert_eq!(bsv_to_satoshis(0.000000014), 1);
        assert_eq!(bsv_to_satoshis(0.000000016), 2);
    }

    #[test]
    fn test_payee_conversion() {
        let payee = Payee {
            to: "1E7ucTTWRTahCyViPhxSMor2pj4VGQdFMr".to_string(),
            amount: 0.005,
        };
        assert_eq!(
            payee.pay_to(),
            PayTo {
                address: "1E7ucTTWRTahCyViPhxSMor2pj4VGQdFMr".to_string(),
                value: 500_000,
            }
        );
    }

    #[test]
    fn test_overrides_flatten_into_request() {
        let mut overrides = serde_json::Map::new();
        overrides.insert("changeAddress".to_string(), serde_json::json!("1abc"));

        let request = BuildRequest {
            data: None,
            pay: Pay {
                rpc: "https://api.whatsonchain.com/v1/bsv/test".to_string(),
                key: "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn".to_string(),
                to: vec![],
                feeb: 0.5,
                utxos: vec![],
            },
            overrides,
        };

        let value = serde_json::to_value(&request).unwrap();
        // data is absent, overrides sit at the top level next to pay
        assert!(value.get("data").is_none());
        assert_eq!(value["changeAddress"], "1abc");
        assert_eq!(value["pay"]["feeb"], 0.5);
    }
}
