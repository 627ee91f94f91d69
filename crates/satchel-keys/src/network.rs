//! Network selection and the version bytes that encode it.
//!
//! Keys and addresses are scoped to a network; the scope is recoverable
//! from their serialized forms via the WIF prefix and the P2PKH version
//! byte.

use std::fmt;
use std::str::FromStr;

/// The Bitcoin SV network a key or address belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Network {
    /// Mainnet (WIF prefix 0x80, addresses starting with '1').
    Mainnet,
    /// Testnet (WIF prefix 0xef, addresses starting with 'm' or 'n').
    Testnet,
}

impl Network {
    /// The WIF version byte for private keys on this network.
    pub fn wif_prefix(self) -> u8 {
        match self {
            Network::Mainnet => 0x80,
            Network::Testnet => 0xef,
        }
    }

    /// The P2PKH address version byte for this network.
    pub fn p2pkh_prefix(self) -> u8 {
        match self {
            Network::Mainnet => 0x00,
            Network::Testnet => 0x6f,
        }
    }

    /// Canonical lowercase name, used for storage key scoping.
    pub fn as_str(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }

    /// Detect the network from a WIF version byte.
    pub fn from_wif_prefix(byte: u8) -> Option<Self> {
        match byte {
            0x80 => Some(Network::Mainnet),
            0xef => Some(Network::Testnet),
            _ => None,
        }
    }

    /// Detect the network from a P2PKH address version byte.
    pub fn from_p2pkh_prefix(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(Network::Mainnet),
            0x6f => Some(Network::Testnet),
            _ => None,
        }
    }
}

impl Default for Network {
    fn default() -> Self {
        Network::Mainnet
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            other => Err(format!("unknown network '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_roundtrip() {
        for network in [Network::Mainnet, Network::Testnet] {
            assert_eq!(Network::from_wif_prefix(network.wif_prefix()), Some(network));
            assert_eq!(
                Network::from_p2pkh_prefix(network.p2pkh_prefix()),
                Some(network)
            );
        }
    }

    #[test]
    fn test_name_roundtrip() {
        assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("testnet".parse::<Network>().unwrap(), Network::Testnet);
        assert!("regtest".parse::<Network>().is_err());
    }
}
