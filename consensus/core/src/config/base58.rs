use serde::Serialize;
use std::fmt;

/// Kinds of payload that get a version prefix before base58 encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
}

impl Base58Type {
    pub const ALL: [Base58Type; 5] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];
}

impl fmt::Display for Base58Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Base58Type::PubkeyAddress => "pubkey_address",
            Base58Type::ScriptAddress => "script_address",
            Base58Type::SecretKey => "secret_key",
            Base58Type::ExtPublicKey => "ext_public_key",
            Base58Type::ExtSecretKey => "ext_secret_key",
        };
        f.write_str(name)
    }
}

/// Version prefixes for every [`Base58Type`] on one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Base58Prefixes {
    pub pubkey_address: &'static [u8],
    pub script_address: &'static [u8],
    pub secret_key: &'static [u8],
    pub ext_public_key: &'static [u8],
    pub ext_secret_key: &'static [u8],
}

impl Base58Prefixes {
    pub fn get(&self, kind: Base58Type) -> &'static [u8] {
        match kind {
            Base58Type::PubkeyAddress => self.pubkey_address,
            Base58Type::ScriptAddress => self.script_address,
            Base58Type::SecretKey => self.secret_key,
            Base58Type::ExtPublicKey => self.ext_public_key,
            Base58Type::ExtSecretKey => self.ext_secret_key,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Base58Type, &'static [u8])> + '_ {
        Base58Type::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

pub const MAINNET_BASE58_PREFIXES: Base58Prefixes = Base58Prefixes {
    pubkey_address: &[50],
    script_address: &[9],
    secret_key: &[178],
    ext_public_key: &[0x04, 0x88, 0xb2, 0x1e],
    ext_secret_key: &[0x04, 0x88, 0xad, 0xe4],
};

/// Shared by testnet and regtest
pub const TESTNET_BASE58_PREFIXES: Base58Prefixes = Base58Prefixes {
    pubkey_address: &[88],
    script_address: &[188],
    secret_key: &[239],
    ext_public_key: &[0x04, 0x35, 0x87, 0xcf],
    ext_secret_key: &[0x04, 0x35, 0x83, 0x94],
};
