// src/agent/chains.rs
//
// Chain identifier tables. The extractor recognizes a small set of aliases
// that show up in free text; the model strategy additionally normalizes the
// display names a model tends to echo back from chain lists.

/// Hex chain id for Ethereum mainnet, the default bound alongside a bare
/// `0x` address when the prompt names no chain.
pub const ETHEREUM_MAINNET: &str = "0x1";

/// Aliases the parameter extractor scans for in free text, in scan order.
pub const EXTRACTOR_ALIASES: &[(&str, &str)] = &[
    ("ethereum", "0x1"),
    ("eth", "0x1"),
    ("polygon", "0x89"),
    ("bsc", "0x38"),
    ("arbitrum", "0xa4b1"),
    ("optimism", "0xa"),
    ("avalanche", "0xa86a"),
];

/// Display-name table used to normalize model-proposed `chain` values.
/// Mirrors the network list the upstream data provider documents.
const CHAIN_NAMES: &[(&str, &str)] = &[
    ("eth", "0x1"),
    ("ethereum", "0x1"),
    ("ethereum mainnet", "0x1"),
    ("bnb", "0x38"),
    ("bsc", "0x38"),
    ("bnb smart chain mainnet", "0x38"),
    ("base", "0x2105"),
    ("berachain", "0x138de"),
    ("arbitrum", "0xa4b1"),
    ("arbitrum one", "0xa4b1"),
    ("avalanche", "0xa86a"),
    ("avalanche c-chain", "0xa86a"),
    ("sonic mainnet", "0x92"),
    ("hemi", "0xa867"),
    ("polygon", "0x89"),
    ("polygon mainnet", "0x89"),
    ("zircuit mainnet", "0xbf04"),
    ("core blockchain mainnet", "0x45c"),
    ("unichain", "0x82"),
    ("sei network", "0x531"),
    ("cronos mainnet", "0x19"),
    ("bitlayer mainnet", "0x310c5"),
    ("metis andromeda mainnet", "0x440"),
    ("aurora mainnet", "0x4e454152"),
    ("fantom opera", "0xfa"),
    ("xdc mainnet", "0x32"),
    ("evmos mainnet", "0x2329"),
    ("theta mainnet", "0x169"),
    ("filecoin main network", "0x13a"),
    ("okxchain", "0x42"),
    ("moonbeam", "0x504"),
    ("gnosis", "0x64"),
    ("celo", "0xa4ec"),
    ("optimism", "0xa"),
    ("moonriver", "0x505"),
    ("klaytn cypress", "0x2019"),
    ("ronin mainnet", "0x7e4"),
    ("palm mainnet", "0x2a15c308d"),
    ("mantle", "0x1388"),
    ("pulsechain", "0x171"),
    ("zksync mainnet", "0x144"),
    ("fuse mainnet", "0x7a"),
    ("harmony mainnet (shard 0)", "0x63564c40"),
    ("iotex mainnet", "0x1251"),
    ("telos evm mainnet", "0x28"),
    ("boba network", "0x120"),
    ("boba bnb mainnet", "0xdbe0"),
    ("shiden", "0x150"),
    ("arbitrum nova", "0xa4ea"),
    ("ethereum classic", "0x3d"),
    ("gochain", "0x3c"),
];

/// Maps a chain name to its hex chain id. Values that already carry the
/// `0x` prefix pass through unchanged; unknown names yield `None` and the
/// caller surfaces the invalid-chain diagnostic.
pub fn normalize_chain(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.to_lowercase().starts_with("0x") {
        return Some(trimmed.to_string());
    }
    let lowered = trimmed.to_lowercase();
    CHAIN_NAMES
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|(_, id)| (*id).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_normalize_case_insensitively() {
        assert_eq!(normalize_chain("Ethereum Mainnet").as_deref(), Some("0x1"));
        assert_eq!(normalize_chain("  polygon  ").as_deref(), Some("0x89"));
        assert_eq!(normalize_chain("Arbitrum One").as_deref(), Some("0xa4b1"));
    }

    #[test]
    fn hex_ids_pass_through() {
        assert_eq!(normalize_chain("0x1").as_deref(), Some("0x1"));
        assert_eq!(normalize_chain("0x2105").as_deref(), Some("0x2105"));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(normalize_chain("dogechain"), None);
    }
}
