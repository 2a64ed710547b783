// src/agent/extract.rs
//
// Scans a raw prompt for recognizable literals and turns them into a
// partial parameter mapping. Absence of a pattern is not an error; the
// parameter simply stays unbound.

use lazy_static::lazy_static;
use regex::Regex;

use super::chains::{EXTRACTOR_ALIASES, ETHEREUM_MAINNET};
use super::registry::ToolParams;

lazy_static! {
    // 0x-prefixed 40-hex-digit account or contract address.
    static ref ADDRESS_RE: Regex = Regex::new(r"(?i)0x[0-9a-f]{40}").unwrap();
    // Domain-shaped literal, e.g. "vitalik.eth". Only consulted when the
    // prompt mentions ".eth" somewhere.
    static ref DOMAIN_RE: Regex = Regex::new(r"[A-Za-z0-9-]+\.[A-Za-z]{2,}").unwrap();
}

/// Extracts `address`, `domain`, and `chain` bindings from a prompt.
///
/// An address match defaults `chain` to Ethereum mainnet; an explicit chain
/// alias anywhere in the prompt overrides that default.
pub fn extract(prompt: &str) -> ToolParams {
    let mut params = ToolParams::new();
    let mut chain_defaulted = false;

    if let Some(address) = ADDRESS_RE.find(prompt) {
        params.insert("address", address.as_str());
        params.insert("chain", ETHEREUM_MAINNET);
        chain_defaulted = true;
    }

    if prompt.contains(".eth") {
        if let Some(domain) = DOMAIN_RE.find(prompt) {
            params.insert("domain", domain.as_str());
        }
    }

    let lowered = prompt.to_lowercase();
    if !params.contains("chain") || chain_defaulted {
        if let Some((_, id)) = EXTRACTOR_ALIASES
            .iter()
            .find(|(alias, _)| lowered.contains(alias))
        {
            params.insert("chain", *id);
        }
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_binds_with_mainnet_default() {
        let params = extract("price of 0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA");
        assert_eq!(
            params.get("address"),
            Some("0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA")
        );
        assert_eq!(params.get("chain"), Some("0x1"));
    }

    #[test]
    fn first_address_occurrence_wins() {
        let params = extract(
            "compare 0x1111111111111111111111111111111111111111 \
             with 0x2222222222222222222222222222222222222222",
        );
        assert_eq!(
            params.get("address"),
            Some("0x1111111111111111111111111111111111111111")
        );
    }

    #[test]
    fn explicit_chain_alias_overrides_default() {
        let params = extract(
            "balance of 0x1111111111111111111111111111111111111111 on polygon",
        );
        assert_eq!(params.get("chain"), Some("0x89"));
        assert_eq!(
            params.get("address"),
            Some("0x1111111111111111111111111111111111111111")
        );
    }

    #[test]
    fn ens_domain_is_extracted() {
        let params = extract("what wallet owns vitalik.eth");
        assert_eq!(params.get("domain"), Some("vitalik.eth"));
        assert_eq!(params.get("address"), None);
    }

    #[test]
    fn domain_rule_requires_dot_eth_mention() {
        let params = extract("open moralis.io and check volume");
        assert_eq!(params.get("domain"), None);
    }

    #[test]
    fn chain_alias_alone_binds_chain() {
        let params = extract("trending tokens on avalanche");
        assert_eq!(params.get("chain"), Some("0xa86a"));
        assert_eq!(params.get("address"), None);
    }

    #[test]
    fn short_hex_strings_do_not_bind_address() {
        let params = extract("what is 0x1234 doing");
        assert!(params.is_empty());
    }

    #[test]
    fn no_patterns_leave_mapping_empty() {
        assert!(extract("trending tokens").is_empty());
    }
}
