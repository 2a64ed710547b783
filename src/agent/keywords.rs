// src/agent/keywords.rs
//
// Ordered keyword table for the deterministic matching strategy. Matching
// is strict first-match-wins over this literal order, so a short generic
// keyword placed early shadows more specific rules below it.

/// Pair of a lower-case keyword and the tool it routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub keyword: &'static str,
    pub tool: &'static str,
}

const fn rule(keyword: &'static str, tool: &'static str) -> KeywordRule {
    KeywordRule { keyword, tool }
}

/// The static routing table. Rules may reference a tool that was never
/// registered; such a rule resolves to the unknown-tool diagnostic at
/// lookup time rather than failing here.
pub const KEYWORD_RULES: &[KeywordRule] = &[
    // Wallet
    rule("what's in my wallet", "getWalletTokenBalancesPrices"),
    rule("nfts do i own", "getWalletNFTs"),
    rule("defi positions", "getDefiPositionsSummary"),
    rule("net worth", "getWalletNetWorth"),
    rule("pnl", "getWalletProfitabilitySummary"),
    rule("token approvals", "getWalletApprovals"),
    rule("swap history", "getSwapsByWalletAddress"),
    rule("chains am i active", "getWalletActiveChains"),
    rule("domain for", "resolveAddressToDomain"),
    rule("wallet owns", "resolveENSDomain"),
    // Tokens
    rule("price of", "getTokenPrice"),
    rule("holders of", "getTokenHolderStats"),
    rule("holder change", "getHistoricalTokenHolders"),
    rule("profitable traders", "getTopProfitableWalletPerToken"),
    rule("token analytics", "getTokenAnalytics"),
    rule("trading volume of", "getTokenStats"),
    rule("price chart", "getPairCandlesticks"),
    rule("token pairs", "getTokenPairs"),
    rule("filter tokens", "getFilteredTokens"),
    rule("search token", "searchTokens"),
    // Market
    rule("trending tokens", "getTrendingTokens"),
    rule("top gainers", "getTopGainersTokens"),
    rule("top tokens by market cap", "getTopERC20TokensByMarketCap"),
    // NFTs
    rule("who owns this nft", "getNFTOwners"),
    rule("floor price", "getNFTFloorPriceByContract"),
    rule("nft metadata", "getNFTMetadata"),
    rule("rarest nfts", "getNFTTraitsByCollection"),
    rule("trending nft collections", "getTopNFTCollectionsByTradingVolume"),
    rule("nft last sold", "getNFTSalePrices"),
    rule("nft trades", "getNFTTrades"),
    rule("my nft collections", "getWalletNFTCollections"),
];

/// Returns the tool name of the first rule whose keyword occurs in the
/// lower-cased prompt, if any.
pub fn match_rules(rules: &[KeywordRule], prompt: &str) -> Option<&'static str> {
    let lowered = prompt.to_lowercase();
    rules
        .iter()
        .find(|rule| lowered.contains(rule.keyword))
        .map(|rule| rule.tool)
}

/// [`match_rules`] over the built-in table.
pub fn match_keyword(prompt: &str) -> Option<&'static str> {
    match_rules(KEYWORD_RULES, prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_match_wins_in_table_order() {
        // "price of" precedes "price chart" in the table, so a prompt
        // containing both routes to the earlier rule.
        assert_eq!(
            match_keyword("show the price chart and price of PEPE"),
            Some("getTokenPrice")
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            match_keyword("What Wallet OWNS vitalik.eth"),
            Some("resolveENSDomain")
        );
    }

    #[test]
    fn matching_is_deterministic() {
        let prompt = "trending tokens on polygon";
        let first = match_keyword(prompt);
        for _ in 0..10 {
            assert_eq!(match_keyword(prompt), first);
        }
        assert_eq!(first, Some("getTrendingTokens"));
    }

    #[test]
    fn unmatched_prompt_yields_none() {
        assert_eq!(match_keyword("write me a haiku about rust"), None);
    }
}
