// src/tools/market.rs
//
// Market-wide discovery tools: trending, gainers, market cap, search.

use serde_json::{json, Value};

use crate::agent::registry::ToolDescriptor;

pub fn market_tools() -> Vec<ToolDescriptor> {
    vec![
        // Discovery tools run on defaults so a bare prompt like "trending
        // tokens" executes with an empty parameter mapping; an extracted
        // chain still narrows the query.
        ToolDescriptor::new(
            "getTrendingTokens",
            &[],
            "list: token, price, trend score",
            Box::new(|api, p| {
                Box::pin(async move {
                    api.get(
                        "tokens/trending",
                        &[("chain", p.get_or("chain", "eth").to_string())],
                    )
                    .await
                })
            }),
        ),
        ToolDescriptor::new(
            "getTopGainersTokens",
            &[],
            "bar_chart: token vs % gain",
            Box::new(|api, p| {
                Box::pin(async move {
                    api.get(
                        "discovery/tokens/top-gainers",
                        &[
                            ("chain", p.get_or("chain", "eth").to_string()),
                            ("min_market_cap", p.get_or("min_market_cap", "50000000").to_string()),
                            ("security_score", p.get_or("security_score", "80").to_string()),
                            ("time_frame", p.get_or("time_frame", "1d").to_string()),
                        ],
                    )
                    .await
                })
            }),
        ),
        ToolDescriptor::new(
            "getTopERC20TokensByMarketCap",
            &[],
            "table: rank, token, market cap",
            Box::new(|api, _p| {
                Box::pin(async move { api.get("market-data/erc20s/top-tokens", &[]).await })
            }),
        ),
        ToolDescriptor::new(
            "searchTokens",
            &["query"],
            "search_results: token name, symbol, volume",
            Box::new(|api, p| {
                Box::pin(async move {
                    api.get(
                        "tokens/search",
                        &[
                            ("query", p.req("query")?.to_string()),
                            ("chains", p.get_or("chain", "eth").to_string()),
                            ("limit", "10".to_string()),
                            ("isVerifiedContract", "true".to_string()),
                            ("sortBy", "volume1hDesc".to_string()),
                            ("boostVerifiedContracts", "true".to_string()),
                        ],
                    )
                    .await
                })
            }),
        ),
        ToolDescriptor::new(
            "getFilteredTokens",
            &["filters", "sortBy", "limit"],
            "table: token, volume, score",
            Box::new(|api, p| {
                Box::pin(async move {
                    let filters = p.req("filters")?;
                    // The filters value arrives as a string; accept either a
                    // serialized JSON array or a bare filter name.
                    let filters: Value = serde_json::from_str(filters)
                        .unwrap_or_else(|_| Value::String(filters.to_string()));
                    let limit = p.req("limit")?;
                    let limit: Value = limit
                        .parse::<u64>()
                        .map(Value::from)
                        .unwrap_or_else(|_| Value::String(limit.to_string()));
                    let body = json!({
                        "chain": p.get_or("chain", "0x1"),
                        "filters": filters,
                        "sortBy": p.req("sortBy")?,
                        "limit": limit,
                    });
                    api.post("discovery/tokens", body).await
                })
            }),
        ),
    ]
}
