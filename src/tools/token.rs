// src/tools/token.rs
//
// ERC-20 token tools: prices, holders, analytics, pairs, candlesticks.

use crate::agent::registry::ToolDescriptor;

pub fn token_tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "getTokenPrice",
            &["chain", "address"],
            "stat_card: current price, % changes",
            Box::new(|api, p| {
                Box::pin(async move {
                    let path = format!("erc20/{}/price", p.req("address")?);
                    api.get(
                        &path,
                        &[
                            ("chain", p.req("chain")?.to_string()),
                            ("include", "percent_change".to_string()),
                        ],
                    )
                    .await
                })
            }),
        ),
        ToolDescriptor::new(
            "getTokenHolderStats",
            &["address"],
            "stat_card: holder count, change percent",
            Box::new(|api, p| {
                Box::pin(async move {
                    let path = format!("erc20/{}/holders", p.req("address")?);
                    api.get(&path, &[("chain", p.get_or("chain", "eth").to_string())]).await
                })
            }),
        ),
        ToolDescriptor::new(
            "getHistoricalTokenHolders",
            &["address", "fromDate", "toDate", "timeFrame"],
            "line_chart: date vs holder count",
            Box::new(|api, p| {
                Box::pin(async move {
                    let path = format!("erc20/{}/holders/historical", p.req("address")?);
                    api.get(
                        &path,
                        &[
                            ("chain", p.get_or("chain", "eth").to_string()),
                            ("fromDate", p.req("fromDate")?.to_string()),
                            ("toDate", p.req("toDate")?.to_string()),
                            ("timeFrame", p.req("timeFrame")?.to_string()),
                        ],
                    )
                    .await
                })
            }),
        ),
        ToolDescriptor::new(
            "getTopProfitableWalletPerToken",
            &["chain", "address"],
            "table: wallet, ROI, profit",
            Box::new(|api, p| {
                Box::pin(async move {
                    let path = format!("erc20/{}/top-gainers", p.req("address")?);
                    api.get(&path, &[("chain", p.req("chain")?.to_string())]).await
                })
            }),
        ),
        ToolDescriptor::new(
            "getTokenAnalytics",
            &["chain", "address"],
            "dashboard: tx count, volume, active users",
            Box::new(|api, p| {
                Box::pin(async move {
                    let path = format!("tokens/{}/analytics", p.req("address")?);
                    api.get(&path, &[("chain", p.req("chain")?.to_string())]).await
                })
            }),
        ),
        ToolDescriptor::new(
            "getTokenStats",
            &["chain", "address"],
            "stat_card: volume, liquidity, market cap",
            Box::new(|api, p| {
                Box::pin(async move {
                    let path = format!("erc20/{}/stats", p.req("address")?);
                    api.get(&path, &[("chain", p.req("chain")?.to_string())]).await
                })
            }),
        ),
        ToolDescriptor::new(
            "getTokenPairs",
            &["chain", "address"],
            "table: pair, exchange, liquidity",
            Box::new(|api, p| {
                Box::pin(async move {
                    let path = format!("erc20/{}/pairs", p.req("address")?);
                    api.get(&path, &[("chain", p.req("chain")?.to_string())]).await
                })
            }),
        ),
        ToolDescriptor::new(
            "getPairCandlesticks",
            &["pairAddress", "fromDate", "toDate", "timeframe", "chain"],
            "candlestick_chart: OHLCV",
            Box::new(|api, p| {
                Box::pin(async move {
                    let path = format!("pairs/{}/ohlcv", p.req("pairAddress")?);
                    api.get(
                        &path,
                        &[
                            ("chain", p.get_or("chain", "eth").to_string()),
                            ("currency", "usd".to_string()),
                            ("fromDate", p.req("fromDate")?.to_string()),
                            ("toDate", p.req("toDate")?.to_string()),
                            ("timeframe", p.req("timeframe")?.to_string()),
                        ],
                    )
                    .await
                })
            }),
        ),
    ]
}
