// src/tools/wallet.rs
//
// Wallet-centric tools: balances, NFTs, DeFi positions, profitability, and
// ENS resolution in both directions.

use crate::agent::registry::ToolDescriptor;

pub fn wallet_tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "getWalletTokenBalancesPrices",
            &["chain", "address"],
            "bar_chart: token vs value (USD)",
            Box::new(|api, p| {
                Box::pin(async move {
                    let path = format!("wallets/{}/tokens", p.req("address")?);
                    api.get(&path, &[("chain", p.req("chain")?.to_string())]).await
                })
            }),
        ),
        ToolDescriptor::new(
            "getWalletNFTs",
            &["chain", "address"],
            "grid: NFT images with metadata",
            Box::new(|api, p| {
                Box::pin(async move {
                    let path = format!("{}/nft", p.req("address")?);
                    api.get(&path, &[("chain", p.req("chain")?.to_string())]).await
                })
            }),
        ),
        ToolDescriptor::new(
            "getDefiPositionsSummary",
            &["chain", "address"],
            "table: protocol, asset, balance, value",
            Box::new(|api, p| {
                Box::pin(async move {
                    let path = format!("wallets/{}/defi/positions", p.req("address")?);
                    api.get(&path, &[("chain", p.req("chain")?.to_string())]).await
                })
            }),
        ),
        ToolDescriptor::new(
            "getWalletNetWorth",
            &["address", "chain"],
            "stat_card: total net worth in USD",
            Box::new(|api, p| {
                Box::pin(async move {
                    let path = format!("wallets/{}/net-worth", p.req("address")?);
                    api.get(&path, &[("chains[]", p.req("chain")?.to_string())]).await
                })
            }),
        ),
        ToolDescriptor::new(
            "getWalletProfitabilitySummary",
            &["chain", "address"],
            "stat_card: total pnl, avg entry, current value",
            Box::new(|api, p| {
                Box::pin(async move {
                    let path = format!("wallets/{}/profitability/summary", p.req("address")?);
                    api.get(&path, &[("chain", p.req("chain")?.to_string())]).await
                })
            }),
        ),
        ToolDescriptor::new(
            "getWalletActiveChains",
            &["address"],
            "list: active blockchain names",
            Box::new(|api, p| {
                Box::pin(async move {
                    let path = format!("wallets/{}/chains", p.req("address")?);
                    api.get(&path, &[]).await
                })
            }),
        ),
        ToolDescriptor::new(
            "getSwapsByWalletAddress",
            &["address"],
            "table: swap txs, from token, to token, amount, time",
            Box::new(|api, p| {
                Box::pin(async move {
                    let path = format!("wallets/{}/swaps", p.req("address")?);
                    api.get(
                        &path,
                        &[
                            ("chain", p.get_or("chain", "eth").to_string()),
                            ("order", "DESC".to_string()),
                        ],
                    )
                    .await
                })
            }),
        ),
        ToolDescriptor::new(
            "getWalletApprovals",
            &["chain", "address"],
            "table: token, spender, allowance",
            Box::new(|api, p| {
                Box::pin(async move {
                    let path = format!("wallets/{}/approvals", p.req("address")?);
                    api.get(&path, &[("chain", p.req("chain")?.to_string())]).await
                })
            }),
        ),
        ToolDescriptor::new(
            "resolveAddressToDomain",
            &["address"],
            "text: resolved domain string (e.g., vitalik.eth)",
            Box::new(|api, p| {
                Box::pin(async move {
                    let path = format!("resolve/{}/domain", p.req("address")?);
                    api.get(&path, &[]).await
                })
            }),
        ),
        ToolDescriptor::new(
            "resolveENSDomain",
            &["domain"],
            "text: resolved wallet address from ENS",
            Box::new(|api, p| {
                Box::pin(async move {
                    let path = format!("resolve/ens/{}", p.req("domain")?);
                    api.get(&path, &[]).await
                })
            }),
        ),
    ]
}
