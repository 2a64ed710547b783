// src/tools/nft.rs
//
// NFT tools: ownership, floor prices, metadata, traits, trades.

use crate::agent::registry::ToolDescriptor;

pub fn nft_tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "getNFTOwners",
            &["chain", "address"],
            "table: owner address, tokenId",
            Box::new(|api, p| {
                Box::pin(async move {
                    let path = format!("nft/{}/owners", p.req("address")?);
                    api.get(
                        &path,
                        &[
                            ("chain", p.req("chain")?.to_string()),
                            ("format", "decimal".to_string()),
                        ],
                    )
                    .await
                })
            }),
        ),
        ToolDescriptor::new(
            "getNFTFloorPriceByContract",
            &["chain", "address"],
            "stat_card: floor price in ETH/USD",
            Box::new(|api, p| {
                Box::pin(async move {
                    let path = format!("nft/{}/floor-price", p.req("address")?);
                    api.get(&path, &[("chain", p.req("chain")?.to_string())]).await
                })
            }),
        ),
        ToolDescriptor::new(
            "getNFTMetadata",
            &["chain", "address", "tokenId"],
            "card: name, image, attributes, creator",
            Box::new(|api, p| {
                Box::pin(async move {
                    let path = format!("nft/{}/{}", p.req("address")?, p.req("tokenId")?);
                    api.get(
                        &path,
                        &[
                            ("chain", p.req("chain")?.to_string()),
                            ("format", "decimal".to_string()),
                        ],
                    )
                    .await
                })
            }),
        ),
        ToolDescriptor::new(
            "getNFTTraitsByCollection",
            &["chain", "address"],
            "bar_chart: trait type vs rarity %",
            Box::new(|api, p| {
                Box::pin(async move {
                    let path = format!("nft/{}/traits", p.req("address")?);
                    api.get(&path, &[("chain", p.req("chain")?.to_string())]).await
                })
            }),
        ),
        ToolDescriptor::new(
            "getTopNFTCollectionsByTradingVolume",
            &[],
            "table: collection, volume, trades, floor",
            Box::new(|api, _p| {
                Box::pin(async move {
                    api.get("market-data/nfts/hottest-collections", &[]).await
                })
            }),
        ),
        ToolDescriptor::new(
            "getNFTSalePrices",
            &["chain", "address", "tokenId"],
            "line_chart: timestamp vs sale price",
            Box::new(|api, p| {
                Box::pin(async move {
                    let path =
                        format!("nft/{}/{}/price", p.req("address")?, p.req("tokenId")?);
                    api.get(&path, &[("chain", p.req("chain")?.to_string())]).await
                })
            }),
        ),
        ToolDescriptor::new(
            "getNFTTrades",
            &["chain", "address"],
            "table: buyer, seller, price, timestamp, tokenId",
            Box::new(|api, p| {
                Box::pin(async move {
                    let path = format!("nft/{}/trades", p.req("address")?);
                    api.get(
                        &path,
                        &[
                            ("chain", p.req("chain")?.to_string()),
                            ("marketplace", "opensea".to_string()),
                            ("limit", "3".to_string()),
                            ("nft_metadata", "true".to_string()),
                        ],
                    )
                    .await
                })
            }),
        ),
        ToolDescriptor::new(
            "getWalletNFTCollections",
            &["chain", "address"],
            "grid: collection name, image, owned count",
            Box::new(|api, p| {
                Box::pin(async move {
                    let path = format!("{}/nft/collections", p.req("address")?);
                    api.get(&path, &[("chain", p.req("chain")?.to_string())]).await
                })
            }),
        ),
    ]
}
