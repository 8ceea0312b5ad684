use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Market snapshot of a single cryptocurrency
///
/// Immutable once constructed. Serializes in the cache file shape
/// (`price`, `marketCap`, `high24h`, `low24h`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinRecord {
    /// Stable lowercase identifier (e.g. "bitcoin")
    pub id: String,

    /// Display name
    pub name: String,

    /// Current price in USD
    pub price: f64,

    /// Market capitalization in USD
    #[serde(rename = "marketCap")]
    pub market_cap: f64,

    /// Highest price over the last 24 hours
    #[serde(rename = "high24h")]
    pub high_24h: f64,

    /// Lowest price over the last 24 hours
    #[serde(rename = "low24h")]
    pub low_24h: f64,
}

/// One element of the market endpoint's JSON array
///
/// The endpoint returns many more fields than these; serde ignores the rest.
#[derive(Debug, Deserialize)]
struct MarketCoin {
    id: String,
    name: String,
    current_price: f64,
    market_cap: f64,
    high_24h: f64,
    low_24h: f64,
}

impl From<MarketCoin> for CoinRecord {
    fn from(coin: MarketCoin) -> Self {
        Self {
            id: coin.id,
            name: coin.name,
            price: coin.current_price,
            market_cap: coin.market_cap,
            high_24h: coin.high_24h,
            low_24h: coin.low_24h,
        }
    }
}

/// Decode a market endpoint response array, dropping malformed elements
///
/// A record survives only if all six required fields are present with the
/// expected scalar types. One bad element never fails the batch; relative
/// order of the survivors is preserved.
pub fn decode_market_coins(values: &[Value]) -> Vec<CoinRecord> {
    values
        .iter()
        .filter_map(|v| {
            serde_json::from_value::<MarketCoin>(v.clone())
                .ok()
                .map(CoinRecord::from)
        })
        .collect()
}

/// Decode the `coins` array of a cache file, dropping malformed elements
pub fn decode_cached_coins(values: &[Value]) -> Vec<CoinRecord> {
    values
        .iter()
        .filter_map(|v| serde_json::from_value::<CoinRecord>(v.clone()).ok())
        .collect()
}
