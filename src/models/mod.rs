mod coin;

pub use coin::{decode_cached_coins, decode_market_coins, CoinRecord};
