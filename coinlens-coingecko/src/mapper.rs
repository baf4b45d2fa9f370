use coinlens_types::{CoinlensError, Currency, Provider, Symbol};

/// Provider-specific asset id for `symbol`.
///
/// # Errors
/// `Unsupported` when `provider` has no mapping for `symbol`.
pub fn map_provider_symbol_id(symbol: Symbol, provider: Provider) -> Result<&'static str, CoinlensError> {
    match (provider, symbol) {
        (Provider::CoinGecko, Symbol::Btc) => Ok("bitcoin"),
        (Provider::CoinGecko, Symbol::Eth) => Ok("ethereum"),
        (Provider::CoinGecko, Symbol::Xrp) => Ok("ripple"),
        (Provider::Binance | Provider::Kraken, _) => Err(CoinlensError::unsupported(format!(
            "symbol {} not supported by provider {}",
            symbol.name(),
            provider.name()
        ))),
    }
}

/// Provider-specific quote currency id for `currency`.
///
/// # Errors
/// `Unsupported` when `provider` has no mapping for `currency`.
pub fn map_provider_currency_id(
    currency: Currency,
    provider: Provider,
) -> Result<&'static str, CoinlensError> {
    match (provider, currency) {
        (Provider::CoinGecko, Currency::Usd) => Ok("usd"),
        (Provider::CoinGecko, Currency::Eur) => Ok("eur"),
        (Provider::CoinGecko, Currency::Gbp) => Ok("gbp"),
        (Provider::CoinGecko, Currency::Aud) => Ok("aud"),
        (Provider::CoinGecko, Currency::Chf) => Ok("chf"),
        (Provider::CoinGecko, Currency::Jpy) => Ok("jpy"),
        (Provider::Binance | Provider::Kraken, _) => Err(CoinlensError::unsupported(format!(
            "currency {} not supported by provider {}",
            currency.name(),
            provider.name()
        ))),
    }
}
