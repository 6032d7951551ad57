/// Read-through caching against a [`Cache`](crate::db::Cache).
///
/// Returns the cached value on a hit. On a miss, or when the cache cannot be
/// read, awaits `$block`, queues the fresh value for a background write with
/// `$ttl` seconds to live, and returns it. Errors from `$block` propagate with
/// `?`, so the macro must be used inside a function returning `AppResult`.
///
/// # Example
/// ```rust,ignore
/// let snapshot: WeatherSnapshot = cached!(
///     cache,
///     CacheKey::Weather(location.to_string()),
///     600,
///     self.fetch_live(location)
/// )?;
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $ttl:expr, $block:expr) => {{
        let key = $key;
        match $cache.get_from_cache(&key).await {
            Ok(Some(cached)) => {
                tracing::debug!(key = %key, "Cache hit");
                Ok(cached)
            }
            lookup => {
                if let Err(e) = lookup {
                    tracing::warn!(key = %key, error = %e, "Cache read failed, computing value");
                }
                let value = $block.await?;
                $cache.set_in_background(&key, &value, $ttl);
                Ok(value)
            }
        }
    }};
}
