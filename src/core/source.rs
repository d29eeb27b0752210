pub use crate::domain::ports::FallibleSource;

/// Runs `try_fetch` and swaps in the source's fallback on error or when the
/// source comes back empty.
pub async fn fetch_or_fallback<S: FallibleSource + ?Sized>(source: &S) -> Vec<S::Item> {
    match source.try_fetch().await {
        Ok(items) if !items.is_empty() => {
            tracing::debug!("{} returned {} items", source.label(), items.len());
            items
        }
        Ok(_) => {
            tracing::warn!("{} returned nothing, using fallback data", source.label());
            source.fallback()
        }
        Err(e) => {
            tracing::warn!("{} failed: {}, using fallback data", source.label(), e);
            source.fallback()
        }
    }
}
