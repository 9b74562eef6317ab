use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use oomph_mf::mf::Coordinate;
use oomph_mf::mf::core::GeoQuery;
use tokio::sync::Notify;

use super::Geocoder;
use crate::error::{ServiceError, ServiceResult};

#[derive(Debug, Default)]
struct Shared {
    counter: AtomicU64,
    changed: Notify,
}

/// Counter shared by a scan and the work it spawned. Bumping it makes every
/// outstanding [`GenerationToken`] stale.
#[derive(Debug, Clone, Default)]
pub struct Generation(Arc<Shared>);

impl Generation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current generation.
    #[must_use]
    pub fn token(&self) -> GenerationToken {
        GenerationToken {
            shared: Arc::clone(&self.0),
            snapshot: self.0.counter.load(Ordering::Acquire),
        }
    }

    /// Makes outstanding tokens stale and wakes everything waiting in
    /// [`GenerationToken::invalidated`].
    pub fn invalidate(&self) {
        self.0.counter.fetch_add(1, Ordering::AcqRel);
        self.0.changed.notify_waiters();
    }
}

#[derive(Debug, Clone)]
pub struct GenerationToken {
    shared: Arc<Shared>,
    snapshot: u64,
}

impl GenerationToken {
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.shared.counter.load(Ordering::Acquire) == self.snapshot
    }

    /// Completes once the token is stale.
    pub async fn invalidated(&self) {
        // Registered before the check so an invalidation in between still wakes us.
        let changed = self.shared.changed.notified();
        if self.is_current() {
            changed.await;
        }
    }
}

/// Geocodes the addresses of one scan, one request at a time.
#[derive(Debug)]
pub struct AddressResolutionQueue {
    pending: VecDeque<GeoQuery>,
    resolved: Vec<Coordinate>,
    timeout: Duration,
    token: GenerationToken,
}

impl AddressResolutionQueue {
    #[must_use]
    pub fn new(queries: Vec<GeoQuery>, token: GenerationToken, timeout: Duration) -> Self {
        Self {
            pending: queries.into(),
            resolved: Vec::new(),
            timeout,
            token,
        }
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// ## Summary
    /// Submits every pending query in order and collects the hits.
    ///
    /// A miss (no result, a geocoder error, a timeout or a blank address)
    /// contributes nothing and the queue moves on. Each hit is the first
    /// result of its lookup, named after the query.
    ///
    /// ## Errors
    /// Returns `ServiceError::ScanInvalidated` as soon as the owning scan is
    /// invalidated, abandoning a lookup in flight. Results gathered so far
    /// are dropped.
    #[tracing::instrument(skip_all, fields(pending = self.pending.len()))]
    pub async fn resolve(mut self, geocoder: &dyn Geocoder) -> ServiceResult<Vec<Coordinate>> {
        while let Some(query) = self.pending.pop_front() {
            self.ensure_current()?;
            let hit = tokio::select! {
                hit = self.lookup(geocoder, &query) => hit,
                () = self.token.invalidated() => None,
            };
            self.ensure_current()?;

            if let Some(coordinate) = hit {
                self.resolved.push(coordinate);
            }
        }

        tracing::debug!(resolved = self.resolved.len(), "Address queue drained");
        Ok(self.resolved)
    }

    fn ensure_current(&self) -> ServiceResult<()> {
        if self.token.is_current() {
            Ok(())
        } else {
            tracing::debug!(
                remaining = self.pending.len(),
                "Scan invalidated, dropping geocoding results"
            );
            Err(ServiceError::ScanInvalidated)
        }
    }

    async fn lookup(&self, geocoder: &dyn Geocoder, query: &GeoQuery) -> Option<Coordinate> {
        let address = query.address.trim();
        if address.is_empty() {
            tracing::trace!(name = %query.name, "Blank address, skipping");
            return None;
        }

        tracing::trace!(address, name = %query.name, "Geocoding");
        match tokio::time::timeout(self.timeout, geocoder.geocode(address)).await {
            Ok(Ok(results)) => {
                let hit = results.into_iter().next().map(|first| {
                    Coordinate::new(first.latitude, first.longitude, query.name.clone())
                });
                if hit.is_none() {
                    tracing::debug!(address, "No geocoding match");
                }
                hit
            }
            Ok(Err(e)) => {
                tracing::warn!(address, error = %e, "Geocoder failed");
                None
            }
            Err(_elapsed) => {
                tracing::warn!(address, timeout = ?self.timeout, "Geocoder timed out");
                None
            }
        }
    }
}
