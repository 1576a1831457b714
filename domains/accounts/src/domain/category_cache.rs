//! Read-through cache over the category list
//!
//! Categories change rarely, so lookups are served from a snapshot that is
//! reloaded once it is older than the configured TTL.

use std::sync::Arc;
use std::time::{Duration, Instant};

use collabhub_common::Result;
use tokio::sync::RwLock;

use crate::domain::entities::Category;
use crate::repository::AccountStore;

#[derive(Debug, Clone)]
struct Snapshot {
    categories: Arc<Vec<Category>>,
    loaded_at: Instant,
}

pub struct CategoryCache {
    store: Arc<dyn AccountStore>,
    ttl: Duration,
    entry: RwLock<Option<Snapshot>>,
}

impl CategoryCache {
    pub fn new(store: Arc<dyn AccountStore>, ttl: Duration) -> Self {
        Self {
            store,
            ttl,
            entry: RwLock::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn fresh(&self, entry: &Option<Snapshot>) -> Option<Arc<Vec<Category>>> {
        entry
            .as_ref()
            .filter(|snapshot| snapshot.loaded_at.elapsed() < self.ttl)
            .map(|snapshot| Arc::clone(&snapshot.categories))
    }

    /// Return the cached categories, reloading when the snapshot is stale.
    ///
    /// Concurrent callers that find the same stale snapshot share one reload.
    pub async fn get(&self) -> Result<Arc<Vec<Category>>> {
        if let Some(categories) = self.fresh(&*self.entry.read().await) {
            return Ok(categories);
        }

        let mut entry = self.entry.write().await;
        // Another caller may have reloaded while this one waited for the lock
        if let Some(categories) = self.fresh(&entry) {
            return Ok(categories);
        }
        self.reload(&mut entry).await
    }

    /// Reload from the store unconditionally
    pub async fn refresh(&self) -> Result<Arc<Vec<Category>>> {
        let mut entry = self.entry.write().await;
        self.reload(&mut entry).await
    }

    async fn reload(&self, entry: &mut Option<Snapshot>) -> Result<Arc<Vec<Category>>> {
        let categories = Arc::new(self.store.list_categories().await?);
        tracing::debug!(count = categories.len(), "Category cache reloaded");

        *entry = Some(Snapshot {
            categories: Arc::clone(&categories),
            loaded_at: Instant::now(),
        });
        Ok(categories)
    }

    /// Drop the snapshot so the next `get` reloads
    pub async fn invalidate(&self) {
        *self.entry.write().await = None;
    }
}
