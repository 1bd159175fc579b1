use anyhow::{Result, anyhow};
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

use crate::domain::entities::{
    boda_bookings::BodaBookingEntity, internet_plans::InternetPlanEntity, jobs::JobEntity,
    products::ProductEntity, restaurants::RestaurantEntity, users::UserEntity,
};
use crate::domain::repositories::plan_catalog::PlanCatalog;
use crate::infrastructure::memory::repositories::{
    internet_plans::InternetPlanMemory, jobs::JobMemory, products::ProductMemory,
    restaurants::RestaurantMemory,
};
use crate::infrastructure::memory::seed;

use crate::domain::repositories::{
    internet_plans::InternetPlanRepository, jobs::JobRepository, products::ProductRepository,
    restaurants::RestaurantRepository,
};

/// Process-wide in-memory store. One monotonic counter hands out identifiers
/// across all six resource kinds; each collection keeps insertion order.
pub struct MemStoreSquad {
    pub(crate) users: RwLock<Vec<UserEntity>>,
    pub(crate) internet_plans: RwLock<Vec<InternetPlanEntity>>,
    pub(crate) boda_bookings: RwLock<Vec<BodaBookingEntity>>,
    pub(crate) restaurants: RwLock<Vec<RestaurantEntity>>,
    pub(crate) products: RwLock<Vec<ProductEntity>>,
    pub(crate) jobs: RwLock<Vec<JobEntity>>,
    next_id: AtomicI32,
}

impl MemStoreSquad {
    fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            internet_plans: RwLock::new(Vec::new()),
            boda_bookings: RwLock::new(Vec::new()),
            restaurants: RwLock::new(Vec::new()),
            products: RwLock::new(Vec::new()),
            jobs: RwLock::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Concurrent creates each observe a distinct identifier.
    pub(crate) fn next_id(&self) -> i32 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

pub(crate) fn lock_read<T>(lock: &RwLock<Vec<T>>) -> Result<RwLockReadGuard<'_, Vec<T>>> {
    lock.read().map_err(|_| anyhow!("Memory store lock poisoned"))
}

pub(crate) fn lock_write<T>(lock: &RwLock<Vec<T>>) -> Result<RwLockWriteGuard<'_, Vec<T>>> {
    lock.write().map_err(|_| anyhow!("Memory store lock poisoned"))
}

/// Builds the store and seeds it to completion. The internet-plan seed comes
/// from an asynchronous catalog and is awaited here, so callers never observe
/// a partially seeded store.
pub async fn establish_connection<C>(plan_catalog: Arc<C>) -> Result<Arc<MemStoreSquad>>
where
    C: PlanCatalog + Send + Sync,
{
    let store = Arc::new(MemStoreSquad::new());

    let plans = plan_catalog.fetch_plans().await?;
    let plan_repository = InternetPlanMemory::new(Arc::clone(&store));
    for plan in plans {
        plan_repository.create(plan).await?;
    }

    let restaurant_repository = RestaurantMemory::new(Arc::clone(&store));
    for restaurant in seed::restaurants() {
        restaurant_repository.create(restaurant).await?;
    }

    let product_repository = ProductMemory::new(Arc::clone(&store));
    for product in seed::products() {
        product_repository.create(product).await?;
    }

    let job_repository = JobMemory::new(Arc::clone(&store));
    for job in seed::jobs() {
        job_repository.create(job).await?;
    }

    info!("Memory store seed completed");

    Ok(store)
}
