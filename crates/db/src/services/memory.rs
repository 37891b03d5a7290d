//! In-memory store used by the service unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use storefront_core::catalog::PriceRange;
use storefront_core::types::DbId;

use crate::models::product::{Product, SaveProduct};
use crate::models::user::UserWithRoles;
use crate::store::{ProductStore, UserStore};

#[derive(Debug, Default)]
struct State {
    products: Vec<Product>,
    users: Vec<UserWithRoles>,
}

/// Cloneable handle to shared in-memory rows. Counts product writes so tests
/// can assert that a failed operation wrote nothing.
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryStore {
    state: Arc<Mutex<State>>,
    writes: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub(crate) fn with_products(products: Vec<Product>) -> Self {
        let store = Self::default();
        store.lock().products = products;
        store
    }

    pub(crate) fn with_users(users: Vec<UserWithRoles>) -> Self {
        let store = Self::default();
        store.lock().users = users;
        store
    }

    pub(crate) fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }
}

impl ProductStore for MemoryStore {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        Ok(self.lock().products.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Product>, sqlx::Error> {
        Ok(self.lock().products.clone())
    }

    async fn create(&self, input: &SaveProduct) -> Result<Product, sqlx::Error> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut state = self.lock();
        let id = state.products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let now = Utc::now();
        let product = Product {
            id,
            category_id: input.category_id(),
            description: input.description.clone(),
            detail: input.detail.clone(),
            price: input.price,
            stock: input.stock,
            image_path: input.image_path.clone(),
            active: input.active,
            created_at: now,
            updated_at: now,
        };
        state.products.push(product.clone());
        Ok(product)
    }

    async fn update(&self, product: &Product) -> Result<Option<Product>, sqlx::Error> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut state = self.lock();
        let Some(slot) = state.products.iter_mut().find(|p| p.id == product.id) else {
            return Ok(None);
        };
        *slot = Product {
            updated_at: Utc::now(),
            ..product.clone()
        };
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut state = self.lock();
        let before = state.products.len();
        state.products.retain(|p| p.id != id);
        Ok(state.products.len() < before)
    }

    async fn find_by_price_range(&self, low: f64, high: f64) -> Result<Vec<Product>, sqlx::Error> {
        let range = PriceRange { low, high };
        let mut matched: Vec<Product> = self
            .lock()
            .products
            .iter()
            .filter(|p| range.contains(p.price))
            .cloned()
            .collect();
        // Byte-wise ordering, missing descriptions last, ties by id.
        matched.sort_by(|a, b| match (&a.description, &b.description) {
            (Some(x), Some(y)) => x.cmp(y).then(a.id.cmp(&b.id)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.id.cmp(&b.id),
        });
        Ok(matched)
    }
}

impl UserStore for MemoryStore {
    async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserWithRoles>, sqlx::Error> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|u| u.user.username == username)
            .cloned())
    }
}
