use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::domain::cart::model::{Cart, PersistenceStatus};
use crate::domain::cart::observer::CartObserver;
use crate::domain::cart::storage::CartStorage;
use crate::domain::logger::Logger;

/// Stateful cart service for one shopper session. The in-memory cart is the
/// source of truth; every mutating operation rewrites the storage slot and
/// then notifies observers, all while holding the cart lock so concurrent
/// operations serialize into a consistent state and notification order.
pub struct CartStore {
    pub(crate) cart: Mutex<Cart>,
    pub(crate) storage: Arc<dyn CartStorage>,
    pub(crate) logger: Arc<dyn Logger>,
    pub(crate) observers: RwLock<Vec<Arc<dyn CartObserver>>>,
}

impl CartStore {
    /// Store starting from an empty cart. No I/O.
    pub fn new(storage: Arc<dyn CartStorage>, logger: Arc<dyn Logger>) -> Self {
        Self {
            cart: Mutex::new(Cart::new()),
            storage,
            logger,
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Store rehydrated from the persistence slot. A missing slot starts
    /// empty; an unreadable or corrupt one also starts empty with a warning,
    /// so a bad payload can never take the storefront down.
    pub async fn initialize(storage: Arc<dyn CartStorage>, logger: Arc<dyn Logger>) -> Self {
        let cart = match storage.load().await {
            Ok(Some(items)) => Cart::from_items(items),
            Ok(None) => Cart::new(),
            Err(error) => {
                logger.warn(&format!(
                    "Cart slot unreadable, starting empty: {}",
                    error
                ));
                Cart::new()
            }
        };

        Self {
            cart: Mutex::new(cart),
            storage,
            logger,
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of the current cart.
    pub async fn cart(&self) -> Cart {
        self.cart.lock().await.clone()
    }

    pub async fn subscribe(&self, observer: Arc<dyn CartObserver>) {
        self.observers.write().await.push(observer);
    }

    /// Write-through after a mutation. Failure is reported in the returned
    /// status, never raised: the in-memory cart stays authoritative.
    pub(crate) async fn persist(&self, cart: &Cart) -> PersistenceStatus {
        match self.storage.save(cart.items()).await {
            Ok(()) => PersistenceStatus::Synced,
            Err(error) => {
                self.logger
                    .warn(&format!("Cart write-through failed: {}", error));
                PersistenceStatus::Failed(error)
            }
        }
    }

    /// Slot delete for `clear`. Same best-effort policy as `persist`.
    pub(crate) async fn discard_slot(&self) -> PersistenceStatus {
        match self.storage.clear().await {
            Ok(()) => PersistenceStatus::Synced,
            Err(error) => {
                self.logger
                    .warn(&format!("Cart slot delete failed: {}", error));
                PersistenceStatus::Failed(error)
            }
        }
    }

    pub(crate) async fn notify(&self, cart: &Cart) {
        for observer in self.observers.read().await.iter() {
            observer.cart_changed(cart);
        }
    }
}
