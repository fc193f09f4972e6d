use {
    crate::domain::{
        error::GatewayError,
        id::PurchaseKey,
        order::{NewOrder, Order, OrderStatus},
        store::{OrderStore, StoreFuture},
    },
    chrono::Utc,
    std::{collections::HashMap, sync::Arc},
    tokio::sync::RwLock,
    uuid::Uuid,
};

/// Process-local order store, keyed by purchase key.
///
/// Used when no database is configured and throughout the tests.
#[derive(Default, Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<PurchaseKey, Order>>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}

impl OrderStore for InMemoryOrderStore {
    fn create<'a>(&'a self, order: &'a NewOrder) -> StoreFuture<'a, Uuid> {
        Box::pin(async move {
            let mut orders = self.orders.write().await;
            if orders.contains_key(order.purchase_key()) {
                return Err(GatewayError::Validation(format!(
                    "purchase key already used: {}",
                    order.purchase_key()
                )));
            }
            orders.insert(order.purchase_key().clone(), order.clone().into_order());
            Ok(order.id())
        })
    }

    fn find_by_key<'a>(&'a self, key: &'a PurchaseKey) -> StoreFuture<'a, Option<Order>> {
        Box::pin(async move { Ok(self.orders.read().await.get(key).cloned()) })
    }

    fn set_status(&self, id: Uuid, status: OrderStatus) -> StoreFuture<'_, bool> {
        Box::pin(async move {
            let mut orders = self.orders.write().await;
            match orders.values_mut().find(|o| o.id == id) {
                Some(order) => {
                    order.status = status;
                    order.updated_at = Utc::now();
                    Ok(true)
                }
                None => Ok(false),
            }
        })
    }
}
