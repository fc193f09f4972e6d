use {
    super::error::GatewayError,
    super::id::PurchaseKey,
    super::order::{NewOrder, Order, OrderStatus},
    std::{future::Future, pin::Pin},
    uuid::Uuid,
};

pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, GatewayError>> + Send + 'a>>;

/// Order persistence owned by the commerce side.
///
/// Purchase keys are unique; `set_status` overwrites whatever status is
/// stored (last write wins).
pub trait OrderStore: Send + Sync {
    fn create<'a>(&'a self, order: &'a NewOrder) -> StoreFuture<'a, Uuid>;

    fn find_by_key<'a>(&'a self, key: &'a PurchaseKey) -> StoreFuture<'a, Option<Order>>;

    /// Returns `false` if no order has this id.
    fn set_status(&self, id: Uuid, status: OrderStatus) -> StoreFuture<'_, bool>;
}
