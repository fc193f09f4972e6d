use {
    crate::domain::{
        error::GatewayError,
        id::PurchaseKey,
        money::Currency,
        order::{BuyerInfo, CartItem, NewOrder, Order, OrderStatus},
        store::{OrderStore, StoreFuture},
    },
    chrono::{DateTime, Utc},
    rust_decimal::Decimal,
    sqlx::{PgPool, types::Json},
    uuid::Uuid,
};

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    purchase_key: String,
    amount: Decimal,
    currency: String,
    status: String,
    gateway: String,
    user_email: String,
    cart: Json<Vec<CartItem>>,
    buyer: Json<BuyerInfo>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = GatewayError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        Ok(Order {
            id: row.id,
            purchase_key: PurchaseKey::new(row.purchase_key)?,
            amount: row.amount,
            currency: Currency::try_from(row.currency)?,
            status: OrderStatus::try_from(row.status.as_str())?,
            gateway: row.gateway,
            user_email: row.user_email,
            cart: row.cart.0,
            buyer: row.buyer.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Clone)]
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

pub async fn insert_order(pool: &PgPool, order: &NewOrder) -> Result<Uuid, GatewayError> {
    let inserted: Option<Uuid> = sqlx::query_scalar(
        r#"
        INSERT INTO orders
            (id, purchase_key, amount, currency, status, gateway,
             user_email, cart, buyer, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
        ON CONFLICT (purchase_key) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(order.id())
    .bind(order.purchase_key().as_str())
    .bind(order.amount())
    .bind(order.currency().as_str())
    .bind(order.status().as_str())
    .bind(order.gateway())
    .bind(order.user_email())
    .bind(Json(order.cart()))
    .bind(Json(order.buyer()))
    .bind(order.created_at())
    .fetch_optional(pool)
    .await?;

    inserted.ok_or_else(|| {
        GatewayError::Validation(format!(
            "purchase key already used: {}",
            order.purchase_key()
        ))
    })
}

pub async fn find_order_by_key(
    pool: &PgPool,
    key: &PurchaseKey,
) -> Result<Option<Order>, GatewayError> {
    let row: Option<OrderRow> = sqlx::query_as(
        r#"
        SELECT id, purchase_key, amount, currency, status, gateway,
               user_email, cart, buyer, created_at, updated_at
        FROM orders
        WHERE purchase_key = $1
        "#,
    )
    .bind(key.as_str())
    .fetch_optional(pool)
    .await?;

    row.map(Order::try_from).transpose()
}

/// Plain overwrite; concurrent writers resolve last-write-wins.
pub async fn update_order_status(
    pool: &PgPool,
    id: Uuid,
    status: OrderStatus,
) -> Result<bool, GatewayError> {
    let result = sqlx::query("UPDATE orders SET status = $1, updated_at = now() WHERE id = $2")
        .bind(status.as_str())
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

impl OrderStore for PgOrderStore {
    fn create<'a>(&'a self, order: &'a NewOrder) -> StoreFuture<'a, Uuid> {
        Box::pin(insert_order(&self.pool, order))
    }

    fn find_by_key<'a>(&'a self, key: &'a PurchaseKey) -> StoreFuture<'a, Option<Order>> {
        Box::pin(find_order_by_key(&self.pool, key))
    }

    fn set_status(&self, id: Uuid, status: OrderStatus) -> StoreFuture<'_, bool> {
        Box::pin(update_order_status(&self.pool, id, status))
    }
}
