use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::MultiplexedConnection;

use crate::{error::AppResult, models::ActiveOrder, stores::ActiveOrderStore};

fn key(user_id: &str) -> String {
    format!("active_order:{user_id}")
}

/// Active orders live in Redis as JSON values with a TTL, so expiry needs no
/// sweeping on our side.
#[derive(Clone)]
pub struct RedisActiveOrderStore {
    con: MultiplexedConnection,
}

impl RedisActiveOrderStore {
    pub fn new(con: MultiplexedConnection) -> Self {
        Self { con }
    }
}

#[async_trait]
impl ActiveOrderStore for RedisActiveOrderStore {
    async fn set(&self, user_id: &str, order: &ActiveOrder, ttl_seconds: u64) -> AppResult<()> {
        let payload = serde_json::to_string(order)?;
        let mut con = self.con.clone();
        let _: () = con.set_ex(key(user_id), payload, ttl_seconds).await?;
        tracing::debug!(user_id, ttl_seconds, "active order stored");
        Ok(())
    }

    async fn get(&self, user_id: &str) -> AppResult<Option<ActiveOrder>> {
        let mut con = self.con.clone();
        let payload: Option<String> = con.get(key(user_id)).await?;
        match payload {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn remove(&self, user_id: &str) -> AppResult<()> {
        let mut con = self.con.clone();
        let _: () = con.del(key(user_id)).await?;
        tracing::debug!(user_id, "active order removed");
        Ok(())
    }
}
