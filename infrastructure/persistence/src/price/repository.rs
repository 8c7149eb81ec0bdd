use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Price;
use business::domain::product::repository::PriceRepository;

use crate::product::entity::PriceEntity;

pub struct PriceRepositoryPostgres {
    pool: PgPool,
}

impl PriceRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PriceRepository for PriceRepositoryPostgres {
    async fn get_by_product_id(&self, product_id: i64) -> Result<Price, RepositoryError> {
        let entity = sqlx::query_as::<_, PriceEntity>(
            "SELECT id, product_id, value FROM prices WHERE product_id = $1",
        )
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, price: &Price) -> Result<Price, RepositoryError> {
        sqlx::query("UPDATE prices SET value = $2 WHERE id = $1")
            .bind(price.id)
            .bind(price.value)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(price.clone())
    }
}
