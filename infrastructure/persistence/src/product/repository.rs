use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Price, Product};
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT p.id, p.name, p.barcode, p.count_in_stock, pr.id AS price_id, pr.value AS price_value FROM products p JOIN prices pr ON pr.product_id = p.id ORDER BY p.id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT p.id, p.name, p.barcode, p.count_in_stock, pr.id AS price_id, pr.value AS price_value FROM products p JOIN prices pr ON pr.product_id = p.id WHERE p.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        // Product and price rows are created together.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        let (product_id,): (i64,) = sqlx::query_as(
            "INSERT INTO products (name, barcode, count_in_stock) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&product.name)
        .bind(product.barcode)
        .bind(product.count_in_stock)
        .fetch_one(&mut *tx)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        let (price_id,): (i64,) =
            sqlx::query_as("INSERT INTO prices (product_id, value) VALUES ($1, $2) RETURNING id")
                .bind(product_id)
                .bind(product.price)
                .fetch_one(&mut *tx)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;

        tx.commit()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(Product::from_repository(
            product_id,
            product.name.clone(),
            product.barcode,
            product.count_in_stock,
            Price {
                id: price_id,
                value: product.price,
            },
        ))
    }

    async fn save(&self, product: &Product) -> Result<Product, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query("UPDATE products SET name = $2, barcode = $3, count_in_stock = $4 WHERE id = $1")
            .bind(product.id)
            .bind(&product.name)
            .bind(product.barcode)
            .bind(product.count_in_stock)
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query("UPDATE prices SET value = $2 WHERE id = $1")
            .bind(product.price.id)
            .bind(product.price.value)
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        tx.commit()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(product.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        // The price row goes with the product through the FK cascade.
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
