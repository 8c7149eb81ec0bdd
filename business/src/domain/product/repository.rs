use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Price, Product};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait PriceRepository: Send + Sync {
    async fn get_by_product_id(&self, product_id: i64) -> Result<Price, RepositoryError>;
    async fn save(&self, price: &Price) -> Result<Price, RepositoryError>;
}
