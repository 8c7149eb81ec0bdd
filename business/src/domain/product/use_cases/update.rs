use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

/// Partial update: `None` fields are left untouched on the stored product.
pub struct UpdateProductParams {
    pub id: i64,
    pub name: Option<String>,
    pub barcode: Option<i64>,
    pub count_in_stock: Option<i64>,
    pub price: Option<i64>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
