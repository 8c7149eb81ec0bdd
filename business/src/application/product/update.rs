use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::{PriceRepository, ProductRepository};
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub price_repository: Arc<dyn PriceRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let mut product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound(params.id),
                other => ProductError::Repository(other),
            })?;

        if let Some(name) = params.name {
            product.name = name;
        }
        if let Some(value) = params.price {
            // Reload the price row instead of trusting the in-memory
            // association, then re-attach the saved row to the product.
            let mut price = self
                .price_repository
                .get_by_product_id(product.id)
                .await?;
            price.value = value;
            product.price = self.price_repository.save(&price).await?;
        }
        if let Some(barcode) = params.barcode {
            product.barcode = barcode;
        }
        if let Some(count_in_stock) = params.count_in_stock {
            product.count_in_stock = count_in_stock;
        }

        let saved = self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product updated: {}", saved.id));
        Ok(saved)
    }
}
