use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        // Input constraints are enforced by the boundary validator; the
        // repository persists the product and its price row together.
        let product = self
            .repository
            .insert(&NewProduct {
                name: params.name,
                barcode: params.barcode,
                count_in_stock: params.count_in_stock,
                price: params.price,
            })
            .await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::Price;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
            async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<Product, RepositoryError>;
            async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_create_product_with_generated_ids() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_insert().returning(|new_product| {
            Ok(Product::from_repository(
                1,
                new_product.name.clone(),
                new_product.barcode,
                new_product.count_in_stock,
                Price {
                    id: 1,
                    value: new_product.price,
                },
            ))
        });

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                name: "Test".to_string(),
                barcode: 1,
                count_in_stock: 1,
                price: 10,
            })
            .await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Test");
        assert_eq!(product.barcode, 1);
        assert_eq!(product.count_in_stock, 1);
        assert_eq!(product.price.value, 10);
    }

    #[tokio::test]
    async fn should_propagate_repository_error_on_create() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_insert()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                name: "Test".to_string(),
                barcode: 1,
                count_in_stock: 1,
                price: 10,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
