use sqlx::FromRow;

use business::domain::product::model::{Price, Product};

/// Product row joined with its owned price row.
#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub barcode: i64,
    pub count_in_stock: i64,
    pub price_id: i64,
    pub price_value: i64,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.barcode,
            self.count_in_stock,
            Price {
                id: self.price_id,
                value: self.price_value,
            },
        )
    }
}

#[derive(Debug, FromRow)]
pub struct PriceEntity {
    pub id: i64,
    pub product_id: i64,
    pub value: i64,
}

impl PriceEntity {
    pub fn into_domain(self) -> Price {
        Price {
            id: self.id,
            value: self.value,
        }
    }
}
