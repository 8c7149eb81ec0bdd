use poem_openapi::Object;

use business::domain::product::model::Product;

/// Wire representation of a product. The owned price's value is flattened
/// onto the `price` field.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Product barcode
    pub barcode: i64,
    /// Units currently in stock
    pub count_in_stock: i64,
    /// Price value
    pub price: i64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            barcode: product.barcode,
            count_in_stock: product.count_in_stock,
            price: product.price.value,
        }
    }
}

/// Create payload. Fields are optional at the deserialization level so the
/// validator can report every missing field instead of failing on the first.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateProductRequest {
    /// Must be absent; identifiers are assigned by the store
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<i64>,
    /// Product name (pattern `[A-Z][a-zA-Z]*`, 3-255 characters)
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// Product barcode (positive)
    #[oai(skip_serializing_if_is_none)]
    pub barcode: Option<i64>,
    /// Units in stock (positive)
    #[oai(skip_serializing_if_is_none)]
    pub count_in_stock: Option<i64>,
    /// Price value (positive)
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<i64>,
}

/// Partial-update payload: absent fields leave the stored value untouched.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    /// Product name (pattern `[A-Z][a-zA-Z]*`, 3-255 characters)
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// Product barcode (positive)
    #[oai(skip_serializing_if_is_none)]
    pub barcode: Option<i64>,
    /// Units in stock (positive)
    #[oai(skip_serializing_if_is_none)]
    pub count_in_stock: Option<i64>,
    /// Price value (positive)
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<i64>,
}
