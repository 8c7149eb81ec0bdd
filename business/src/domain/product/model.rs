/// Price row owned by a product. The back-reference to the owning product
/// only exists at the persistence layer, so the aggregate stays cycle-free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    pub id: i64,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub barcode: i64,
    pub count_in_stock: i64,
    pub price: Price,
}

/// Transient product before persistence. Identifiers are assigned by the
/// database sequence, so the creation shape carries none.
pub struct NewProduct {
    pub name: String,
    pub barcode: i64,
    pub count_in_stock: i64,
    pub price: i64,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        name: String,
        barcode: i64,
        count_in_stock: i64,
        price: Price,
    ) -> Self {
        Self {
            id,
            name,
            barcode,
            count_in_stock,
            price,
        }
    }
}
