/// A product in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub product_name: String,
    pub price: f64,
}
