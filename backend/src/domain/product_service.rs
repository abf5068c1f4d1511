use tracing::{info, warn};

use crate::domain::error::{DomainError, FieldErrors};
use crate::domain::models::product::Product;
use crate::storage::sqlite::repositories::ProductRepository;
use crate::storage::sqlite::DbConnection;
use shared::{CreateProductRequest, UpdateProductRequest};

const MAX_PRODUCT_NAME_LENGTH: usize = 100;

/// Service for managing the product catalog
#[derive(Clone)]
pub struct ProductService {
    products: ProductRepository,
}

impl ProductService {
    /// Create a new ProductService
    pub fn new(db: DbConnection) -> Self {
        Self {
            products: ProductRepository::new(db),
        }
    }

    /// Create a new product
    pub async fn create_product(
        &self,
        request: CreateProductRequest,
    ) -> Result<Product, DomainError> {
        info!("Creating product: name={:?}", request.product_name);

        // Validate the request
        let (product_name, price) = self.validate_create_request(&request)?;

        let product = self.products.create_product(&product_name, price).await?;

        info!("Created product: {} with ID: {}", product.product_name, product.id);

        Ok(product)
    }

    /// Get a product by ID
    pub async fn get_product(&self, product_id: i64) -> Result<Product, DomainError> {
        info!("Getting product: {}", product_id);

        match self.products.get_product(product_id).await? {
            Some(product) => Ok(product),
            None => {
                warn!("Product not found: {}", product_id);
                Err(DomainError::not_found("Product", product_id))
            }
        }
    }

    /// List all products
    pub async fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        info!("Listing all products");

        let products = self.products.list_products().await?;

        info!("Found {} products", products.len());

        Ok(products)
    }

    /// Update an existing product's name and price
    pub async fn update_product(
        &self,
        product_id: i64,
        request: UpdateProductRequest,
    ) -> Result<Product, DomainError> {
        info!("Updating product: {}", product_id);

        // Get the existing product
        let mut product = self
            .products
            .get_product(product_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product", product_id))?;

        // Validate the update request
        let (product_name, price) = self.validate_update_request(&request)?;

        product.product_name = product_name;
        product.price = price;
        self.products.update_product(&product).await?;

        info!("Updated product: {} with ID: {}", product.product_name, product.id);

        Ok(product)
    }

    /// Delete a product
    pub async fn delete_product(&self, product_id: i64) -> Result<(), DomainError> {
        info!("Deleting product: {}", product_id);

        // Any order links cascade at the schema level
        let deleted = self.products.delete_product(product_id).await?;
        if !deleted {
            warn!("Product not found: {}", product_id);
            return Err(DomainError::not_found("Product", product_id));
        }

        info!("Deleted product: {}", product_id);

        Ok(())
    }

    /// Validate create product request; a missing price defaults to zero
    fn validate_create_request(
        &self,
        request: &CreateProductRequest,
    ) -> Result<(String, f64), DomainError> {
        Self::validate_fields(&request.product_name, request.price, false)
    }

    /// Validate update product request; both fields are required
    fn validate_update_request(
        &self,
        request: &UpdateProductRequest,
    ) -> Result<(String, f64), DomainError> {
        Self::validate_fields(&request.product_name, request.price, true)
    }

    fn validate_fields(
        product_name: &Option<String>,
        price: Option<f64>,
        price_required: bool,
    ) -> Result<(String, f64), DomainError> {
        let mut errors = FieldErrors::new();

        let product_name = match product_name.as_deref().map(str::trim) {
            None | Some("") => {
                errors.add("product_name", "Missing data for required field.");
                String::new()
            }
            Some(name) => {
                if name.len() > MAX_PRODUCT_NAME_LENGTH {
                    errors.add(
                        "product_name",
                        format!("Longer than maximum length {}.", MAX_PRODUCT_NAME_LENGTH),
                    );
                }
                name.to_string()
            }
        };

        let price = match price {
            Some(price) => price,
            None => {
                if price_required {
                    errors.add("price", "Missing data for required field.");
                }
                0.0
            }
        };
        if price < 0.0 {
            errors.add("price", "Price cannot be negative");
        }

        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        Ok((product_name, price))
    }
}
