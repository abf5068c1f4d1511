//! backend/src/io/rest/mappers/product_mapper.rs

use crate::domain::models::product::Product as DomainProduct;
use shared::Product as SharedProduct;

/// Mapper to convert domain Product models into shared Product DTOs.
pub struct ProductMapper;

impl ProductMapper {
    /// Converts a domain Product model to a shared Product DTO.
    pub fn to_dto(domain: DomainProduct) -> SharedProduct {
        SharedProduct {
            id: domain.id,
            product_name: domain.product_name,
            price: domain.price,
        }
    }

    pub fn to_product_list_dto(domain_products: Vec<DomainProduct>) -> Vec<SharedProduct> {
        domain_products.into_iter().map(Self::to_dto).collect()
    }
}
