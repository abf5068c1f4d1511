//! backend/src/io/rest/mappers/order_mapper.rs

use crate::domain::models::order::Order as DomainOrder;
use shared::Order as SharedOrder;

/// Mapper to convert domain Order models into shared Order DTOs.
pub struct OrderMapper;

impl OrderMapper {
    /// Converts a domain Order model to a shared Order DTO.
    ///
    /// The order date goes over the wire as an RFC 3339 string.
    pub fn to_dto(domain: DomainOrder) -> SharedOrder {
        SharedOrder {
            id: domain.id,
            order_date: domain.order_date.to_rfc3339(),
            user_id: domain.user_id,
        }
    }

    pub fn to_order_list_dto(domain_orders: Vec<DomainOrder>) -> Vec<SharedOrder> {
        domain_orders.into_iter().map(Self::to_dto).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_order_date_renders_as_rfc3339() {
        let domain = DomainOrder {
            id: 1,
            order_date: Utc.with_ymd_and_hms(2025, 6, 14, 10, 0, 0).unwrap(),
            user_id: 2,
        };

        let dto = OrderMapper::to_dto(domain);
        assert_eq!(dto.order_date, "2025-06-14T10:00:00+00:00");
    }
}
