//! backend/src/io/rest/mappers/user_mapper.rs

use crate::domain::models::user::User as DomainUser;
use shared::User as SharedUser;

/// Mapper to convert domain User models into shared User DTOs.
pub struct UserMapper;

impl UserMapper {
    /// Converts a domain User model to a shared User DTO.
    pub fn to_dto(domain: DomainUser) -> SharedUser {
        SharedUser {
            id: domain.id,
            name: domain.name,
            address: domain.address,
            email: domain.email,
        }
    }

    pub fn to_user_list_dto(domain_users: Vec<DomainUser>) -> Vec<SharedUser> {
        domain_users.into_iter().map(Self::to_dto).collect()
    }
}
