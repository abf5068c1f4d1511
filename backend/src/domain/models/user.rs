/// A registered user account.
///
/// The email address is unique across all users; the address may be empty
/// when the user never supplied one.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub email: String,
}
