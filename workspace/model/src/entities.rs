//! SeaORM entities for the workshop's order book: staff users, clients and
//! the orders they place.

pub mod client;
pub mod order;
pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::client::Entity as Client;
    pub use super::order::Entity as Order;
    pub use super::user::Entity as User;
}
