pub use super::order::Entity as Order;
pub use super::product::Entity as Product;
pub use super::restaurant_table::Entity as RestaurantTable;
pub use super::table_session::Entity as TableSession;
