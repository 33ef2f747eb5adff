pub use super::account::Entity as Account;
pub use super::product::Entity as Product;
pub use super::shop_session::Entity as ShopSession;
