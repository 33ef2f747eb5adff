//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate so the rest of the
//! code base doesn't have to spell out `entity::<table>::Model`.

/// Registered shop account.
///
/// # Fields (from `entity::account::Model`)
/// - `id` - Primary key, stored in the session under `user` after login
/// - `email` - Unique login name
/// - `name` - Display name
/// - `password_hash` - Argon2 PHC string
/// - `created_at` - Timestamp when the account was created
pub type AccountModel = entity::account::Model;

/// Product listed in the shop, owned by the account that created it.
///
/// # Fields (from `entity::product::Model`)
/// - `id` - Primary key
/// - `title`, `price`, `description` - Listing details
/// - `image_url` - Public URL of the uploaded product image
/// - `account_id` - Foreign key to the owning account
/// - `created_at` - Timestamp when the product was created
pub type ProductModel = entity::product::Model;

/// Persisted session record.
pub type ShopSessionModel = entity::shop_session::Model;
