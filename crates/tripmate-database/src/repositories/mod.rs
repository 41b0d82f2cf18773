//! PostgreSQL repository implementations of the store ports.

pub mod collection;
pub mod country;
pub mod permission;
pub mod post;
pub mod user;

pub use collection::CollectionRepository;
pub use country::CountryRepository;
pub use permission::PermissionRepository;
pub use post::PostRepository;
pub use user::UserRepository;
