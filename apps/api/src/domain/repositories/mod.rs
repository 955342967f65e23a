// Repository ports
// Persistence contracts implemented by the infrastructure layer

pub mod shirt_repository;
pub mod store_health;
pub mod team_repository;
pub mod user_repository;

pub use shirt_repository::ShirtRepository;
pub use store_health::StoreHealth;
pub use team_repository::TeamRepository;
pub use user_repository::{NewUser, User, UserRepository};
