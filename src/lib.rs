pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use app::AppState;
pub use application::services::group_service::GroupService;
pub use application::services::membership_resolver::{MembershipResolver, ResolverConfig};
pub use domain::errors::DomainError;
pub use domain::models::account::Account;
pub use domain::models::group::Group;
pub use domain::models::platform::Platform;
pub use domain::repositories::account_lookup::AccountLookup;
pub use domain::repositories::group_repository::GroupRepository;
