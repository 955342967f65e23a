// Application services
// Catalog operations that span the team and shirt collections

pub mod shirts;
pub mod teams;

pub use shirts::ShirtService;
pub use teams::TeamService;
