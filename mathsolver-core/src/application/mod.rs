pub mod agent;
pub mod assistant;
pub mod session;
pub mod tooling;
