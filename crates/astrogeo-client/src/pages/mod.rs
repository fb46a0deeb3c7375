//! Page components.

mod home;
mod not_found;
mod solar;
mod solids;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use solar::SolarPage;
pub use solids::SolidsPage;
