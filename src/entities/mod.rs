// Entity Models
// The records the sorting demonstrations operate on

pub mod continent;
pub mod country;

pub use continent::Continent;
pub use country::Country;
