pub mod account;
pub mod denom;
pub mod eth;
pub mod restriction;
