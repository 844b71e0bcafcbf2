pub mod client;
pub mod error;
pub mod normalize;
pub mod soql;
pub mod types;

pub use client::InspectionClient;
pub use error::SodaError;
pub use normalize::normalize_rows;
pub use soql::escape_soql_literal;
