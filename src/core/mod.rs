pub mod balances;
pub mod decode;
pub mod errors;
pub mod filter;
pub mod models;
pub mod presentation;
pub mod resolver;
