pub mod config;
pub mod db;
pub mod directory;
pub mod error;
pub mod forms;
pub mod seed;
pub mod service;
pub mod store;
pub mod types;
pub mod ui;

pub use error::ClubHubError;
pub use seed::SeedDataset;
pub use store::{PersistentStore, StoreKey};
