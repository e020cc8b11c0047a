//! Record shapes shared by the seed data, the store and the UI.

pub mod club;
pub mod mode;
pub mod request;
pub mod vendor;

pub use club::{Club, ClubId};
pub use mode::DiscoverMode;
pub use request::{RequestId, VendorRequest};
pub use vendor::Vendor;
