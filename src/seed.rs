//! The read-only clubs, vendors and requests shipped with the application.

use crate::error::ClubHubError;
use crate::types::{Club, Vendor, VendorRequest};
use serde::de::DeserializeOwned;
use std::{fs, path::Path};
use tracing::{info, warn};

const BUNDLED_CLUBS: &str = include_str!("../seed/clubs.json");
const BUNDLED_VENDORS: &str = include_str!("../seed/vendors.json");
const BUNDLED_REQUESTS: &str = include_str!("../seed/requests.json");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedDataset {
    pub clubs: Vec<Club>,
    pub vendors: Vec<Vendor>,
    pub requests: Vec<VendorRequest>,
}

impl SeedDataset {
    /// Parse the collections compiled into the binary.
    pub fn bundled() -> Result<Self, ClubHubError> {
        Ok(Self {
            clubs: serde_json::from_str(BUNDLED_CLUBS)?,
            vendors: serde_json::from_str(BUNDLED_VENDORS)?,
            requests: serde_json::from_str(BUNDLED_REQUESTS)?,
        })
    }

    /// Bundled collections, each replaced by `<dir>/<kind>.json` when that file
    /// exists and parses.
    pub fn load(dir: Option<&Path>) -> Result<Self, ClubHubError> {
        let mut seed = Self::bundled()?;
        let Some(dir) = dir else {
            return Ok(seed);
        };
        if !dir.is_dir() {
            warn!(path = %dir.display(), "seed directory not found; using bundled seed");
            return Ok(seed);
        }

        if let Some(clubs) = load_override(dir, "clubs.json") {
            seed.clubs = clubs;
        }
        if let Some(vendors) = load_override(dir, "vendors.json") {
            seed.vendors = vendors;
        }
        if let Some(requests) = load_override(dir, "requests.json") {
            seed.requests = requests;
        }

        info!(
            path = %dir.display(),
            clubs = seed.clubs.len(),
            vendors = seed.vendors.len(),
            requests = seed.requests.len(),
            "seed loaded"
        );
        Ok(seed)
    }
}

fn load_override<T: DeserializeOwned>(dir: &Path, file: &str) -> Option<Vec<T>> {
    let path = dir.join(file);
    if !path.exists() {
        return None;
    }
    read_collection(&path)
        .inspect_err(|e| {
            warn!(
                path = %path.display(),
                error = %e,
                "failed to load seed file; keeping bundled copy"
            );
        })
        .ok()
}

fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ClubHubError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
