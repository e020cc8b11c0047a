//! Club registration and request posting forms.
//!
//! A form holds raw text exactly as typed. `submit` validates presence of the
//! required fields, builds the record with a fresh id and resets the form.

use crate::directory::ids::{CLUB_ID_BASE, REQUEST_ID_BASE, synthesize_id};
use crate::types::{Club, VendorRequest};
use rand::Rng;
use std::collections::HashSet;
use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum FormError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),

    #[error("unknown form field `{0}`")]
    UnknownField(String),
}

/// Split on commas, trim each piece, drop empty pieces, keep order.
pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClubForm {
    pub name: String,
    pub description: String,
    /// Comma-separated.
    pub interests: String,
    /// Comma-separated.
    pub vibes: String,
    /// Comma-separated.
    pub collab_needs: String,
    pub contact: String,
}

impl ClubForm {
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<(), FormError> {
        let slot = match field {
            "name" => &mut self.name,
            "description" => &mut self.description,
            "interests" => &mut self.interests,
            "vibes" => &mut self.vibes,
            "collab_needs" => &mut self.collab_needs,
            "contact" => &mut self.contact,
            other => return Err(FormError::UnknownField(other.to_string())),
        };
        *slot = value.into();
        Ok(())
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    /// Build a club with an id outside `existing_ids`. The form is cleared only on success.
    pub fn submit<R: Rng>(
        &mut self,
        existing_ids: &HashSet<i64>,
        rng: &mut R,
    ) -> Result<Club, FormError> {
        let name = required(&self.name, "name")?;
        let club = Club {
            id: synthesize_id(existing_ids, CLUB_ID_BASE, rng),
            name,
            description: self.description.trim().to_string(),
            interests: split_csv(&self.interests),
            vibes: split_csv(&self.vibes),
            collab_needs: split_csv(&self.collab_needs),
            contact: optional(&self.contact),
        };
        *self = Self::default();
        Ok(club)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestForm {
    pub club_name: String,
    pub title: String,
    pub description: String,
    /// Comma-separated.
    pub needs: String,
    pub budget: String,
    pub date: String,
    pub time_window: String,
    pub contact: String,
}

impl RequestForm {
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<(), FormError> {
        let slot = match field {
            "club_name" => &mut self.club_name,
            "title" => &mut self.title,
            "description" => &mut self.description,
            "needs" => &mut self.needs,
            "budget" => &mut self.budget,
            "date" => &mut self.date,
            "time_window" => &mut self.time_window,
            "contact" => &mut self.contact,
            other => return Err(FormError::UnknownField(other.to_string())),
        };
        *slot = value.into();
        Ok(())
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    pub fn submit<R: Rng>(
        &mut self,
        existing_ids: &HashSet<i64>,
        rng: &mut R,
    ) -> Result<VendorRequest, FormError> {
        let club_name = required(&self.club_name, "club_name")?;
        let title = required(&self.title, "title")?;
        let request = VendorRequest {
            id: synthesize_id(existing_ids, REQUEST_ID_BASE, rng),
            club_name,
            title,
            description: self.description.trim().to_string(),
            needs: split_csv(&self.needs),
            budget: self.budget.trim().to_string(),
            date: self.date.trim().to_string(),
            time_window: self.time_window.trim().to_string(),
            contact: optional(&self.contact),
        };
        *self = Self::default();
        Ok(request)
    }
}
