//! Application — a single job application record.

use serde::{Deserialize, Serialize};

use crate::error::{JobTrackError, ValidationError};
use crate::id::ApplicationId;
use crate::time::Date;

/// A persisted job application, as returned by storage and the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: ApplicationId,
    pub company: String,
    pub position: String,
    pub status: String,
    pub date_applied: Date,
    pub notes: Option<String>,
}

impl Application {
    /// Attach a store-assigned identifier to a validated record.
    #[must_use]
    pub fn from_new(id: ApplicationId, new: NewApplication) -> Self {
        Self {
            id,
            company: new.company,
            position: new.position,
            status: new.status,
            date_applied: new.date_applied,
            notes: new.notes,
        }
    }
}

/// A job application that has not been stored yet and has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub company: String,
    pub position: String,
    pub status: String,
    pub date_applied: Date,
    pub notes: Option<String>,
}

impl NewApplication {
    /// Create a builder for constructing a [`NewApplication`].
    #[must_use]
    pub fn builder() -> NewApplicationBuilder {
        NewApplicationBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`JobTrackError::Validation`] when `company`, `position` or
    /// `status` is empty.
    pub fn validate(&self) -> Result<(), JobTrackError> {
        for (field, value) in [
            ("company", &self.company),
            ("position", &self.position),
            ("status", &self.status),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::EmptyField(field).into());
            }
        }
        Ok(())
    }
}

/// Step-by-step builder for [`NewApplication`].
#[derive(Debug, Default)]
pub struct NewApplicationBuilder {
    company: Option<String>,
    position: Option<String>,
    status: Option<String>,
    date_applied: Option<Date>,
    notes: Option<String>,
}

impl NewApplicationBuilder {
    #[must_use]
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    #[must_use]
    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn date_applied(mut self, date_applied: Date) -> Self {
        self.date_applied = Some(date_applied);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewApplication`].
    ///
    /// Fields are reported by their wire names (`dateApplied`).
    ///
    /// # Errors
    ///
    /// Returns [`JobTrackError::Validation`] if a required field is missing
    /// or empty.
    pub fn build(self) -> Result<NewApplication, JobTrackError> {
        let new = NewApplication {
            company: self
                .company
                .ok_or(ValidationError::MissingField("company"))?,
            position: self
                .position
                .ok_or(ValidationError::MissingField("position"))?,
            status: self.status.ok_or(ValidationError::MissingField("status"))?,
            date_applied: self
                .date_applied
                .ok_or(ValidationError::MissingField("dateApplied"))?,
            notes: self.notes,
        };
        new.validate()?;
        Ok(new)
    }
}
