//! Consulate types and identity.
//!
//! A consulate is a physical office of a destination country located in a
//! host country—an embassy, a consulate proper, or an outsourced visa
//! application center. Consulates own their jurisdiction rules; the rules
//! have no independent lifecycle.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::jurisdiction::JurisdictionRule;

/// Stable identifier for a consulate office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConsulateId(Uuid);

impl ConsulateId {
    /// Creates a new random consulate ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a consulate ID from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ConsulateId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConsulateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ConsulateId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Stable identifier for a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryId(Uuid);

impl CountryId {
    /// Creates a new random country ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a country ID from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CountryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for CountryId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// What kind of office this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfficeType {
    Embassy,
    Consulate,
    VisaApplicationCenter,
}

impl fmt::Display for OfficeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embassy => write!(f, "embassy"),
            Self::Consulate => write!(f, "consulate"),
            Self::VisaApplicationCenter => write!(f, "visa_application_center"),
        }
    }
}

/// A physical office of a destination country located in a host country.
///
/// `country_id` is the destination whose visas the office issues;
/// `host_country_id` is where the office sits (and where the applicant
/// resides). The two are expected to differ, but that is an upstream data
/// concern and is not enforced here.
///
/// # Examples
///
/// ```
/// use jurisolve::{Consulate, CountryId, OfficeType};
///
/// let consulate = Consulate::builder()
///     .name("Consulate General of France, San Francisco")
///     .office_type(OfficeType::Consulate)
///     .country_id(CountryId::new())
///     .host_country_id(CountryId::new())
///     .city("San Francisco")
///     .build()
///     .unwrap();
///
/// assert!(consulate.is_active);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consulate {
    pub id: ConsulateId,
    pub name: String,
    pub office_type: OfficeType,

    /// The destination country whose visas this office issues.
    pub country_id: CountryId,

    /// The country the office is physically located in.
    pub host_country_id: CountryId,

    pub city: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,

    pub is_active: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// The jurisdiction rules this office owns. Matching detail only;
    /// stripped from resolver output (see [`ConsulateProfile`]).
    #[serde(default)]
    pub jurisdictions: Vec<JurisdictionRule>,
}

impl Consulate {
    /// Starts building a consulate.
    #[must_use]
    pub fn builder() -> ConsulateBuilder {
        ConsulateBuilder::new()
    }

    /// The rules the resolver may consider. Filters on `is_active`
    /// defensively even when the caller already did.
    pub fn active_jurisdictions(&self) -> impl Iterator<Item = &JurisdictionRule> {
        self.jurisdictions.iter().filter(|r| r.is_active)
    }

    /// Named regions this office is known to cover, deduplicated,
    /// in rule order.
    #[must_use]
    pub fn covered_region_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for rule in self.active_jurisdictions() {
            if let Some(name) = rule.scope.region_name() {
                if !names.iter().any(|n| n.to_lowercase() == name.to_lowercase()) {
                    names.push(name.to_string());
                }
            }
        }
        names
    }

    /// Attaches a jurisdiction rule to this office.
    #[must_use]
    pub fn with_rule(mut self, rule: JurisdictionRule) -> Self {
        self.jurisdictions.push(rule);
        self
    }
}

impl PartialEq for Consulate {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Consulate {}

/// The consulate payload handed back to callers.
///
/// Identical to [`Consulate`] minus the jurisdiction rules: stripping the
/// rules is a type-level guarantee of the output shape, not a runtime
/// filter a future edit could forget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsulateProfile {
    pub id: ConsulateId,
    pub name: String,
    pub office_type: OfficeType,
    pub country_id: CountryId,
    pub host_country_id: CountryId,
    pub city: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,

    pub is_active: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Consulate> for ConsulateProfile {
    fn from(c: &Consulate) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            office_type: c.office_type,
            country_id: c.country_id,
            host_country_id: c.host_country_id,
            city: c.city.clone(),
            address: c.address.clone(),
            phone: c.phone.clone(),
            email: c.email.clone(),
            website: c.website.clone(),
            appointment_url: c.appointment_url.clone(),
            hours: c.hours.clone(),
            is_active: c.is_active,
            notes: c.notes.clone(),
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Builder for creating [`Consulate`] instances.
///
/// Ensures the required fields are set and non-blank before building.
#[derive(Debug, Default)]
pub struct ConsulateBuilder {
    id: Option<ConsulateId>,
    name: Option<String>,
    office_type: Option<OfficeType>,
    country_id: Option<CountryId>,
    host_country_id: Option<CountryId>,
    city: Option<String>,
    address: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    website: Option<String>,
    appointment_url: Option<String>,
    hours: Option<String>,
    is_active: Option<bool>,
    notes: Option<String>,
    jurisdictions: Vec<JurisdictionRule>,
}

impl ConsulateBuilder {
    /// Creates a new consulate builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit ID (a random one is generated otherwise).
    #[must_use]
    pub fn id(mut self, id: ConsulateId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the display name (required).
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the office type (required).
    #[must_use]
    pub fn office_type(mut self, office_type: OfficeType) -> Self {
        self.office_type = Some(office_type);
        self
    }

    /// Sets the destination country (required).
    #[must_use]
    pub fn country_id(mut self, id: CountryId) -> Self {
        self.country_id = Some(id);
        self
    }

    /// Sets the host country (required).
    #[must_use]
    pub fn host_country_id(mut self, id: CountryId) -> Self {
        self.host_country_id = Some(id);
        self
    }

    /// Sets the city (required).
    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Sets the street address.
    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the contact phone.
    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the contact email.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the website URL.
    #[must_use]
    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    /// Sets the appointment booking URL.
    #[must_use]
    pub fn appointment_url(mut self, url: impl Into<String>) -> Self {
        self.appointment_url = Some(url.into());
        self
    }

    /// Sets the opening hours text.
    #[must_use]
    pub fn hours(mut self, hours: impl Into<String>) -> Self {
        self.hours = Some(hours.into());
        self
    }

    /// Marks the office inactive (active by default).
    #[must_use]
    pub fn inactive(mut self) -> Self {
        self.is_active = Some(false);
        self
    }

    /// Attaches free-text notes.
    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Attaches a jurisdiction rule.
    #[must_use]
    pub fn rule(mut self, rule: JurisdictionRule) -> Self {
        self.jurisdictions.push(rule);
        self
    }

    /// Builds the consulate.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a required field is missing or the
    /// name/city is blank.
    pub fn build(self) -> Result<Consulate, ValidationError> {
        let name = self.name.ok_or_else(|| ValidationError::MissingField {
            field: "name".to_string(),
        })?;
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyConsulateName);
        }

        let city = self.city.ok_or_else(|| ValidationError::MissingField {
            field: "city".to_string(),
        })?;
        if city.trim().is_empty() {
            return Err(ValidationError::EmptyCity);
        }

        let office_type = self
            .office_type
            .ok_or_else(|| ValidationError::MissingField {
                field: "office_type".to_string(),
            })?;
        let country_id = self
            .country_id
            .ok_or_else(|| ValidationError::MissingField {
                field: "country_id".to_string(),
            })?;
        let host_country_id =
            self.host_country_id
                .ok_or_else(|| ValidationError::MissingField {
                    field: "host_country_id".to_string(),
                })?;

        let now = Utc::now();
        Ok(Consulate {
            id: self.id.unwrap_or_default(),
            name,
            office_type,
            country_id,
            host_country_id,
            city,
            address: self.address,
            phone: self.phone,
            email: self.email,
            website: self.website,
            appointment_url: self.appointment_url,
            hours: self.hours,
            is_active: self.is_active.unwrap_or(true),
            notes: self.notes,
            created_at: now,
            updated_at: now,
            jurisdictions: self.jurisdictions,
        })
    }
}
