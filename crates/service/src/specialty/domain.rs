use serde::{Deserialize, Serialize};

/// Stored specialty as returned to callers.
pub type Specialty = models::specialty::Model;

fn default_active() -> bool { true }

/// Create / full-replace input. Omitted optionals take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialtyCreate {
    pub name: String,
    #[serde(default)]
    pub descriptions: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl SpecialtyCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), descriptions: None, is_active: true }
    }

    pub fn with_descriptions(mut self, descriptions: impl Into<String>) -> Self {
        self.descriptions = Some(descriptions.into());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

/// Partial update input. `None` (absent or JSON `null`) leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialtyUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub descriptions: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl SpecialtyUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.descriptions.is_none() && self.is_active.is_none()
    }

    /// Merge supplied fields into `target`.
    pub fn apply_to(&self, target: &mut Specialty) {
        if let Some(name) = &self.name { target.name = name.clone(); }
        if let Some(d) = &self.descriptions { target.descriptions = Some(d.clone()); }
        if let Some(b) = self.is_active { target.is_active = b; }
    }
}
