//! Person records as stored by the persistence layer.
//!
//! Field names and defaults follow the stored JSON documents (camelCase, `roleAsParent`, etc).
//! Records are read-only input for the engine except for the `x`/`y` layout results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "F")]
    Female,
    #[default]
    #[serde(rename = "M")]
    Male,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParentRole {
    Mom,
    #[default]
    Dad,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub owner: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<DateTime<Utc>>,
    #[serde(default)]
    pub children: Vec<String>,
    #[serde(default)]
    pub partners: Vec<String>,
    #[serde(default)]
    pub role_as_parent: ParentRole,
    /// Account that owns the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

fn default_name() -> String {
    "Some Person".to_string()
}

impl Person {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: default_name(),
            gender: Gender::default(),
            owner: false,
            birthday: None,
            children: Vec::new(),
            partners: Vec::new(),
            role_as_parent: ParentRole::default(),
            user: None,
            x: None,
            y: None,
        }
    }

    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_partners<I, S>(mut self, partners: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.partners = partners.into_iter().map(Into::into).collect();
        self
    }

    /// Layout position, once the record has been laid out.
    pub fn position(&self) -> Option<crate::Point> {
        Some(crate::Point {
            x: self.x?,
            y: self.y?,
        })
    }
}

/// Parse a JSON array of person records.
pub fn parse_people(json: &str) -> crate::Result<Vec<Person>> {
    Ok(serde_json::from_str(json)?)
}
