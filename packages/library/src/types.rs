// ABOUTME: Type definitions for library resources, relationships, and tags
// ABOUTME: Resources form a typed graph; tags organize them across screens

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of library entry a resource is
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Article,
    Guide,
    VendorDoc,
    Template,
    Tool,
    Reference,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Article => "article",
            ResourceKind::Guide => "guide",
            ResourceKind::VendorDoc => "vendor_doc",
            ResourceKind::Template => "template",
            ResourceKind::Tool => "tool",
            ResourceKind::Reference => "reference",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "article" => Some(ResourceKind::Article),
            "guide" => Some(ResourceKind::Guide),
            "vendor_doc" => Some(ResourceKind::VendorDoc),
            "template" => Some(ResourceKind::Template),
            "tool" => Some(ResourceKind::Tool),
            "reference" => Some(ResourceKind::Reference),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A library resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub kind: ResourceKind,
    pub description: String,
    pub url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceCreateInput {
    pub title: String,
    pub kind: ResourceKind,
    #[serde(default)]
    pub description: String,
    pub url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Search filter for resources; all fields combine with AND
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceFilter {
    pub query: Option<String>,
    pub kind: Option<ResourceKind>,
    pub tag: Option<String>,
}

/// Listing row returned by resource search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceSummary {
    pub id: String,
    pub title: String,
    pub kind: ResourceKind,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// How two resources relate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    Requires,
    RelatedTo,
    Supersedes,
    PartOf,
    ConflictsWith,
}

impl RelationshipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::Requires => "requires",
            RelationshipType::RelatedTo => "related_to",
            RelationshipType::Supersedes => "supersedes",
            RelationshipType::PartOf => "part_of",
            RelationshipType::ConflictsWith => "conflicts_with",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "requires" => Some(RelationshipType::Requires),
            "related_to" => Some(RelationshipType::RelatedTo),
            "supersedes" => Some(RelationshipType::Supersedes),
            "part_of" => Some(RelationshipType::PartOf),
            "conflicts_with" => Some(RelationshipType::ConflictsWith),
            _ => None,
        }
    }
}

/// A typed edge between two resources
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceRelationship {
    pub id: String,
    pub source_id: String,
    pub target_id: String,
    pub relationship_type: RelationshipType,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A tag for organizing resources
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub archived_at: Option<DateTime<Utc>>,
}

/// Input for creating a tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagCreateInput {
    pub name: String,
    pub color: Option<String>,
    pub description: Option<String>,
}

/// Input for updating a tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagUpdateInput {
    pub name: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
    pub archived_at: Option<DateTime<Utc>>,
}
