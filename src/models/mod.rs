use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder artwork used for freshly drafted projects
pub const PLACEHOLDER_THUMBNAIL: &str = "https://picsum.photos/800/600";
pub const PLACEHOLDER_IMAGE: &str = "https://picsum.photos/1200/800";

/// Kind of property a project sells
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Plot,
    Villa,
    Resort,
}

impl PropertyType {
    pub const ALL: [PropertyType; 3] = [PropertyType::Plot, PropertyType::Villa, PropertyType::Resort];

    /// Wire name, as used in data files and filter values
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::Plot => "plot",
            PropertyType::Villa => "villa",
            PropertyType::Resort => "resort",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Sales status of a project
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Available,
    Sold,
}

impl PropertyStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyStatus::Available => "available",
            PropertyStatus::Sold => "sold",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(PropertyStatus::Available),
            "sold" => Some(PropertyStatus::Sold),
            _ => None,
        }
    }
}

/// Geographic position of a project
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// One line of an investment breakdown
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvestmentItem {
    pub label: String,
    pub amount: u64,
}

/// A return-on-investment scenario shown on the detail page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoiModel {
    pub title: String,
    /// Free text such as "~ 40-50 Acres"
    pub area: String,
    pub highlights: Vec<String>,
    pub return_text: String,
}

/// Core project data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    /// URL-safe lookup key for the detail view
    pub slug: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    /// Smallest currency unit (INR)
    pub price: u64,
    pub city: String,
    pub state: String,
    pub location: Location,
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub short_description: String,
    pub long_description: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub status: PropertyStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brochure_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub investment_breakdown: Vec<InvestmentItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roi_models: Vec<RoiModel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_highlights: Vec<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Blank record with the defaults the admin "add" form starts from.
    ///
    /// The id is left empty; the store assigns one on create.
    pub fn draft() -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            title: String::new(),
            slug: String::new(),
            property_type: PropertyType::Plot,
            price: 0,
            city: String::new(),
            state: String::new(),
            location: Location::default(),
            thumbnail: PLACEHOLDER_THUMBNAIL.to_string(),
            images: vec![PLACEHOLDER_IMAGE.to_string()],
            short_description: String::new(),
            long_description: String::new(),
            amenities: Vec::new(),
            status: PropertyStatus::Available,
            brochure_url: None,
            investment_breakdown: Vec::new(),
            roi_models: Vec::new(),
            key_highlights: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Sold projects stay listed but lose their purchase affordances
    pub fn is_purchasable(&self) -> bool {
        self.status == PropertyStatus::Available
    }

    pub fn brochure_file_name(&self) -> String {
        format!("{}-brochure.pdf", self.slug)
    }
}

/// A lead captured from a project detail page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_title: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

/// Render an amount in rupees with Indian digit grouping (lakh/crore).
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{digits}");
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();

    format!("₹{},{}", groups.join(","), last_three)
}
