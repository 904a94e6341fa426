use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Author attribution used when a post is created without one.
pub const DEFAULT_AUTHOR: &str = "AgentPath Editorial Team";

/// Fixed set of categories a blog post can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlogCategory {
    #[serde(rename = "Insurance Tips")]
    InsuranceTips,
    #[serde(rename = "Career Guidance")]
    CareerGuidance,
    #[serde(rename = "Success Stories")]
    SuccessStories,
    #[serde(rename = "Training")]
    Training,
    #[serde(rename = "Industry News")]
    IndustryNews,
    #[serde(rename = "Sales Techniques")]
    SalesTechniques,
    #[serde(rename = "Financial Planning")]
    FinancialPlanning,
}

impl BlogCategory {
    pub const ALL: [BlogCategory; 7] = [
        BlogCategory::InsuranceTips,
        BlogCategory::CareerGuidance,
        BlogCategory::SuccessStories,
        BlogCategory::Training,
        BlogCategory::IndustryNews,
        BlogCategory::SalesTechniques,
        BlogCategory::FinancialPlanning,
    ];

    /// Parse a category from its display name.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BlogCategory::InsuranceTips => "Insurance Tips",
            BlogCategory::CareerGuidance => "Career Guidance",
            BlogCategory::SuccessStories => "Success Stories",
            BlogCategory::Training => "Training",
            BlogCategory::IndustryNews => "Industry News",
            BlogCategory::SalesTechniques => "Sales Techniques",
            BlogCategory::FinancialPlanning => "Financial Planning",
        }
    }
}

/// A blog post document.
///
/// `slug` is the public lookup key and is unique across the collection.
/// `published_at` is stamped once, on the first transition to published,
/// and never rewritten afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub category: BlogCategory,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub published: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub published_at: Option<OffsetDateTime>,
    /// Estimated minutes to read, derived from `content`.
    pub read_time: u32,
    /// Incremented by public reads only.
    pub views: u64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Current occupation options on the application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Occupation {
    Employed,
    SelfEmployed,
    Homemaker,
    Student,
    Retired,
}

impl Occupation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Occupation::Employed => "employed",
            Occupation::SelfEmployed => "self-employed",
            Occupation::Homemaker => "homemaker",
            Occupation::Student => "student",
            Occupation::Retired => "retired",
        }
    }
}

/// Educational qualification options on the application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Education {
    #[serde(rename = "10th")]
    Tenth,
    #[serde(rename = "12th")]
    Twelfth,
    #[serde(rename = "graduate")]
    Graduate,
    #[serde(rename = "post-graduate")]
    PostGraduate,
}

impl Education {
    pub fn as_str(&self) -> &'static str {
        match self {
            Education::Tenth => "10th",
            Education::Twelfth => "12th",
            Education::Graduate => "graduate",
            Education::PostGraduate => "post-graduate",
        }
    }
}

/// A recruitment application. Write-once; `email` is unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub city: String,
    pub occupation: Occupation,
    pub education: Education,
    pub sales_experience: bool,
    pub reason: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}
