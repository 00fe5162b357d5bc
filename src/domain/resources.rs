use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Content collections exposed by the backend's list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Blogs,
    Services,
    Gallery,
    Testimonials,
    Quotes,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::Blogs,
        Resource::Services,
        Resource::Gallery,
        Resource::Testimonials,
        Resource::Quotes,
    ];

    /// Relative path of the list endpoint.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Blogs => "blogs",
            Resource::Services => "services",
            Resource::Gallery => "gallery",
            Resource::Testimonials => "testimonials",
            Resource::Quotes => "quotes",
        }
    }

    /// Plural noun used in listing summaries and empty states.
    pub fn label(self) -> &'static str {
        match self {
            Resource::Blogs => "blog posts",
            Resource::Services => "services",
            Resource::Gallery => "gallery items",
            Resource::Testimonials => "testimonials",
            Resource::Quotes => "quote requests",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Resource {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|resource| resource.path() == value)
            .ok_or_else(|| DomainError::validation(format!("unknown resource `{value}`")))
    }
}
