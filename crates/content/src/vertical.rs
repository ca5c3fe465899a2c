use serde::{Deserialize, Serialize};
use std::fmt;

/// Industry vertical.
///
/// Every content bundle, sample profile, and preview selection is keyed
/// by one of these. Unknown slugs are an explicit `None` from
/// [`Vertical::from_slug`] so callers decide the fallback themselves
/// instead of an implicit lookup miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vertical {
    Hvac,
    Plumbing,
    Electrical,
    Cleaning,
    Roofing,
    Landscaping,
}

impl Vertical {
    pub const ALL: [Vertical; 6] = [
        Vertical::Hvac,
        Vertical::Plumbing,
        Vertical::Electrical,
        Vertical::Cleaning,
        Vertical::Roofing,
        Vertical::Landscaping,
    ];

    /// The vertical served when a requested slug is not registered
    pub const DEFAULT: Vertical = Vertical::Hvac;

    pub fn from_slug(slug: &str) -> Option<Vertical> {
        match slug {
            "hvac" => Some(Vertical::Hvac),
            "plumbing" => Some(Vertical::Plumbing),
            "electrical" => Some(Vertical::Electrical),
            "cleaning" => Some(Vertical::Cleaning),
            "roofing" => Some(Vertical::Roofing),
            "landscaping" => Some(Vertical::Landscaping),
            _ => None,
        }
    }

    /// Parse a slug, falling back to [`Vertical::DEFAULT`] for unknown
    /// values. The fallback is logged so preview sessions can tell why
    /// they are looking at HVAC content.
    pub fn from_slug_or_default(slug: &str) -> Vertical {
        Vertical::from_slug(slug).unwrap_or_else(|| {
            log::debug!("unknown vertical '{}', using {}", slug, Vertical::DEFAULT);
            Vertical::DEFAULT
        })
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Vertical::Hvac => "hvac",
            Vertical::Plumbing => "plumbing",
            Vertical::Electrical => "electrical",
            Vertical::Cleaning => "cleaning",
            Vertical::Roofing => "roofing",
            Vertical::Landscaping => "landscaping",
        }
    }

    /// Human-readable trade label
    pub fn label(&self) -> &'static str {
        match self {
            Vertical::Hvac => "HVAC",
            Vertical::Plumbing => "Plumbing",
            Vertical::Electrical => "Electrical",
            Vertical::Cleaning => "Cleaning",
            Vertical::Roofing => "Roofing",
            Vertical::Landscaping => "Landscaping",
        }
    }
}

impl fmt::Display for Vertical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
