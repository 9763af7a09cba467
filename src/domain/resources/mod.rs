//! Crisis resource directory.
//!
//! Small static lookup from region code to hotlines and the local
//! emergency number, consumed by the High-tier intervention screen.
//! Unrecognized regions fall back to US resources.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// A single crisis hotline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hotline {
    pub name: &'static str,
    pub phone: &'static str,
    pub description: &'static str,
    pub availability: &'static str,
}

/// Resources for one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionResources {
    pub name: &'static str,
    pub hotlines: &'static [Hotline],
    pub emergency_number: &'static str,
}

const US_HOTLINES: &[Hotline] = &[
    Hotline {
        name: "988 Suicide & Crisis Lifeline",
        phone: "988",
        description: "Free, confidential support for people in distress",
        availability: "24/7",
    },
    Hotline {
        name: "Crisis Text Line",
        phone: "Text HOME to 741741",
        description: "Text-based crisis support",
        availability: "24/7",
    },
];

const UK_HOTLINES: &[Hotline] = &[
    Hotline {
        name: "Samaritans",
        phone: "116 123",
        description: "Emotional support for anyone in distress",
        availability: "24/7",
    },
    Hotline {
        name: "Shout",
        phone: "Text SHOUT to 85258",
        description: "Text-based crisis support",
        availability: "24/7",
    },
];

const CA_HOTLINES: &[Hotline] = &[
    Hotline {
        name: "Talk Suicide Canada",
        phone: "1-833-456-4566",
        description: "National suicide prevention service",
        availability: "24/7",
    },
    Hotline {
        name: "Kids Help Phone",
        phone: "1-800-668-6868",
        description: "Support for young people",
        availability: "24/7",
    },
];

const AU_HOTLINES: &[Hotline] = &[
    Hotline {
        name: "Lifeline Australia",
        phone: "13 11 14",
        description: "Crisis support and suicide prevention",
        availability: "24/7",
    },
    Hotline {
        name: "Beyond Blue",
        phone: "1300 22 4636",
        description: "Anxiety and depression support",
        availability: "24/7",
    },
];

const US: RegionResources = RegionResources {
    name: "United States",
    hotlines: US_HOTLINES,
    emergency_number: "911",
};

static DIRECTORY: Lazy<HashMap<&'static str, RegionResources>> = Lazy::new(|| {
    HashMap::from([
        ("US", US),
        (
            "UK",
            RegionResources {
                name: "United Kingdom",
                hotlines: UK_HOTLINES,
                emergency_number: "999",
            },
        ),
        (
            "CA",
            RegionResources {
                name: "Canada",
                hotlines: CA_HOTLINES,
                emergency_number: "911",
            },
        ),
        (
            "AU",
            RegionResources {
                name: "Australia",
                hotlines: AU_HOTLINES,
                emergency_number: "000",
            },
        ),
    ])
});

/// Looks up crisis resources for a region code (case insensitive).
///
/// Unrecognized codes fall back to US resources: showing some real hotline
/// beats showing none.
pub fn crisis_resources(region_code: &str) -> &'static RegionResources {
    DIRECTORY
        .get(region_code.trim().to_uppercase().as_str())
        .unwrap_or(&DIRECTORY["US"])
}
