//! Portal profile models and the facet catalogs their list pages declare.

use serde::{Deserialize, Serialize};

use crate::catalog::FacetCatalog;
use crate::facet::{FacetCardinality, FacetDomain, FacetOption};


pub const STUDENT_COLLECTION: &str = "student_profiles";
pub const COMPANY_COLLECTION: &str = "company_profiles";


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StudentProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub education_program: String,
    pub knowledge: Vec<String>,
    pub lia_period: String,
    pub location: String,
    pub remote_options: String,
    pub profile_picture_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CompanyProfile {
    pub id: String,
    pub company_name: String,
    pub description: String,
    pub website: Option<String>,
    pub city: String,
    pub location_status: String,
    pub accepts_digital_designer: bool,
    pub accepts_webb_developer: bool,
    pub logo_url: Option<String>,
}


/// Facets of the student list page.
pub fn student_facet_catalog() -> FacetCatalog {
    let mut catalog = FacetCatalog::new();
    catalog.declare_facet(
        "education_program",
        FacetDomain::EnumeratedString,
        FacetCardinality::Single,
        vec![
            FacetOption::new("Webbutveckling", "WEBBUTVECKLING"),
            FacetOption::new("Digital Design", "DESIGN"),
        ],
    );
    catalog.declare_facet(
        "knowledge",
        FacetDomain::ArrayMembership,
        FacetCardinality::Multi,
        vec![
            FacetOption::new("FIGMA", "FIGMA"),
            FacetOption::new("WEBFLOW", "WEBFLOW"),
            FacetOption::new("ILLUSTRATOR", "ILLUSTRATOR"),
            FacetOption::new("PHOTOSHOP", "PHOTOSHOP"),
            FacetOption::new("UNREAL ENGINE", "UNREAL ENGINE"),
            FacetOption::new("FRAMER", "FRAMER"),
            FacetOption::new("AFTER EFFECTS", "AFTER EFFECTS"),
            FacetOption::new("BLENDER", "BLENDER"),
            FacetOption::new("HTML", "HTML"),
            FacetOption::new("CSS", "CSS"),
            FacetOption::new("JAVASCRIPT", "JAVASCRIPT"),
            FacetOption::new("SQL", "SQL"),
        ],
    );
    catalog.declare_facet(
        "lia_period",
        FacetDomain::EnumeratedString,
        FacetCardinality::Multi,
        vec![
            FacetOption::new("HÖST 2025", "HÖST 2025"),
            FacetOption::new("VÅR 2026", "VÅR 2026"),
        ],
    );
    catalog.declare_facet(
        "location",
        FacetDomain::EnumeratedString,
        FacetCardinality::Multi,
        vec![
            FacetOption::new("GÖTEBORG", "GÖTEBORG"),
            FacetOption::new("STOCKHOLM", "STOCKHOLM"),
            FacetOption::new("ANNAT", "ANNAT"),
        ],
    );
    catalog.declare_facet(
        "remote_options",
        FacetDomain::EnumeratedString,
        FacetCardinality::Multi,
        vec![
            FacetOption::new("ON SITE", "ON SITE"),
            FacetOption::new("HYBRID", "HYBRID"),
            FacetOption::new("REMOTE", "REMOTE"),
        ],
    );
    catalog
}

/// Facets of the company list page. The city column has inconsistent
/// formatting in the store, so it filters by substring rather than equality.
pub fn company_facet_catalog() -> FacetCatalog {
    let mut catalog = FacetCatalog::new();
    catalog.declare_facet(
        "city",
        FacetDomain::FreeTextSubstring,
        FacetCardinality::Multi,
        vec![
            FacetOption::new("Stockholm", "STOCKHOLM"),
            FacetOption::new("Göteborg", "GÖTEBORG"),
        ],
    );
    catalog.declare_facet(
        "location_status",
        FacetDomain::EnumeratedString,
        FacetCardinality::Multi,
        vec![
            FacetOption::new("On-site", "ON-SITE"),
            FacetOption::new("Hybrid", "HYBRID"),
            FacetOption::new("Remote", "REMOTE"),
        ],
    );
    catalog.declare_facet(
        "accepts_digital_designer",
        FacetDomain::Boolean,
        FacetCardinality::Single,
        vec![FacetOption::new(true, "Digital Designer")],
    );
    catalog.declare_facet(
        "accepts_webb_developer",
        FacetDomain::Boolean,
        FacetCardinality::Single,
        vec![FacetOption::new(true, "Webbutvecklare")],
    );
    catalog
}
