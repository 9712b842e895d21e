//! Record types held by the hosted data service.
//!
//! # Design
//! These types mirror the service's schema but are defined independently of
//! the mock-server crate; integration tests catch any drift between the two.
//! Procedure text fields are optional on the service side and default to
//! empty here, with display fallbacks supplied by accessor methods.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::query::Collection;

const DEFAULT_WHO_ITS_FOR: &str =
    "Contact us for more information on candidacy for this procedure.";
const DEFAULT_BENEFITS: &str = "Improved confidence and aesthetic harmony.";
const DEFAULT_RECOVERY: &str = "Consult with Dr. Donald for a personalized recovery plan.";
const DEFAULT_RISKS: &str = "All surgical procedures carry some degree of risk. These will be discussed in detail during your consultation.";
const DEFAULT_PROCEDURE_IMAGE: &str =
    "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?auto=format&fit=crop&q=80&w=1600";

/// A record kind read from one collection.
pub trait Record: DeserializeOwned + Clone + Send + Sync + 'static {
    const COLLECTION: Collection;
}

/// Records addressable by a URL slug.
pub trait Slugged: Record {
    fn slug(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Procedure {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    #[serde(default)]
    pub who_its_for: String,
    /// Comma-joined list; see [`Procedure::benefit_list`].
    #[serde(default)]
    pub benefits: String,
    #[serde(default)]
    pub recovery_timeline: String,
    #[serde(default)]
    pub risks: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub category: String,
}

impl Procedure {
    pub fn benefit_list(&self) -> Vec<&str> {
        self.benefits
            .split(',')
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .collect()
    }

    pub fn who_its_for_text(&self) -> &str {
        or_default(&self.who_its_for, DEFAULT_WHO_ITS_FOR)
    }

    /// Shown in place of the benefit list when there is none.
    pub fn benefits_fallback(&self) -> Option<&'static str> {
        self.benefit_list().is_empty().then_some(DEFAULT_BENEFITS)
    }

    pub fn recovery_text(&self) -> &str {
        or_default(&self.recovery_timeline, DEFAULT_RECOVERY)
    }

    pub fn risks_text(&self) -> &str {
        or_default(&self.risks, DEFAULT_RISKS)
    }

    pub fn image(&self) -> &str {
        or_default(&self.image_url, DEFAULT_PROCEDURE_IMAGE)
    }
}

impl Record for Procedure {
    const COLLECTION: Collection = Collection::Procedures;
}

impl Slugged for Procedure {
    fn slug(&self) -> &str {
        &self.slug
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(default)]
    pub category: String,
    pub author_name: String,
    #[serde(default)]
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

impl BlogPost {
    /// Publication date as shown on cards, e.g. `March 4, 2024`.
    pub fn published_on(&self) -> String {
        self.created_at.format("%B %-d, %Y").to_string()
    }
}

impl Record for BlogPost {
    const COLLECTION: Collection = Collection::BlogPosts;
}

impl Slugged for BlogPost {
    fn slug(&self) -> &str {
        &self.slug
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Testimonial {
    pub id: String,
    pub patient_name: String,
    pub quote: String,
    /// Expected in 1..=5 but not validated.
    pub rating: i32,
    pub procedure: String,
    pub created_at: DateTime<Utc>,
}

impl Testimonial {
    pub fn initial(&self) -> Option<char> {
        self.patient_name.chars().next()
    }

    /// Number of stars to draw. The rating is trusted as stored; only
    /// negative values are floored to zero.
    pub fn stars(&self) -> usize {
        usize::try_from(self.rating).unwrap_or(0)
    }
}

impl Record for Testimonial {
    const COLLECTION: Collection = Collection::Testimonials;
}

/// Lifecycle state of a consultation request. Only the initial state is
/// ever written here; later transitions belong to the clinic's back office.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConsultationStatus {
    Pending,
}

/// Payload written to the `consultations` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsultationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub procedure: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub status: ConsultationStatus,
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn procedure() -> Procedure {
        Procedure {
            id: "p1".to_string(),
            title: "Liposuction".to_string(),
            slug: "liposuction".to_string(),
            description: "Body contouring".to_string(),
            who_its_for: String::new(),
            benefits: " Slimmer profile, ,Lasting results ".to_string(),
            recovery_timeline: "Two weeks".to_string(),
            risks: "  ".to_string(),
            image_url: String::new(),
            category: "Body".to_string(),
        }
    }

    #[test]
    fn benefit_list_splits_trims_and_drops_blanks() {
        assert_eq!(procedure().benefit_list(), ["Slimmer profile", "Lasting results"]);
        assert_eq!(procedure().benefits_fallback(), None);
    }

    #[test]
    fn empty_benefits_use_fallback_copy() {
        let p = Procedure {
            benefits: String::new(),
            ..procedure()
        };
        assert!(p.benefit_list().is_empty());
        assert_eq!(p.benefits_fallback(), Some(DEFAULT_BENEFITS));
    }

    #[test]
    fn blank_text_fields_fall_back() {
        let p = procedure();
        assert_eq!(p.who_its_for_text(), DEFAULT_WHO_ITS_FOR);
        assert_eq!(p.recovery_text(), "Two weeks");
        assert_eq!(p.risks_text(), DEFAULT_RISKS);
        assert_eq!(p.image(), DEFAULT_PROCEDURE_IMAGE);
    }

    #[test]
    fn procedure_missing_optional_fields_deserializes() {
        let p: Procedure = serde_json::from_str(
            r#"{"id":"1","title":"Facelift","slug":"facelift","description":"Lift"}"#,
        )
        .unwrap();
        assert_eq!(p.slug, "facelift");
        assert!(p.benefits.is_empty());
        assert!(p.category.is_empty());
    }

    #[test]
    fn testimonial_stars_trust_rating_but_floor_negatives() {
        let mut t = Testimonial {
            id: "t1".to_string(),
            patient_name: "Amina".to_string(),
            quote: "Wonderful care".to_string(),
            rating: 5,
            procedure: "Rhinoplasty".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
        };
        assert_eq!(t.stars(), 5);
        assert_eq!(t.initial(), Some('A'));
        t.rating = 7;
        assert_eq!(t.stars(), 7);
        t.rating = -2;
        assert_eq!(t.stars(), 0);
    }

    #[test]
    fn blog_post_formats_publication_date() {
        let post: BlogPost = serde_json::from_str(
            r#"{"id":"b1","title":"Recovery tips","slug":"recovery-tips","content":"...",
                "author_name":"Dr. Donald","created_at":"2024-03-04T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(post.published_on(), "March 4, 2024");
    }

    #[test]
    fn consultation_request_uses_service_field_names() {
        let request = ConsultationRequest {
            name: "Neema".to_string(),
            email: "neema@example.com".to_string(),
            phone: "+255700000000".to_string(),
            procedure: "facelift".to_string(),
            message: None,
            user_id: "system".to_string(),
            status: ConsultationStatus::Pending,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["userId"], "system");
        assert_eq!(json["status"], "pending");
        assert!(json.get("message").is_none());
        assert!(json.get("user_id").is_none());
    }
}
