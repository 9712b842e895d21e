//! Route table for the site shell.

use clinic_core::query::{decode_component, encode_component};

/// Every page the site can render. Unknown paths resolve to `Home`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Procedures,
    ProcedureDetail { slug: String },
    Gallery,
    Blog,
    BlogPost { slug: String },
    Consultation,
    Contact,
    Testimonials,
}

/// `(label, path)` entries of the main navigation.
pub const NAV_LINKS: [(&str, &str); 6] = [
    ("Home", "/"),
    ("About", "/about"),
    ("Procedures", "/procedures"),
    ("Gallery", "/gallery"),
    ("Blog", "/blog"),
    ("Contact", "/contact"),
];

impl Route {
    /// Map a request path to a page. Slug segments are percent-decoded.
    pub fn resolve(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();
        match segments.as_slice() {
            ["about"] => Route::About,
            ["procedures"] => Route::Procedures,
            ["procedures", slug] if !slug.is_empty() => Route::ProcedureDetail {
                slug: decode_component(slug),
            },
            ["gallery"] => Route::Gallery,
            ["blog"] => Route::Blog,
            ["blog", slug] if !slug.is_empty() => Route::BlogPost {
                slug: decode_component(slug),
            },
            ["consultation"] => Route::Consultation,
            ["contact"] => Route::Contact,
            ["testimonials"] => Route::Testimonials,
            _ => Route::Home,
        }
    }

    /// URL path for this page, with the slug percent-encoded.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Procedures => "/procedures".to_string(),
            Route::ProcedureDetail { slug } => format!("/procedures/{}", encode_component(slug)),
            Route::Gallery => "/gallery".to_string(),
            Route::Blog => "/blog".to_string(),
            Route::BlogPost { slug } => format!("/blog/{}", encode_component(slug)),
            Route::Consultation => "/consultation".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Testimonials => "/testimonials".to_string(),
        }
    }

    /// Navigation entry to highlight while this route is shown.
    pub fn nav_path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Procedures | Route::ProcedureDetail { .. } => "/procedures",
            Route::Gallery => "/gallery",
            Route::Blog | Route::BlogPost { .. } => "/blog",
            Route::Contact => "/contact",
            Route::Consultation | Route::Testimonials => "",
        }
    }
}
