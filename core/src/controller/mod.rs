//! Per-page controllers. Each owns its view state; the data-backed ones
//! talk to the data service only through an injected `&dyn DataStore`.

pub mod detail;
pub mod gallery;
pub mod list;
pub mod search;
pub mod submit;

pub use detail::{DetailResolver, DetailState, DetailTicket, DetailView};
pub use gallery::{filter_gallery, GalleryCategory, GalleryItem, GALLERY_ITEMS};
pub use list::{ListController, ListState, ListView};
pub use search::{search, Searchable};
pub use submit::{ConsultationForm, Field, Notification, SubmissionController, SubmitTicket};
