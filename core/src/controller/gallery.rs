//! Before-and-after gallery: a fixed catalog filtered by category on the
//! client, like procedure search. No data service call is involved.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryCategory {
    All,
    Face,
    Body,
    Breast,
    Reconstructive,
}

impl GalleryCategory {
    /// Tab order.
    pub const TABS: [GalleryCategory; 5] = [
        GalleryCategory::All,
        GalleryCategory::Face,
        GalleryCategory::Body,
        GalleryCategory::Breast,
        GalleryCategory::Reconstructive,
    ];

    pub fn id(self) -> &'static str {
        match self {
            GalleryCategory::All => "all",
            GalleryCategory::Face => "face",
            GalleryCategory::Body => "body",
            GalleryCategory::Breast => "breast",
            GalleryCategory::Reconstructive => "reconstructive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GalleryCategory::All => "All Results",
            GalleryCategory::Face => "Facial",
            GalleryCategory::Body => "Body",
            GalleryCategory::Breast => "Breast",
            GalleryCategory::Reconstructive => "Reconstructive",
        }
    }

    /// Case-insensitive; blank or unknown ids select `All`.
    pub fn parse(id: &str) -> GalleryCategory {
        let id = id.trim();
        Self::TABS
            .into_iter()
            .find(|category| category.id().eq_ignore_ascii_case(id))
            .unwrap_or(GalleryCategory::All)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryItem {
    pub title: &'static str,
    pub category: GalleryCategory,
    pub image_url: &'static str,
}

pub const GALLERY_ITEMS: [GalleryItem; 6] = [
    GalleryItem {
        title: "Rhinoplasty",
        category: GalleryCategory::Face,
        image_url: "https://v3b.fal.media/files/b/0a8cb7d0/kLJ8UNLlgQu_KIMYbwM_I.png",
    },
    GalleryItem {
        title: "Liposuction",
        category: GalleryCategory::Body,
        image_url: "https://v3b.fal.media/files/b/0a8cb7d0/l4QatJy-HWyWe3xvikX26.png",
    },
    GalleryItem {
        title: "Breast Augmentation",
        category: GalleryCategory::Breast,
        image_url: "https://v3b.fal.media/files/b/0a8cb7d1/we1oRsj_X1jcpB5Xx2iXz.png",
    },
    GalleryItem {
        title: "Facelift",
        category: GalleryCategory::Face,
        image_url: "https://v3b.fal.media/files/b/0a8cb7d0/wNGpfl3f5ekHAcXAQT9ZF.png",
    },
    GalleryItem {
        title: "Tummy Tuck",
        category: GalleryCategory::Body,
        image_url: "https://v3b.fal.media/files/b/0a8cb7d0/l4QatJy-HWyWe3xvikX26.png",
    },
    GalleryItem {
        title: "Scar Revision",
        category: GalleryCategory::Reconstructive,
        image_url: "https://v3b.fal.media/files/b/0a8cb7d0/dr1DdIqCQIjm6yFWL8bkl.png",
    },
];

/// Catalog entries shown under `category`, in catalog order.
pub fn filter_gallery(category: GalleryCategory) -> Vec<&'static GalleryItem> {
    GALLERY_ITEMS
        .iter()
        .filter(|item| category == GalleryCategory::All || item.category == category)
        .collect()
}
