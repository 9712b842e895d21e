//! Demo catalog served when the mock runs standalone.

use serde_json::{json, Value};

pub fn demo_records() -> Vec<(&'static str, Value)> {
    vec![
        (
            "procedures",
            json!({
                "id": "proc-rhinoplasty",
                "title": "Rhinoplasty",
                "slug": "rhinoplasty",
                "description": "Refining nasal aesthetics and improving breathing functionality.",
                "who_its_for": "Adults unhappy with the shape of their nose or with breathing difficulties.",
                "benefits": "Facial harmony, Improved breathing, Natural-looking results",
                "recovery_timeline": "Splint removed after one week; most swelling settles within three months.",
                "risks": "Bleeding, infection, and the possibility of revision surgery.",
                "image_url": "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?auto=format&fit=crop&q=80&w=800",
                "category": "Face"
            }),
        ),
        (
            "procedures",
            json!({
                "id": "proc-liposuction",
                "title": "Liposuction",
                "slug": "liposuction",
                "description": "Precision body contouring to remove persistent fat deposits.",
                "who_its_for": "Healthy adults near their ideal weight with stubborn fat pockets.",
                "benefits": "Sculpted contours, Permanent fat cell removal",
                "recovery_timeline": "Compression garment for four to six weeks.",
                "risks": "",
                "image_url": "https://images.unsplash.com/photo-1598449356475-b9f71db7d847?auto=format&fit=crop&q=80&w=800",
                "category": "Body"
            }),
        ),
        (
            "procedures",
            json!({
                "id": "proc-facelift",
                "title": "Facelift",
                "slug": "facelift",
                "description": "Restoring youthful facial definition and reducing sagging skin.",
                "benefits": "",
                "image_url": "https://images.unsplash.com/photo-1512290923902-8a9f81dc2069?auto=format&fit=crop&q=80&w=800",
                "category": "Face"
            }),
        ),
        (
            "procedures",
            json!({
                "id": "proc-breast-augmentation",
                "title": "Breast Augmentation",
                "slug": "breast-augmentation",
                "description": "Enhancing volume and symmetry for a balanced, aesthetic silhouette.",
                "benefits": "Balanced proportions, Restored volume",
                "image_url": "https://images.unsplash.com/photo-1584622650111-993a426fbf0a?auto=format&fit=crop&q=80&w=800",
                "category": "Body"
            }),
        ),
        (
            "blog_posts",
            json!({
                "id": "post-preparing",
                "title": "Preparing for Your First Consultation",
                "slug": "preparing-for-your-first-consultation",
                "content": "Bring a list of medications, photos of results you like, and your questions.",
                "category": "Patient Guide",
                "author_name": "Dr. Donald",
                "image_url": "https://images.unsplash.com/photo-1576091160550-2173dba999ef?auto=format&fit=crop&q=80&w=800",
                "created_at": "2024-02-12T09:00:00Z"
            }),
        ),
        (
            "blog_posts",
            json!({
                "id": "post-recovery",
                "title": "Five Rules for a Smooth Recovery",
                "slug": "five-rules-for-a-smooth-recovery",
                "content": "Rest, hydrate, follow your compression schedule, avoid smoking, and attend every follow-up.",
                "category": "Recovery",
                "author_name": "Dr. Donald",
                "image_url": "https://images.unsplash.com/photo-1505751172876-fa1923c5c528?auto=format&fit=crop&q=80&w=800",
                "created_at": "2024-05-03T09:00:00Z"
            }),
        ),
        (
            "testimonials",
            json!({
                "id": "t-amina",
                "patient_name": "Amina",
                "quote": "I finally breathe properly and love my profile.",
                "rating": 5,
                "procedure": "Rhinoplasty",
                "created_at": "2024-03-20T12:00:00Z"
            }),
        ),
        (
            "testimonials",
            json!({
                "id": "t-grace",
                "patient_name": "Grace",
                "quote": "Professional, caring and honest from the first visit.",
                "rating": 5,
                "procedure": "Liposuction",
                "created_at": "2024-06-11T12:00:00Z"
            }),
        ),
    ]
}
