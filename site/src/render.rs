//! HTML fragments. Every interpolated value goes through [`escape`].

use std::fmt::Write;

use clinic_core::controller::submit::PROCEDURE_INTERESTS;
use clinic_core::controller::{ConsultationForm, GalleryCategory, GalleryItem, Notification};
use clinic_core::links;
use clinic_core::{BlogPost, Procedure, Testimonial};

use crate::routes::{Route, NAV_LINKS};

/// Upper bound on drawn star glyphs; the aria label still reports the
/// stored rating.
pub const MAX_STAR_GLYPHS: usize = 5;

pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap `body` in the shared page chrome.
pub fn layout(route: &Route, title: &str, body: &str) -> String {
    let mut nav = String::new();
    for (label, path) in NAV_LINKS {
        let class = if path == route.nav_path() { " class=\"active\"" } else { "" };
        let _ = write!(nav, "<a href=\"{path}\"{class}>{label}</a>");
    }
    format!(
        "<!doctype html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>{title} | Dr. Donald Aesthetic Surgery</title></head><body>\
         <header><nav>{nav}<a href=\"/consultation\" class=\"cta\">Book Consultation</a></nav></header>\
         <main>{body}</main>\
         <footer><p>Dar es Salaam</p>\
         <p><a href=\"{tel}\">{phone}</a> &middot; <a href=\"{mailto}\">{email}</a></p></footer>\
         {whatsapp}</body></html>",
        title = escape(title),
        tel = links::tel_link(),
        phone = links::CLINIC_PHONE,
        mailto = links::mailto_link(),
        email = links::CLINIC_EMAIL,
        whatsapp = external_link(&links::whatsapp_link(), "Chat with us", "whatsapp-button"),
    )
}

/// Link opened in a new browsing context.
pub fn external_link(href: &str, label: &str, class: &str) -> String {
    format!(
        "<a href=\"{}\" class=\"{class}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        escape(href),
        escape(label)
    )
}

pub fn loading() -> String {
    "<div class=\"spinner\" role=\"status\">Loading&hellip;</div>".to_string()
}

pub fn empty_state(message: &str, escape_hatch: Option<(&str, &str)>) -> String {
    let mut out = format!("<div class=\"empty\"><p>{}</p>", escape(message));
    if let Some((href, label)) = escape_hatch {
        let _ = write!(out, "<a href=\"{}\">{}</a>", escape(href), escape(label));
    }
    out.push_str("</div>");
    out
}

pub fn not_found(heading: &str, back_href: &str, back_label: &str) -> String {
    format!(
        "<section class=\"not-found\"><h2>{}</h2><a href=\"{}\">{}</a></section>",
        escape(heading),
        escape(back_href),
        escape(back_label)
    )
}

pub fn procedure_card(procedure: &Procedure) -> String {
    let href = Route::ProcedureDetail {
        slug: procedure.slug.clone(),
    }
    .path();
    format!(
        "<a class=\"card\" href=\"{href}\"><img src=\"{img}\" alt=\"{title}\">\
         <h3>{title}</h3><p>{description}</p><span>Explore Procedure</span></a>",
        href = escape(&href),
        img = escape(procedure.image()),
        title = escape(&procedure.title),
        description = escape(&procedure.description),
    )
}

pub fn procedure_detail(procedure: &Procedure) -> String {
    let mut benefits = String::new();
    match procedure.benefits_fallback() {
        Some(fallback) => {
            let _ = write!(benefits, "<p>{}</p>", escape(fallback));
        }
        None => {
            benefits.push_str("<ul>");
            for benefit in procedure.benefit_list() {
                let _ = write!(benefits, "<li>{}</li>", escape(benefit));
            }
            benefits.push_str("</ul>");
        }
    }
    format!(
        "<article class=\"procedure\">\
         <a href=\"/procedures\">Back to Procedures</a>\
         <img src=\"{img}\" alt=\"{title}\"><h1>{title}</h1><p>{description}</p>\
         <section><h2>Who it's for</h2><p>{who}</p></section>\
         <section><h2>The Benefits</h2>{benefits}</section>\
         <section><h2>Recovery Timeline</h2><p>{recovery}</p></section>\
         <section><h2>Safety &amp; Risks</h2><p>{risks}</p></section>\
         <aside><h3>Start Your Transformation</h3>\
         <p>Schedule a private consultation with Dr. Donald to discuss if {title} is right for you.</p>\
         <a href=\"/consultation\">Book Consultation</a>{chat}</aside>\
         </article>",
        img = escape(procedure.image()),
        title = escape(&procedure.title),
        description = escape(&procedure.description),
        who = escape(procedure.who_its_for_text()),
        recovery = escape(procedure.recovery_text()),
        risks = escape(procedure.risks_text()),
        chat = external_link(&links::whatsapp_chat_link(), "Chat on WhatsApp", "chat"),
    )
}

pub fn blog_card(post: &BlogPost) -> String {
    let href = Route::BlogPost {
        slug: post.slug.clone(),
    }
    .path();
    format!(
        "<article class=\"card\"><a href=\"{href}\"><img src=\"{img}\" alt=\"{title}\"></a>\
         <span class=\"tag\">{category}</span><p class=\"meta\">{date} &middot; By {author}</p>\
         <a href=\"{href}\"><h3>{title}</h3></a><p>{content}</p>\
         <a href=\"{href}\">Read Full Article</a></article>",
        href = escape(&href),
        img = escape(&post.image_url),
        title = escape(&post.title),
        category = escape(&post.category),
        date = escape(&post.published_on()),
        author = escape(&post.author_name),
        content = escape(&post.content),
    )
}

pub fn blog_detail(post: &BlogPost) -> String {
    format!(
        "<article class=\"post\"><a href=\"/blog\">Back to Blog</a>\
         <span class=\"tag\">{category}</span><h1>{title}</h1>\
         <p class=\"meta\">{date} &middot; By {author}</p><div>{content}</div></article>",
        category = escape(&post.category),
        title = escape(&post.title),
        date = escape(&post.published_on()),
        author = escape(&post.author_name),
        content = escape(&post.content),
    )
}

pub fn testimonial_card(testimonial: &Testimonial) -> String {
    let initial = testimonial
        .initial()
        .map(|c| escape(&c.to_string()))
        .unwrap_or_default();
    format!(
        "<figure class=\"testimonial\"><div class=\"stars\" aria-label=\"{stars} stars\">{star_glyphs}</div>\
         <blockquote>&ldquo;{quote}&rdquo;</blockquote>\
         <figcaption><span class=\"initial\">{initial}</span>{name}<small>{procedure} Patient</small></figcaption></figure>",
        stars = testimonial.stars(),
        star_glyphs = "&#9733;".repeat(testimonial.stars().min(MAX_STAR_GLYPHS)),
        quote = escape(&testimonial.quote),
        name = escape(&testimonial.patient_name),
        procedure = escape(&testimonial.procedure),
    )
}

/// Category tabs followed by the items for the active tab.
pub fn gallery(active: GalleryCategory, items: &[&GalleryItem]) -> String {
    let mut out = String::from("<nav class=\"tabs\">");
    for category in GalleryCategory::TABS {
        let class = if category == active { " class=\"active\"" } else { "" };
        let _ = write!(
            out,
            "<a href=\"/gallery?category={}\"{class}>{}</a>",
            category.id(),
            escape(category.label())
        );
    }
    out.push_str("</nav>");
    out.push_str(&grid(items.iter().map(|item| {
        format!(
            "<figure class=\"gallery-item\"><img src=\"{img}\" alt=\"{title} before and after\">\
             <figcaption>{title}</figcaption></figure>",
            img = escape(item.image_url),
            title = escape(item.title),
        )
    })));
    out
}

pub fn grid(items: impl IntoIterator<Item = String>) -> String {
    let mut out = String::from("<div class=\"grid\">");
    for item in items {
        out.push_str(&item);
    }
    out.push_str("</div>");
    out
}

/// Consultation form with the visitor's current values and any outcome.
pub fn consultation_form(
    form: &ConsultationForm,
    notification: Option<Notification>,
    error: Option<&str>,
) -> String {
    let mut out = String::from("<section class=\"consultation\"><h1>Request a Consultation</h1>");
    match notification {
        Some(Notification::Success) => {
            let _ = write!(out, "<div class=\"toast success\" role=\"status\">{}</div>", escape(Notification::Success.message()));
        }
        Some(Notification::Failure) => {
            let _ = write!(out, "<div class=\"toast error\" role=\"alert\">{}</div>", escape(Notification::Failure.message()));
        }
        None => {}
    }
    if let Some(error) = error {
        let _ = write!(out, "<div class=\"toast error\" role=\"alert\">{}</div>", escape(error));
    }

    let mut options = String::from("<option value=\"\">Procedure of Interest</option>");
    for (value, label) in PROCEDURE_INTERESTS {
        let selected = if form.procedure == value { " selected" } else { "" };
        let _ = write!(options, "<option value=\"{value}\"{selected}>{label}</option>");
    }

    let _ = write!(
        out,
        "<form method=\"post\" action=\"/consultation\">\
         <input name=\"name\" placeholder=\"Full Name\" required value=\"{name}\">\
         <input name=\"email\" type=\"email\" placeholder=\"Email Address\" required value=\"{email}\">\
         <input name=\"phone\" type=\"tel\" placeholder=\"Phone Number\" required value=\"{phone}\">\
         <select name=\"procedure\" required>{options}</select>\
         <textarea name=\"message\" placeholder=\"Your Message (Optional)\">{message}</textarea>\
         <button type=\"submit\">Submit Request</button></form>\
         <aside><h2>Other Ways to Connect</h2>{chat}<a href=\"/contact\">View Office Location</a></aside></section>",
        name = escape(&form.name),
        email = escape(&form.email),
        phone = escape(&form.phone),
        message = escape(&form.message),
        chat = external_link(&links::whatsapp_chat_link(), "Start WhatsApp Chat", "chat"),
    );
    out
}
