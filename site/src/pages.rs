//! Page handlers. Each builds the controller for its page, runs it against
//! the injected store, and renders the resulting view.

use axum::{
    extract::{Query, State},
    http::{Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Form,
};
use clinic_core::controller::{
    filter_gallery, search, ConsultationForm, DetailResolver, DetailView, GalleryCategory, ListController, ListView,
    SubmissionController,
};
use clinic_core::{BlogPost, Direction, ListOptions, Procedure, Testimonial};

use crate::render;
use crate::routes::Route;
use crate::AppState;

pub const NO_PROCEDURES: &str = "No procedures found matching your search.";
pub const NO_ARTICLES: &str = "No articles published yet. Check back soon!";
pub const NO_TESTIMONIALS: &str = "No patient stories yet.";

/// First value of `key` in the decoded query pairs; empty when absent.
/// Repeated keys never reject the request.
fn param<'a>(pairs: &'a [(String, String)], key: &str) -> &'a str {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .unwrap_or_default()
}

/// Serves every GET page; unknown paths render the home page.
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }
    let route = Route::resolve(uri.path());
    match &route {
        Route::Home => home(&route),
        Route::About => about(&route),
        Route::Procedures => procedures(&state, &route, param(&params, "q")).await,
        Route::ProcedureDetail { slug } => procedure_detail(&state, &route, slug).await,
        Route::Gallery => gallery(&route, GalleryCategory::parse(param(&params, "category"))),
        Route::Blog => blog(&state, &route).await,
        Route::BlogPost { slug } => blog_post(&state, &route, slug).await,
        Route::Consultation => consultation_page(&route, &ConsultationForm::default(), None, None),
        Route::Contact => contact(&route),
        Route::Testimonials => testimonials(&state, &route).await,
    }
}

fn page(route: &Route, title: &str, body: &str) -> Response {
    Html(render::layout(route, title, body)).into_response()
}

fn home(route: &Route) -> Response {
    const FEATURED: [(&str, &str, &str); 4] = [
        ("Rhinoplasty", "rhinoplasty", "Refining nasal aesthetics and improving breathing functionality."),
        ("Liposuction", "liposuction", "Precision body contouring to remove persistent fat deposits."),
        ("Facelift", "facelift", "Restoring youthful facial definition and reducing sagging skin."),
        (
            "Breast Augmentation",
            "breast-augmentation",
            "Enhancing volume and symmetry for a balanced, aesthetic silhouette.",
        ),
    ];
    let mut featured = String::new();
    for (title, slug, description) in FEATURED {
        featured.push_str(&format!(
            "<a class=\"card\" href=\"/procedures/{slug}\"><h4>{title}</h4><p>{description}</p><span>Learn More</span></a>"
        ));
    }
    let body = format!(
        "<section class=\"hero\"><h1>Natural Results, Expert Care</h1>\
         <p>Cosmetic and reconstructive surgery in Dar es Salaam.</p>\
         <a href=\"/consultation\">Book a Consultation</a></section>\
         <section><h2>Popular Procedures</h2><div class=\"grid\">{featured}</div>\
         <a href=\"/procedures\">View All Procedures</a></section>\
         <section><a href=\"/testimonials\">Read patient stories</a></section>"
    );
    page(route, "Home", &body)
}

fn about(route: &Route) -> Response {
    page(
        route,
        "About",
        "<section><h1>About Dr. Donald</h1>\
         <p>Board-certified plastic surgeon focused on natural-looking results and patient safety.</p>\
         <a href=\"/consultation\">Book a Consultation</a></section>",
    )
}

fn gallery(route: &Route, category: GalleryCategory) -> Response {
    let items = filter_gallery(category);
    let body = format!(
        "<section><h1>Before &amp; After Gallery</h1>\
         <p>Results shown with patient consent. Results vary per patient.</p>{}</section>",
        render::gallery(category, &items)
    );
    page(route, "Gallery", &body)
}

fn contact(route: &Route) -> Response {
    let body = format!(
        "<section><h1>Contact Us</h1><p>Msasani Peninsula, Dar es Salaam</p>\
         <p><a href=\"{tel}\">{phone}</a></p><p><a href=\"{mailto}\">{email}</a></p>\
         <p>Mon - Fri 9:00 AM - 6:00 PM &middot; Saturday 10:00 AM - 2:00 PM</p>{chat}</section>",
        tel = clinic_core::links::tel_link(),
        phone = clinic_core::links::CLINIC_PHONE,
        mailto = clinic_core::links::mailto_link(),
        email = clinic_core::links::CLINIC_EMAIL,
        chat = render::external_link(&clinic_core::links::whatsapp_chat_link(), "Chat on WhatsApp", "chat"),
    );
    page(route, "Contact", &body)
}

async fn procedures(state: &AppState, route: &Route, term: &str) -> Response {
    let mut controller: ListController<Procedure> = ListController::new(ListOptions::new());
    controller.load(state.store.as_ref()).await;

    let results = match controller.view() {
        ListView::Loading => render::loading(),
        ListView::Empty => render::empty_state(NO_PROCEDURES, Some(("/procedures", "Clear search"))),
        ListView::Items(items) => {
            let hits = search(items, term);
            if hits.is_empty() {
                render::empty_state(NO_PROCEDURES, Some(("/procedures", "Clear search")))
            } else {
                render::grid(hits.into_iter().map(render::procedure_card))
            }
        }
    };
    let body = format!(
        "<section><h1>Expert Procedures</h1>\
         <form method=\"get\" action=\"/procedures\"><input name=\"q\" placeholder=\"Search procedures...\" value=\"{term}\"></form>\
         {results}</section>",
        term = render::escape(term),
    );
    page(route, "Procedures", &body)
}

async fn procedure_detail(state: &AppState, route: &Route, slug: &str) -> Response {
    let mut resolver = DetailResolver::<Procedure>::new();
    resolver.resolve(state.store.as_ref(), slug).await;
    match resolver.view() {
        DetailView::Found(procedure) => page(route, &procedure.title, &render::procedure_detail(procedure)),
        DetailView::Loading => page(route, "Procedures", &render::loading()),
        DetailView::NotFound => (
            StatusCode::NOT_FOUND,
            page(
                route,
                "Procedure not found",
                &render::not_found("Procedure not found", "/procedures", "Back to all procedures"),
            ),
        )
            .into_response(),
    }
}

async fn blog(state: &AppState, route: &Route) -> Response {
    let mut controller: ListController<BlogPost> =
        ListController::new(ListOptions::new().order_by("created_at", Direction::Desc));
    controller.load(state.store.as_ref()).await;

    let posts = match controller.view() {
        ListView::Loading => render::loading(),
        ListView::Empty => render::empty_state(NO_ARTICLES, None),
        ListView::Items(items) => render::grid(items.iter().map(render::blog_card)),
    };
    let body = format!("<section><h1>Medical Insights &amp; Aesthetic Wisdom</h1>{posts}</section>");
    page(route, "Blog", &body)
}

async fn blog_post(state: &AppState, route: &Route, slug: &str) -> Response {
    let mut resolver = DetailResolver::<BlogPost>::new();
    resolver.resolve(state.store.as_ref(), slug).await;
    match resolver.view() {
        DetailView::Found(post) => page(route, &post.title, &render::blog_detail(post)),
        DetailView::Loading => page(route, "Blog", &render::loading()),
        DetailView::NotFound => (
            StatusCode::NOT_FOUND,
            page(
                route,
                "Article not found",
                &render::not_found("Article not found", "/blog", "Back to the blog"),
            ),
        )
            .into_response(),
    }
}

async fn testimonials(state: &AppState, route: &Route) -> Response {
    let mut controller: ListController<Testimonial> =
        ListController::new(ListOptions::new().order_by("created_at", Direction::Desc));
    controller.load(state.store.as_ref()).await;

    let stories = match controller.view() {
        ListView::Loading => render::loading(),
        ListView::Empty => render::empty_state(NO_TESTIMONIALS, None),
        ListView::Items(items) => render::grid(items.iter().map(render::testimonial_card)),
    };
    let body = format!("<section><h1>Real Stories, Real Results</h1>{stories}</section>");
    page(route, "Testimonials", &body)
}

fn consultation_page(
    route: &Route,
    form: &ConsultationForm,
    notification: Option<clinic_core::controller::Notification>,
    error: Option<&str>,
) -> Response {
    page(
        route,
        "Consultation",
        &render::consultation_form(form, notification, error),
    )
}

/// `POST /consultation`: one create per submit; values survive a failure.
pub async fn submit_consultation(State(state): State<AppState>, Form(form): Form<ConsultationForm>) -> Response {
    let route = Route::Consultation;
    let mut controller = SubmissionController::with_form(form);
    match controller.submit(state.store.as_ref()).await {
        Ok(notification) => consultation_page(&route, controller.form(), Some(notification), None),
        Err(err) => {
            tracing::debug!(error = %err, "consultation form rejected");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                consultation_page(&route, controller.form(), None, Some(&err.to_string())),
            )
                .into_response()
        }
    }
}
