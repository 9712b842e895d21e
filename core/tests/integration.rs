//! End-to-end flows against the live mock data service.
//!
//! # Design
//! Starts the mock service on a random port, then drives the controllers
//! through `HttpStore<UreqTransport>` over real HTTP. Validates that request
//! building, the wire protocol, and record decoding agree with the service.

use clinic_core::controller::{
    search, ConsultationForm, DetailResolver, DetailView, ListController, ListView, Notification,
    SubmissionController,
};
use clinic_core::{
    list_records, ApiError, BlogPost, Collection, DataStore, Direction, HttpStore, ListOptions,
    Procedure, Testimonial,
};
use mock_server::ServiceRouter;
use serde_json::json;

/// Start `app` on a random port and return its base URL.
fn start(app: ServiceRouter) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, app).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn seeded() -> HttpStore {
    HttpStore::new(&start(mock_server::app_with(mock_server::seed::demo_records())))
}

#[tokio::test]
async fn procedures_list_and_search() {
    let store = seeded();
    let mut controller: ListController<Procedure> = ListController::new(ListOptions::new());
    controller.load(&store).await;

    assert!(matches!(controller.view(), ListView::Items(items) if items.len() == 4));
    let hits = search(controller.records(), "lip");
    let titles: Vec<_> = hits.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Liposuction"]);
}

#[tokio::test]
async fn blog_and_testimonials_come_newest_first() {
    let store = seeded();
    let newest_first = ListOptions::new().order_by("created_at", Direction::Desc);

    let posts: Vec<BlogPost> = list_records(&store, &newest_first).await.unwrap();
    assert_eq!(posts[0].slug, "five-rules-for-a-smooth-recovery");
    assert!(posts[0].created_at > posts[1].created_at);

    let testimonials: Vec<Testimonial> = list_records(&store, &newest_first).await.unwrap();
    assert_eq!(testimonials[0].patient_name, "Grace");
}

#[tokio::test]
async fn detail_resolves_and_falls_back_to_not_found() {
    let store = seeded();

    let mut resolver = DetailResolver::<Procedure>::new();
    resolver.resolve(&store, "facelift").await;
    let facelift = resolver.record().unwrap();
    assert_eq!(facelift.title, "Facelift");
    assert!(facelift.benefits_fallback().is_some());

    resolver.resolve(&store, "no-such-procedure").await;
    assert_eq!(resolver.view(), DetailView::NotFound);
}

#[tokio::test]
async fn empty_blog_shows_empty_state() {
    let store = HttpStore::new(&start(mock_server::app()));
    let mut controller: ListController<BlogPost> =
        ListController::new(ListOptions::new().order_by("created_at", Direction::Desc));
    controller.load(&store).await;
    assert_eq!(controller.view(), ListView::Empty);
}

#[tokio::test]
async fn consultation_submit_round_trip() {
    let store = HttpStore::new(&start(mock_server::app()));
    let mut controller = SubmissionController::with_form(ConsultationForm {
        name: "Neema Mushi".to_string(),
        email: "neema@example.com".to_string(),
        phone: "+255700000000".to_string(),
        procedure: "tummy-tuck".to_string(),
        message: "Weekend appointment if possible".to_string(),
    });

    assert_eq!(controller.submit(&store).await.unwrap(), Notification::Success);
    assert!(controller.form().is_empty());

    let stored = store
        .list(
            Collection::Consultations,
            &ListOptions::new().filter_eq("email", "neema@example.com"),
        )
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["status"], "pending");
    assert_eq!(stored[0]["userId"], "system");
    assert_eq!(stored[0]["procedure"], "tummy-tuck");
}

#[tokio::test]
async fn service_rejects_writes_to_read_only_collections() {
    let store = HttpStore::new(&start(mock_server::app()));
    let err = store
        .client()
        .build_create(Collection::Testimonials, &json!({}))
        .unwrap_err();
    assert!(matches!(err, ApiError::ReadOnlyCollection(_)));
}

#[tokio::test]
async fn unreachable_service_degrades_without_panicking() {
    // Bind then drop to get a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let store = HttpStore::new(&format!("http://{addr}"));

    let mut controller: ListController<Testimonial> = ListController::new(ListOptions::new());
    controller.load(&store).await;
    assert_eq!(controller.view(), ListView::Empty);

    let mut submit = SubmissionController::with_form(ConsultationForm {
        name: "Neema".to_string(),
        email: "neema@example.com".to_string(),
        phone: "+255700000000".to_string(),
        procedure: "other".to_string(),
        message: String::new(),
    });
    assert_eq!(submit.submit(&store).await.unwrap(), Notification::Failure);
    assert_eq!(submit.form().name, "Neema");
}
