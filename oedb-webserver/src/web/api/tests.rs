use super::*;

pub mod prelude {
    use crate::web::{self, api};

    pub use crate::web::tests::prelude::*;

    pub use oedb_core::repositories::{ListingRepo as _, ReviewRepo as _, UserRepo as _};
    pub use oedb_entities::{
        id::Id,
        time::Timestamp,
        user::{Role, User},
    };

    pub fn setup() -> (Client, sqlite::Connections, SharedMediaGw) {
        web::tests::setup(vec![("/", api::routes())])
    }

    pub fn test_json(r: &LocalResponse) {
        assert_eq!(
            r.headers().get("Content-Type").collect::<Vec<_>>()[0],
            "application/json"
        );
    }

    /// Provision an account straight in the store and return its
    /// bearer token.
    pub fn create_user(db: &sqlite::Connections, name: &str, role: Role) -> String {
        let user = User {
            id: Id::new(),
            name: name.into(),
            role,
            api_token: format!("{name}-token"),
            created_at: Timestamp::now(),
        };
        db.exclusive().unwrap().create_user(&user).unwrap();
        user.api_token
    }

    pub fn bearer(token: &str) -> Header<'static> {
        Header::new("Authorization", format!("Bearer {token}"))
    }
}

use self::prelude::*;

fn submit_listing(client: &Client, token: &str, name: &str) -> json::Listing {
    let body = format!(
        r#"{{"name":"{name}","description":"Dim sum and congee","address":"Rua do Comercio 12","cuisines":["cantonese"]}}"#
    );
    let response = client
        .post("/listings")
        .header(ContentType::JSON)
        .header(bearer(token))
        .body(body)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    serde_json::from_str(&response.into_string().unwrap()).unwrap()
}

fn approve_listing(client: &Client, admin_token: &str, id: &str) {
    let response = client
        .post(format!("/listings/{id}/moderation"))
        .header(ContentType::JSON)
        .header(bearer(admin_token))
        .body(r#"{"status":"approved","comment":"checked"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
}

fn create_approved_listing(
    client: &Client,
    db: &sqlite::Connections,
    name: &str,
) -> json::Listing {
    let admin = create_user(db, &format!("admin-of-{name}"), Role::Admin);
    let listing = submit_listing(client, &admin, name);
    approve_listing(client, &admin, &listing.id);
    listing
}

#[test]
fn get_version() {
    let (client, _, _) = setup();
    let response = client.get("/version").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.into_string().unwrap(), DUMMY_VERSION);
}

#[test]
fn anonymous_submission_is_rejected() {
    let (client, db, _) = setup();
    let response = client
        .post("/listings")
        .header(ContentType::JSON)
        .body(r#"{"name":"Golden Wok","description":"x","address":"y"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Unauthorized);
    assert!(db.shared().unwrap().all_listings().unwrap().is_empty());
}

#[test]
fn submitted_listing_stays_hidden_until_approved() {
    let (client, db, _) = setup();
    let admin = create_user(&db, "root", Role::Admin);
    let user = create_user(&db, "alice", Role::User);

    let listing = submit_listing(&client, &user, "Golden Wok");
    assert_eq!(json::ModerationStatus::Pending, listing.status);

    // Not in the public page, id answers 404 to strangers
    let response = client.get("/listings").dispatch();
    assert_eq!(response.status(), Status::Ok);
    test_json(&response);
    let page: Vec<json::Listing> =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert!(page.is_empty());
    let response = client.get(format!("/listings/{}", listing.id)).dispatch();
    assert_eq!(response.status(), Status::NotFound);

    // The submitter still sees the pending record
    let response = client
        .get(format!("/listings/{}", listing.id))
        .header(bearer(&user))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    approve_listing(&client, &admin, &listing.id);
    let response = client.get("/listings").dispatch();
    let page: Vec<json::Listing> =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(1, page.len());
    assert_eq!(json::ModerationStatus::Approved, page[0].status);

    let response = client.get("/listings/count").dispatch();
    let count: json::ResultCount =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(1, count.count);
}

#[test]
fn localized_projection_resolves_mirrors_and_falls_back() {
    let (client, db, _) = setup();
    let listing = create_approved_listing(&client, &db, "Golden Wok");

    let response = client
        .get(format!("/listings/{}?lang=zh", listing.id))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let localized: json::LocalizedListing =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    // No Chinese name mirror: canonical fallback
    assert_eq!("Golden Wok", localized.name);
    // The cuisine mirror was derived from the catalog on submission
    assert_eq!(vec!["粤菜".to_string()], localized.cuisines);

    let response = client
        .get(format!("/listings/{}?lang=klingon", listing.id))
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
}

#[test]
fn moderation_requires_an_admin() {
    let (client, db, _) = setup();
    let user = create_user(&db, "alice", Role::User);
    let listing = submit_listing(&client, &user, "Golden Wok");

    let response = client
        .post(format!("/listings/{}/moderation", listing.id))
        .header(ContentType::JSON)
        .header(bearer(&user))
        .body(r#"{"status":"approved","comment":null}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Forbidden);

    let queue = client.get("/reports").header(bearer(&user)).dispatch();
    assert_eq!(queue.status(), Status::Forbidden);
}

#[test]
fn invalid_status_filter_is_a_bad_request() {
    let (client, _, _) = setup();
    let response = client.get("/listings?status=archived").dispatch();
    assert_eq!(response.status(), Status::BadRequest);
}

#[test]
fn approved_report_is_merged_and_stays_closed() {
    let (client, db, _) = setup();
    let admin = create_user(&db, "root", Role::Admin);
    let listing = create_approved_listing(&client, &db, "Golden Wok");

    // Anonymous visitors may file correction reports
    let response = client
        .post("/reports")
        .header(ContentType::JSON)
        .body(format!(
            r#"{{"listing_id":"{}","field":"pet_policy","suggested_value":"Dogs welcome","reason":"Sign at the door"}}"#,
            listing.id
        ))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let report: json::CorrectionReport =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(json::ModerationStatus::Pending, report.status);

    let moderate = || {
        client
            .post(format!("/reports/{}/moderation", report.id))
            .header(ContentType::JSON)
            .header(bearer(&admin))
            .body(r#"{"status":"approved","comment":"checked on site"}"#)
            .dispatch()
    };
    let response = moderate();
    assert_eq!(response.status(), Status::Ok);
    let closed: json::CorrectionReport =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(json::ModerationStatus::Approved, closed.status);

    let response = client
        .get(format!("/listings/{}/record", listing.id))
        .header(bearer(&admin))
        .dispatch();
    let record: json::Listing =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(Some("Dogs welcome".into()), record.pet_policy);

    // Terminal reports cannot be decided twice
    let response = moderate();
    assert_eq!(response.status(), Status::Conflict);
}

#[test]
fn review_lifecycle_with_images_and_visibility() {
    let (client, db, media) = setup();
    let admin = create_user(&db, "root", Role::Admin);
    let listing = create_approved_listing(&client, &db, "Golden Wok");
    let alice = create_user(&db, "alice", Role::User);
    let bob = create_user(&db, "bob", Role::User);

    // Out-of-range ratings are rejected before anything happens
    for rating in [0, 6] {
        let response = client
            .post(format!("/listings/{}/reviews", listing.id))
            .header(ContentType::JSON)
            .header(bearer(&alice))
            .body(format!(r#"{{"rating":{rating},"comment":null}}"#))
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);
        assert!(media.stored_urls().is_empty());
    }

    let response = client
        .post(format!("/listings/{}/reviews", listing.id))
        .header(ContentType::JSON)
        .header(bearer(&alice))
        .body(r#"{"rating":4,"comment":"Great dumplings","images":[{"file_name":"bowl.jpg","data":"/9j/2w=="}]}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let review: json::Review =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(1, review.images.len());
    assert_eq!(review.image_url.as_deref(), review.images.first().map(String::as_str));

    // One review per account and listing
    let response = client
        .post(format!("/listings/{}/reviews", listing.id))
        .header(ContentType::JSON)
        .header(bearer(&alice))
        .body(r#"{"rating":5,"comment":null}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Conflict);

    // The rating shows up in the localized projection
    let response = client.get(format!("/listings/{}", listing.id)).dispatch();
    let localized: json::LocalizedListing =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    let rating = localized.rating.unwrap();
    assert_eq!(1, rating.review_count);
    assert_eq!(4.0, f64::from(rating.avg_rating));

    // Hide it: gone for strangers, still there for the author
    let response = client
        .post(format!("/reviews/{}/visibility", review.id))
        .header(ContentType::JSON)
        .header(bearer(&admin))
        .body(r#"{"hidden":true,"comment":"spam"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let hidden: json::Review =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert!(hidden.is_hidden);
    assert_eq!(Some("spam".into()), hidden.admin_comment);

    let fetch_reviews = |token: Option<&str>| {
        let mut request = client.get(format!("/listings/{}/reviews", listing.id));
        if let Some(token) = token {
            request = request.header(bearer(token));
        }
        let response = request.dispatch();
        assert_eq!(response.status(), Status::Ok);
        serde_json::from_str::<Vec<json::Review>>(&response.into_string().unwrap()).unwrap()
    };
    assert!(fetch_reviews(None).is_empty());
    assert!(fetch_reviews(Some(&bob)).is_empty());
    assert_eq!(1, fetch_reviews(Some(&alice)).len());
    assert_eq!(1, fetch_reviews(Some(&admin)).len());

    // Hidden reviews no longer count towards the rating
    let response = client.get(format!("/listings/{}", listing.id)).dispatch();
    let localized: json::LocalizedListing =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert!(localized.rating.is_none());
}

#[test]
fn only_the_author_deletes_a_review() {
    let (client, db, _) = setup();
    let listing = create_approved_listing(&client, &db, "Golden Wok");
    let alice = create_user(&db, "alice", Role::User);
    let mallory = create_user(&db, "mallory", Role::User);

    let response = client
        .post(format!("/listings/{}/reviews", listing.id))
        .header(ContentType::JSON)
        .header(bearer(&alice))
        .body(r#"{"rating":3,"comment":null}"#)
        .dispatch();
    let review: json::Review =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();

    let response = client
        .delete(format!("/reviews/{}", review.id))
        .header(bearer(&mallory))
        .dispatch();
    assert_eq!(response.status(), Status::Forbidden);

    let response = client
        .delete(format!("/reviews/{}", review.id))
        .header(bearer(&alice))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert!(db
        .shared()
        .unwrap()
        .reviews_of_listing(&listing.id)
        .unwrap()
        .is_empty());
}

#[test]
fn toggle_favorites() {
    let (client, db, _) = setup();
    let listing = create_approved_listing(&client, &db, "Golden Wok");
    let alice = create_user(&db, "alice", Role::User);

    let toggle = || {
        let response = client
            .post("/favorites/toggle")
            .header(ContentType::JSON)
            .header(bearer(&alice))
            .body(format!(r#"{{"listing_id":"{}"}}"#, listing.id))
            .dispatch();
        assert_eq!(response.status(), Status::Ok);
        serde_json::from_str::<json::FavoriteToggled>(&response.into_string().unwrap()).unwrap()
    };
    assert!(toggle().favorited);

    let response = client.get("/favorites").header(bearer(&alice)).dispatch();
    let favorites: Vec<String> =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(vec![listing.id.clone()], favorites);

    assert!(!toggle().favorited);
    let response = client.get("/favorites").header(bearer(&alice)).dispatch();
    let favorites: Vec<String> =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert!(favorites.is_empty());

    // Favorites require an account
    let response = client.get("/favorites").dispatch();
    assert_eq!(response.status(), Status::Unauthorized);
}

#[test]
fn provisioned_user_authenticates_with_the_minted_token() {
    let (client, db, _) = setup();
    let admin = create_user(&db, "root", Role::Admin);

    let response = client
        .post("/users")
        .header(ContentType::JSON)
        .header(bearer(&admin))
        .body(r#"{"name":"moderator-pt","role":"user"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let created: json::UserWithToken =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();

    let response = client
        .get("/users/current")
        .header(bearer(&created.api_token))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let current: json::User =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(created.id, current.id);
    assert_eq!("moderator-pt", current.name);

    // Unknown tokens are rejected, not treated as anonymous
    let response = client
        .get("/users/current")
        .header(bearer("no-such-token"))
        .dispatch();
    assert_eq!(response.status(), Status::Unauthorized);

    // Provisioning is admin-only
    let response = client
        .post("/users")
        .header(ContentType::JSON)
        .header(bearer(&created.api_token))
        .body(r#"{"name":"eve","role":"admin"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Forbidden);
}

#[test]
fn sweep_reclaims_files_of_an_aborted_submission() {
    let (client, db, media) = setup();
    let admin = create_user(&db, "root", Role::Admin);
    let listing = create_approved_listing(&client, &db, "Golden Wok");
    let alice = create_user(&db, "alice", Role::User);

    // The second upload fails, the first file stays behind
    *media.fail_after.lock() = Some(1);
    let response = client
        .post(format!("/listings/{}/reviews", listing.id))
        .header(ContentType::JSON)
        .header(bearer(&alice))
        .body(r#"{"rating":4,"comment":null,"images":[{"file_name":"a.jpg","data":"/9j/2w=="},{"file_name":"b.jpg","data":"/9j/2w=="}]}"#)
        .dispatch();
    assert_eq!(response.status(), Status::InternalServerError);
    assert!(db
        .shared()
        .unwrap()
        .reviews_of_listing(&listing.id)
        .unwrap()
        .is_empty());
    assert_eq!(1, media.stored_urls().len());
    *media.fail_after.lock() = None;

    // Sweeping is admin-only
    let response = client
        .post("/media/sweep")
        .header(bearer(&alice))
        .dispatch();
    assert_eq!(response.status(), Status::Forbidden);

    let response = client
        .post("/media/sweep")
        .header(bearer(&admin))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let summary: json::SweepSummary =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(1, summary.examined);
    assert_eq!(1, summary.deleted);
    assert!(media.stored_urls().is_empty());
}
