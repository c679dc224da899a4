use std::sync::Arc;

use bigdecimal::BigDecimal;
use serde_json::json;
use studia_admin::AdminClient;
use studia_admin::model::{
    DiscussionStatus, Faculty, NewBook, NewDiscussion, NewFaculty, NewStudent, OrderStatus,
    PaymentStatus, RecordRef, UpdateBook,
};
use studia_http::{HttpClientConfig, MemoryStorage};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(uri: &str) -> AdminClient {
    let storage = Arc::new(MemoryStorage::new());
    let config = HttpClientConfig::new(uri).expect("valid base url");
    AdminClient::new(config, storage).expect("client build")
}

fn book_json(id: i64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "author": "Grace Hopper",
        "category": "Computing",
        "price": "25.50",
        "stock": 4
    })
}

#[tokio::test]
async fn test_book_list_accepts_bare_array() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "OK",
            "data": [book_json(1, "Compilers"), book_json(2, "Databases")]
        })))
        .mount(&server)
        .await;

    let response = client_for(&server.uri()).books().list().await;
    assert!(response.is_success());

    let books = response.data.expect("book list");
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].title, "Compilers");
}

#[tokio::test]
async fn test_book_list_accepts_wrapped_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "OK",
            "data": {
                "data": [book_json(7, "Networks")],
                "total": 42
            }
        })))
        .mount(&server)
        .await;

    let response = client_for(&server.uri()).books().list().await;
    let books = response.data.expect("book list");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, 7);
}

#[tokio::test]
async fn test_book_create_sends_draft_body() {
    let server = MockServer::start().await;

    let draft = NewBook {
        title: "Compilers".to_owned(),
        author_id: Some(3),
        category_id: None,
        price: BigDecimal::from(120),
        stock: 5,
        description: None,
    };

    Mock::given(method("POST"))
        .and(path("/admin/books"))
        .and(body_json(json!({
            "title": "Compilers",
            "author_id": 3,
            "category_id": null,
            "price": "120",
            "stock": 5
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "status": true,
            "message": "Book created",
            "data": book_json(9, "Compilers")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server.uri()).books().create(&draft).await;
    assert!(response.is_success());
    assert_eq!(response.data.map(|book| book.id), Some(9));

    server.verify().await;
}

#[tokio::test]
async fn test_book_update_omits_unset_fields() {
    let server = MockServer::start().await;

    let changes = UpdateBook {
        price: Some(BigDecimal::from(99)),
        ..UpdateBook::default()
    };

    Mock::given(method("PUT"))
        .and(path("/admin/books/9"))
        .and(body_json(json!({ "price": "99" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Book updated",
            "data": book_json(9, "Compilers")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server.uri()).books().update(9, &changes).await;
    assert!(response.is_success());

    server.verify().await;
}

#[tokio::test]
async fn test_book_delete_hits_resource_path() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/admin/books/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Book deleted"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server.uri()).books().delete(9).await;
    assert!(response.is_success());
    assert_eq!(response.message, "Book deleted");

    server.verify().await;
}

#[tokio::test]
async fn test_book_cover_upload_is_multipart() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/books/9/cover"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Cover updated",
            "data": book_json(9, "Compilers")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server.uri())
        .books()
        .upload_cover(9, "cover.png", "image/png", b"fake-png-bytes".to_vec())
        .await;
    assert!(response.is_success());

    let requests = server.received_requests().await.expect("recorded requests");
    let upload = &requests[0];
    let content_type = upload
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("multipart/form-data"),
        "unexpected content type: {content_type}"
    );

    let body = String::from_utf8_lossy(&upload.body);
    assert!(body.contains("fake-png-bytes"));
    assert!(body.contains("cover.png"));
}

#[tokio::test]
async fn test_book_cover_upload_rejects_bad_mime_locally() {
    // No server: an invalid MIME type never leaves the process.
    let client = client_for("http://127.0.0.1:9");

    let response = client
        .books()
        .upload_cover(9, "cover.png", "not a mime", Vec::new())
        .await;

    assert!(!response.is_success());
    assert!(response.message.contains("not a mime"));
}

#[tokio::test]
async fn test_discussion_create_references_records_by_id_or_name() {
    let server = MockServer::start().await;

    let draft = NewDiscussion {
        title: "Limits and continuity".to_owned(),
        faculty: RecordRef::existing(1),
        department: RecordRef::existing(2),
        subject: RecordRef::named("Algebra"),
        topic: Some(RecordRef::named("Functions")),
        subtopic: None,
        tutor_id: 4,
        venue_id: 5,
        starts_at: "2026-09-01T09:00:00Z".parse().unwrap(),
        ends_at: "2026-09-01T11:00:00Z".parse().unwrap(),
        capacity: 30,
    };

    Mock::given(method("POST"))
        .and(path("/admin/discussions"))
        .and(body_json(json!({
            "title": "Limits and continuity",
            "faculty": { "id": 1 },
            "department": { "id": 2 },
            "subject": { "name": "Algebra" },
            "topic": { "name": "Functions" },
            "tutor_id": 4,
            "venue_id": 5,
            "starts_at": "2026-09-01T09:00:00Z",
            "ends_at": "2026-09-01T11:00:00Z",
            "capacity": 30
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "status": true,
            "message": "Discussion scheduled",
            "data": {
                "id": 12,
                "title": "Limits and continuity",
                "status": "scheduled",
                "capacity": 30,
                "enrolled": 0
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server.uri()).discussions().create(&draft).await;
    assert!(response.is_success());

    let discussion = response.data.expect("discussion");
    assert_eq!(discussion.status, DiscussionStatus::Scheduled);
    assert!(discussion.is_open_for_enrollment());

    server.verify().await;
}

#[tokio::test]
async fn test_discussion_students_subresource() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/discussions/12/students"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "OK",
            "data": [
                { "id": 1, "name": "Sam Student", "email": "sam@studia.app" },
                { "id": 2, "name": "Pat Pupil", "email": "pat@studia.app" }
            ]
        })))
        .mount(&server)
        .await;

    let response = client_for(&server.uri()).discussions().students(12).await;
    let students = response.data.expect("student list");
    assert_eq!(students.len(), 2);
    assert_eq!(students[1].name, "Pat Pupil");
}

#[tokio::test]
async fn test_order_status_change_is_a_patch() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/admin/orders/5/status"))
        .and(body_json(json!({ "status": "paid" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Order updated",
            "data": {
                "id": 5,
                "number": "ORD-0005",
                "student_id": 1,
                "status": "paid",
                "total": "80.00"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server.uri())
        .orders()
        .set_status(5, OrderStatus::Paid)
        .await;

    let order = response.data.expect("order");
    assert_eq!(order.status, OrderStatus::Paid);
    assert!(order.status.is_settled());

    server.verify().await;
}

#[tokio::test]
async fn test_payment_status_change_is_a_patch() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/admin/payments/9/status"))
        .and(body_json(json!({ "status": "confirmed" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Payment updated",
            "data": {
                "id": 9,
                "order_id": 5,
                "reference": "PAY-0009",
                "method": "card",
                "status": "confirmed",
                "amount": "80.00"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server.uri())
        .payments()
        .set_status(9, PaymentStatus::Confirmed)
        .await;

    let payment = response.data.expect("payment");
    assert_eq!(payment.status, PaymentStatus::Confirmed);
    assert!(payment.status.is_collected());

    server.verify().await;
}

#[tokio::test]
async fn test_students_live_outside_the_admin_prefix() {
    let server = MockServer::start().await;

    let draft = NewStudent {
        name: "Sam Student".to_owned(),
        email: "sam@studia.app".to_owned(),
        phone: None,
        faculty_id: Some(1),
        semester_id: None,
    };

    Mock::given(method("POST"))
        .and(path("/students"))
        .and(body_json(json!({
            "name": "Sam Student",
            "email": "sam@studia.app",
            "faculty_id": 1
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "status": true,
            "message": "Student registered",
            "data": { "id": 3, "name": "Sam Student", "email": "sam@studia.app" }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/students/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Student removed"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let created = client.students().create(&draft).await;
    assert_eq!(created.data.map(|student| student.id), Some(3));

    let deleted = client.students().delete(3).await;
    assert!(deleted.is_success());

    server.verify().await;
}

#[tokio::test]
async fn test_master_service_routes_by_resource() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/faculties"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "OK",
            "data": {
                "data": [{ "id": 1, "name": "Science" }],
                "total": 1
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/admin/faculties"))
        .and(body_json(json!({ "name": "Engineering" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "status": true,
            "message": "Faculty created",
            "data": { "id": 2, "name": "Engineering" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server.uri());

    // The named accessor and the generic form hit the same collection.
    let listed = client.faculties().list().await;
    assert_eq!(listed.data.map(|items| items.len()), Some(1));

    let draft = NewFaculty {
        name: "Engineering".to_owned(),
    };
    let created = client.master::<Faculty>().create(&draft).await;
    assert_eq!(created.data.map(|faculty| faculty.id), Some(2));

    server.verify().await;
}

#[tokio::test]
async fn test_services_attach_the_stored_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/books"))
        .and(header("authorization", "Bearer tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "OK",
            "data": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    client.http().credentials().set_token("tok123");

    let response = client.books().list().await;
    assert!(response.is_success());

    server.verify().await;
}

#[tokio::test]
async fn test_validation_errors_surface_on_the_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/students"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "status": false,
            "message": "Validation failed",
            "errors": { "email": ["Email is already taken"] }
        })))
        .mount(&server)
        .await;

    let draft = NewStudent {
        name: "Sam Student".to_owned(),
        email: "sam@studia.app".to_owned(),
        ..NewStudent::default()
    };

    let response = client_for(&server.uri()).students().create(&draft).await;
    assert!(!response.is_success());
    assert_eq!(response.message, "Validation failed");

    let errors = response.errors.expect("field errors");
    assert_eq!(
        errors.get("email").map(Vec::as_slice),
        Some(&["Email is already taken".to_owned()][..])
    );
}
