use serde_json::json;

use super::table::is_rfc_anchor;

use super::*;
use crate::common::{RenderOptions, Response, StatusCode, APPLICATION_PROBLEM_JSON};
use crate::error::Error;
use crate::failure::{BoxError, Failure, Layer, StructuredErrors};

fn multi_field_failure() -> Failure {
    Failure::validation(Layer::Foundation, "Invalid input, fix the errors and try again.")
        .with_error("name", "required")
        .with_error("age", "must be positive")
        .with_error("age", "must be integer")
}

fn header<'a>(response: &'a Response, name: &str) -> Option<&'a str> {
    response.headers.get(name).map(String::as_str)
}

fn problem_of(envelope: &ResponseEnvelope) -> &ProblemDetail {
    envelope.problem().expect("problem envelope")
}

#[test]
fn test_every_status_declares_a_family() {
    let mut problems = 0;
    for status in StatusCode::ALL {
        match status.family() {
            Family::Problem(problem_type) => {
                problems += 1;
                assert_eq!(problem_type.status, status);
                assert!(is_rfc_anchor(problem_type.type_uri), "{}", problem_type.type_uri);
                assert!(!status.is_success());
            }
            Family::Payload | Family::Empty => assert!(status.is_success()),
        }
    }
    assert_eq!(problems, 40);
    assert_eq!(registered_problem_types().count(), 40);
}

#[test]
fn test_errors_round_trip_for_every_problem_status() {
    let failure = multi_field_failure();

    for problem_type in registered_problem_types() {
        let envelope = build_response(problem_type.status, &failure).unwrap();
        let body = problem_of(&envelope);

        assert_eq!(envelope.status(), problem_type.status);
        assert_eq!(body.status, problem_type.status.as_u16());
        assert_eq!(&body.errors, failure.errors());
    }
}

#[test]
fn test_title_defaults_to_message_unless_fixed() {
    let failure = Failure::validation(Layer::Processing, "something specific");

    for problem_type in registered_problem_types() {
        let envelope = build_response(problem_type.status, &failure).unwrap();
        let expected = match problem_type.title {
            TitleRule::FromFailure => "something specific",
            TitleRule::Fixed(title) => title,
        };
        assert_eq!(problem_of(&envelope).title, expected);
    }

    let teapot = responses::im_a_teapot(&failure);
    assert_eq!(problem_of(&teapot).title, "I'm a teapot");
    let legal = responses::unavailable_for_legal_reasons(&failure);
    assert_eq!(problem_of(&legal).title, "Unavailable For Legal Reasons");
}

#[test]
fn test_type_uri_is_stable_across_failures() {
    let first = Failure::validation(Layer::Foundation, "one").with_error("a", "x");
    let second = Failure::service(Layer::Orchestration, "two".to_string());

    for problem_type in registered_problem_types() {
        let a = build_response(problem_type.status, &first).unwrap();
        let b = build_response(problem_type.status, &second).unwrap();
        let again = build_response(problem_type.status, &first).unwrap();

        assert_eq!(problem_of(&a).problem_type, problem_type.type_uri);
        assert_eq!(problem_of(&a).problem_type, problem_of(&b).problem_type);
        assert_eq!(problem_of(&a).problem_type, problem_of(&again).problem_type);
    }
}

#[test]
fn test_not_found_with_empty_errors() {
    let failure = Failure::validation(Layer::Foundation, "bad input");

    let envelope = responses::not_found(&failure);

    assert_eq!(envelope.status(), StatusCode::NotFound);
    assert_eq!(
        serde_json::to_value(problem_of(&envelope)).unwrap(),
        json!({
            "status": 404,
            "type": "https://tools.ietf.org/html/rfc7231#section-6.5.4",
            "title": "bad input",
            "errors": {}
        })
    );
}

#[test]
fn test_bad_request_with_multiple_fields() {
    let failure = Failure::validation(Layer::Foundation, "bad input")
        .with_error("name", "required")
        .with_error("age", "must be positive")
        .with_error("age", "must be integer");

    let envelope = responses::bad_request(&failure);
    let body = problem_of(&envelope);

    assert_eq!(body.problem_type, "https://tools.ietf.org/html/rfc7231#section-6.5.1");
    assert_eq!(
        serde_json::to_value(&body.errors).unwrap(),
        json!({
            "name": ["required"],
            "age": ["must be positive", "must be integer"]
        })
    );
}

#[test]
fn test_boxed_errors_are_accepted() {
    let boxed: BoxError = Box::new(multi_field_failure());
    let envelope = responses::conflict(boxed.as_ref());
    assert_eq!(problem_of(&envelope).errors, *multi_field_failure().errors());

    let plain: BoxError = "plain failure".into();
    let envelope = responses::bad_gateway(plain.as_ref());
    let body = problem_of(&envelope);
    assert_eq!(body.title, "plain failure");
    assert_eq!(body.errors, StructuredErrors::new());
}

#[test]
fn test_family_mismatch_is_rejected() {
    let failure = multi_field_failure();

    assert!(matches!(
        build_response(StatusCode::Ok, &failure),
        Err(Error::FamilyMismatch {
            status: 200,
            expected: "problem"
        })
    ));
    assert!(matches!(
        build_payload(StatusCode::BadRequest, json!({}), None),
        Err(Error::FamilyMismatch { status: 400, .. })
    ));
    assert!(matches!(build_empty(StatusCode::Created), Err(Error::FamilyMismatch { .. })));

    assert_eq!(build_empty(StatusCode::NoContent).unwrap(), responses::no_content());
}

#[test]
fn test_success_constructors_carry_payload() {
    let body = json!({ "id": 7 });

    let created = responses::created_at("/items/7", body.clone());
    assert_eq!(created.status(), StatusCode::Created);
    assert_eq!(created.payload(), Some(&body));
    assert_eq!(created.location(), Some("/items/7"));
    assert!(created.problem().is_none());

    let im_used = responses::im_used(body.clone());
    assert_eq!(im_used.status(), StatusCode::ImUsed);
    assert_eq!(im_used.location(), None);

    for envelope in [
        responses::ok(body.clone()),
        responses::created(body.clone()),
        responses::accepted(body.clone()),
        responses::accepted_at("/jobs/1", body.clone()),
        responses::non_authoritative_information(body.clone()),
        responses::partial_content(body.clone()),
        responses::multi_status(body.clone()),
        responses::already_reported(body.clone()),
        im_used,
    ] {
        assert_eq!(envelope.status().family(), Family::Payload);
    }

    for envelope in [responses::no_content(), responses::reset_content()] {
        assert_eq!(envelope.status().family(), Family::Empty);
    }
}

#[test]
fn test_render_problem_envelope() {
    let options = RenderOptions::default();
    let response = responses::bad_request(&multi_field_failure())
        .render(&options)
        .unwrap();

    assert_eq!(response.status, 400);
    assert_eq!(header(&response, "Content-Type"), Some(APPLICATION_PROBLEM_JSON));
    assert_eq!(header(&response, "X-Content-Type-Options"), Some("nosniff"));

    let decoded: ProblemDetail = response.body_json().unwrap();
    assert_eq!(decoded.errors, *multi_field_failure().errors());
}

#[test]
fn test_render_payload_and_empty_envelopes() {
    let options = RenderOptions::default().with_security_headers(false);

    let response = responses::created_at("/items/7", json!({ "id": 7 }))
        .render(&options)
        .unwrap();
    assert_eq!(response.status, 201);
    assert_eq!(header(&response, "Location"), Some("/items/7"));
    assert_eq!(header(&response, "Content-Type"), Some("application/json"));
    assert!(header(&response, "X-Frame-Options").is_none());

    let response = responses::no_content().render(&options).unwrap();
    assert_eq!(response.status, 204);
    assert!(response.body.is_none());
    assert!(response.headers.is_empty());
}

#[test]
fn test_render_rejects_header_injection_in_location() {
    let envelope = responses::created_at("/items/7\r\nSet-Cookie: x=y", json!({}));
    let result = envelope.render(&RenderOptions::default());
    assert!(matches!(result, Err(Error::InvalidHeaderValue { .. })));
}
