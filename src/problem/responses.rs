//! ステータスコードごとのレスポンス構築関数
//!
//! いずれもI/Oを行わない純粋な関数で、失敗しない。

use crate::common::StatusCode;

use super::detail::ProblemSource;
use super::envelope::ResponseEnvelope;
use super::table::*;

/// 400 Bad Request レスポンスを作成
pub fn bad_request<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    BAD_REQUEST.envelope(failure)
}

/// 401 Unauthorized レスポンスを作成
pub fn unauthorized<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    UNAUTHORIZED.envelope(failure)
}

/// 402 Payment Required レスポンスを作成
pub fn payment_required<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    PAYMENT_REQUIRED.envelope(failure)
}

/// 403 Forbidden レスポンスを作成
pub fn forbidden<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    FORBIDDEN.envelope(failure)
}

/// 404 Not Found レスポンスを作成
pub fn not_found<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    NOT_FOUND.envelope(failure)
}

/// 405 Method Not Allowed レスポンスを作成
pub fn method_not_allowed<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    METHOD_NOT_ALLOWED.envelope(failure)
}

/// 406 Not Acceptable レスポンスを作成
pub fn not_acceptable<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    NOT_ACCEPTABLE.envelope(failure)
}

/// 407 Proxy Authentication Required レスポンスを作成
pub fn proxy_authentication_required<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    PROXY_AUTHENTICATION_REQUIRED.envelope(failure)
}

/// 408 Request Timeout レスポンスを作成
pub fn request_timeout<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    REQUEST_TIMEOUT.envelope(failure)
}

/// 409 Conflict レスポンスを作成
pub fn conflict<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    CONFLICT.envelope(failure)
}

/// 410 Gone レスポンスを作成
pub fn gone<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    GONE.envelope(failure)
}

/// 411 Length Required レスポンスを作成
pub fn length_required<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    LENGTH_REQUIRED.envelope(failure)
}

/// 412 Precondition Failed レスポンスを作成
pub fn precondition_failed<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    PRECONDITION_FAILED.envelope(failure)
}

/// 413 Payload Too Large レスポンスを作成
pub fn payload_too_large<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    PAYLOAD_TOO_LARGE.envelope(failure)
}

/// 414 URI Too Long レスポンスを作成
pub fn uri_too_long<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    URI_TOO_LONG.envelope(failure)
}

/// 415 Unsupported Media Type レスポンスを作成
pub fn unsupported_media_type<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    UNSUPPORTED_MEDIA_TYPE.envelope(failure)
}

/// 416 Range Not Satisfiable レスポンスを作成
pub fn range_not_satisfiable<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    RANGE_NOT_SATISFIABLE.envelope(failure)
}

/// 417 Expectation Failed レスポンスを作成
pub fn expectation_failed<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    EXPECTATION_FAILED.envelope(failure)
}

/// 418 I'm a teapot（タイトル固定） レスポンスを作成
pub fn im_a_teapot<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    IM_A_TEAPOT.envelope(failure)
}

/// 421 Misdirected Request レスポンスを作成
pub fn misdirected_request<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    MISDIRECTED_REQUEST.envelope(failure)
}

/// 422 Unprocessable Entity レスポンスを作成
pub fn unprocessable_entity<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    UNPROCESSABLE_ENTITY.envelope(failure)
}

/// 423 Locked レスポンスを作成
pub fn locked<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    LOCKED.envelope(failure)
}

/// 424 Failed Dependency レスポンスを作成
pub fn failed_dependency<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    FAILED_DEPENDENCY.envelope(failure)
}

/// 425 Too Early レスポンスを作成
pub fn too_early<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    TOO_EARLY.envelope(failure)
}

/// 426 Upgrade Required レスポンスを作成
pub fn upgrade_required<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    UPGRADE_REQUIRED.envelope(failure)
}

/// 428 Precondition Required レスポンスを作成
pub fn precondition_required<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    PRECONDITION_REQUIRED.envelope(failure)
}

/// 429 Too Many Requests レスポンスを作成
pub fn too_many_requests<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    TOO_MANY_REQUESTS.envelope(failure)
}

/// 431 Request Header Fields Too Large レスポンスを作成
pub fn request_header_fields_too_large<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    REQUEST_HEADER_FIELDS_TOO_LARGE.envelope(failure)
}

/// 451 Unavailable For Legal Reasons（タイトル固定） レスポンスを作成
pub fn unavailable_for_legal_reasons<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    UNAVAILABLE_FOR_LEGAL_REASONS.envelope(failure)
}

/// 500 Internal Server Error レスポンスを作成
pub fn internal_server_error<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    INTERNAL_SERVER_ERROR.envelope(failure)
}

/// 501 Not Implemented レスポンスを作成
pub fn not_implemented<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    NOT_IMPLEMENTED.envelope(failure)
}

/// 502 Bad Gateway レスポンスを作成
pub fn bad_gateway<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    BAD_GATEWAY.envelope(failure)
}

/// 503 Service Unavailable レスポンスを作成
pub fn service_unavailable<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    SERVICE_UNAVAILABLE.envelope(failure)
}

/// 504 Gateway Timeout レスポンスを作成
pub fn gateway_timeout<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    GATEWAY_TIMEOUT.envelope(failure)
}

/// 505 HTTP Version Not Supported レスポンスを作成
pub fn http_version_not_supported<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    HTTP_VERSION_NOT_SUPPORTED.envelope(failure)
}

/// 506 Variant Also Negotiates レスポンスを作成
pub fn variant_also_negotiates<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    VARIANT_ALSO_NEGOTIATES.envelope(failure)
}

/// 507 Insufficient Storage レスポンスを作成
pub fn insufficient_storage<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    INSUFFICIENT_STORAGE.envelope(failure)
}

/// 508 Loop Detected レスポンスを作成
pub fn loop_detected<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    LOOP_DETECTED.envelope(failure)
}

/// 510 Not Extended レスポンスを作成
pub fn not_extended<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    NOT_EXTENDED.envelope(failure)
}

/// 511 Network Authentication Required レスポンスを作成
pub fn network_authentication_required<F: ProblemSource + ?Sized>(failure: &F) -> ResponseEnvelope {
    NETWORK_AUTHENTICATION_REQUIRED.envelope(failure)
}

fn payload<T>(status: StatusCode, body: T, location: Option<String>) -> ResponseEnvelope<T> {
    ResponseEnvelope::Payload {
        status,
        body,
        location,
    }
}

/// 200 OK レスポンスを作成
pub fn ok<T>(body: T) -> ResponseEnvelope<T> {
    payload(StatusCode::Ok, body, None)
}

/// 201 Created レスポンスを作成
pub fn created<T>(body: T) -> ResponseEnvelope<T> {
    payload(StatusCode::Created, body, None)
}

/// Location付きの 201 Created レスポンスを作成
pub fn created_at<T>(location: impl Into<String>, body: T) -> ResponseEnvelope<T> {
    payload(StatusCode::Created, body, Some(location.into()))
}

/// 202 Accepted レスポンスを作成
pub fn accepted<T>(body: T) -> ResponseEnvelope<T> {
    payload(StatusCode::Accepted, body, None)
}

/// Location付きの 202 Accepted レスポンスを作成
pub fn accepted_at<T>(location: impl Into<String>, body: T) -> ResponseEnvelope<T> {
    payload(StatusCode::Accepted, body, Some(location.into()))
}

/// 203 Non-Authoritative Information レスポンスを作成
pub fn non_authoritative_information<T>(body: T) -> ResponseEnvelope<T> {
    payload(StatusCode::NonAuthoritativeInformation, body, None)
}

/// 206 Partial Content レスポンスを作成
pub fn partial_content<T>(body: T) -> ResponseEnvelope<T> {
    payload(StatusCode::PartialContent, body, None)
}

/// 207 Multi-Status レスポンスを作成
pub fn multi_status<T>(body: T) -> ResponseEnvelope<T> {
    payload(StatusCode::MultiStatus, body, None)
}

/// 208 Already Reported レスポンスを作成
pub fn already_reported<T>(body: T) -> ResponseEnvelope<T> {
    payload(StatusCode::AlreadyReported, body, None)
}

/// 226 IM Used レスポンスを作成
pub fn im_used<T>(body: T) -> ResponseEnvelope<T> {
    payload(StatusCode::ImUsed, body, None)
}

/// 204 No Content レスポンスを作成
pub fn no_content() -> ResponseEnvelope {
    ResponseEnvelope::Empty {
        status: StatusCode::NoContent,
    }
}

/// 205 Reset Content レスポンスを作成
pub fn reset_content() -> ResponseEnvelope {
    ResponseEnvelope::Empty {
        status: StatusCode::ResetContent,
    }
}
