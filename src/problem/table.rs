//! ステータスコード -> problem 種別 の登録表
//!
//! 各ステータスコードの所属系統（problem details / ペイロード / ボディなし）は
//! [`StatusCode::family`] の網羅的な `match` で宣言する。コード値から推測はしない。

use crate::common::StatusCode;

use super::detail::{ProblemDetail, ProblemSource};
use super::envelope::ResponseEnvelope;

const RFC_BASE: &str = "https://tools.ietf.org/html/";

macro_rules! rfc {
    ($anchor:literal) => {
        concat!("https://tools.ietf.org/html/", $anchor)
    };
}

/// タイトルの決め方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleRule {
    /// 失敗のメッセージをそのまま使う
    FromFailure,
    /// 固定の文字列を使う
    Fixed(&'static str),
}

/// problem details を返すステータスコードの登録内容
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemType {
    /// ステータスコード
    pub status: StatusCode,
    /// 問題種別のURI
    pub type_uri: &'static str,
    /// タイトルの決め方
    pub title: TitleRule,
}

impl ProblemType {
    /// 失敗のメッセージをタイトルにする登録
    pub const fn new(status: StatusCode, type_uri: &'static str) -> Self {
        Self {
            status,
            type_uri,
            title: TitleRule::FromFailure,
        }
    }

    /// 固定タイトルの登録
    pub const fn with_fixed_title(
        status: StatusCode,
        type_uri: &'static str,
        title: &'static str,
    ) -> Self {
        Self {
            status,
            type_uri,
            title: TitleRule::Fixed(title),
        }
    }

    /// problem details を構築（構造化エラーはそのまま複製）
    pub fn problem_detail<F>(&self, source: &F) -> ProblemDetail
    where
        F: ProblemSource + ?Sized,
    {
        let title = match self.title {
            TitleRule::FromFailure => source.title(),
            TitleRule::Fixed(title) => title.to_string(),
        };

        ProblemDetail {
            status: self.status.as_u16(),
            problem_type: self.type_uri.to_string(),
            title,
            errors: source.structured_errors(),
        }
    }

    /// problem details を包んだエンベロープを構築
    pub fn envelope<F>(&self, source: &F) -> ResponseEnvelope
    where
        F: ProblemSource + ?Sized,
    {
        ResponseEnvelope::Problem {
            status: self.status,
            body: self.problem_detail(source),
        }
    }
}

/// レスポンスの系統
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// 失敗から problem details を構築する
    Problem(&'static ProblemType),
    /// 呼び出し元のペイロードをそのまま返す
    Payload,
    /// ステータスコードのみ
    Empty,
}

pub const BAD_REQUEST: ProblemType =
    ProblemType::new(StatusCode::BadRequest, rfc!("rfc7231#section-6.5.1"));
pub const UNAUTHORIZED: ProblemType =
    ProblemType::new(StatusCode::Unauthorized, rfc!("rfc7235#section-3.1"));
pub const PAYMENT_REQUIRED: ProblemType =
    ProblemType::new(StatusCode::PaymentRequired, rfc!("rfc7231#section-6.5.2"));
pub const FORBIDDEN: ProblemType =
    ProblemType::new(StatusCode::Forbidden, rfc!("rfc7231#section-6.5.3"));
pub const NOT_FOUND: ProblemType =
    ProblemType::new(StatusCode::NotFound, rfc!("rfc7231#section-6.5.4"));
pub const METHOD_NOT_ALLOWED: ProblemType =
    ProblemType::new(StatusCode::MethodNotAllowed, rfc!("rfc7231#section-6.5.5"));
pub const NOT_ACCEPTABLE: ProblemType =
    ProblemType::new(StatusCode::NotAcceptable, rfc!("rfc7231#section-6.5.6"));
pub const PROXY_AUTHENTICATION_REQUIRED: ProblemType = ProblemType::new(
    StatusCode::ProxyAuthenticationRequired,
    rfc!("rfc7235#section-3.2"),
);
pub const REQUEST_TIMEOUT: ProblemType =
    ProblemType::new(StatusCode::RequestTimeout, rfc!("rfc7231#section-6.5.7"));
pub const CONFLICT: ProblemType =
    ProblemType::new(StatusCode::Conflict, rfc!("rfc7231#section-6.5.8"));
pub const GONE: ProblemType = ProblemType::new(StatusCode::Gone, rfc!("rfc7231#section-6.5.9"));
pub const LENGTH_REQUIRED: ProblemType =
    ProblemType::new(StatusCode::LengthRequired, rfc!("rfc7231#section-6.5.10"));
pub const PRECONDITION_FAILED: ProblemType =
    ProblemType::new(StatusCode::PreconditionFailed, rfc!("rfc7232#section-4.2"));
pub const PAYLOAD_TOO_LARGE: ProblemType =
    ProblemType::new(StatusCode::PayloadTooLarge, rfc!("rfc7231#section-6.5.11"));
pub const URI_TOO_LONG: ProblemType =
    ProblemType::new(StatusCode::UriTooLong, rfc!("rfc7231#section-6.5.12"));
pub const UNSUPPORTED_MEDIA_TYPE: ProblemType = ProblemType::new(
    StatusCode::UnsupportedMediaType,
    rfc!("rfc7231#section-6.5.13"),
);
pub const RANGE_NOT_SATISFIABLE: ProblemType =
    ProblemType::new(StatusCode::RangeNotSatisfiable, rfc!("rfc7233#section-4.4"));
pub const EXPECTATION_FAILED: ProblemType = ProblemType::new(
    StatusCode::ExpectationFailed,
    rfc!("rfc7231#section-6.5.14"),
);
pub const IM_A_TEAPOT: ProblemType = ProblemType::with_fixed_title(
    StatusCode::ImATeapot,
    rfc!("rfc2324#section-2.3.2"),
    "I'm a teapot",
);
pub const MISDIRECTED_REQUEST: ProblemType = ProblemType::new(
    StatusCode::MisdirectedRequest,
    rfc!("rfc7540#section-9.1.2"),
);
pub const UNPROCESSABLE_ENTITY: ProblemType = ProblemType::new(
    StatusCode::UnprocessableEntity,
    rfc!("rfc4918#section-11.2"),
);
pub const LOCKED: ProblemType = ProblemType::new(StatusCode::Locked, rfc!("rfc4918#section-11.3"));
pub const FAILED_DEPENDENCY: ProblemType =
    ProblemType::new(StatusCode::FailedDependency, rfc!("rfc4918#section-11.4"));
pub const TOO_EARLY: ProblemType =
    ProblemType::new(StatusCode::TooEarly, rfc!("rfc8470#section-5.2"));
pub const UPGRADE_REQUIRED: ProblemType =
    ProblemType::new(StatusCode::UpgradeRequired, rfc!("rfc7231#section-6.5.15"));
pub const PRECONDITION_REQUIRED: ProblemType =
    ProblemType::new(StatusCode::PreconditionRequired, rfc!("rfc6585#section-3"));
pub const TOO_MANY_REQUESTS: ProblemType =
    ProblemType::new(StatusCode::TooManyRequests, rfc!("rfc6585#section-4"));
pub const REQUEST_HEADER_FIELDS_TOO_LARGE: ProblemType = ProblemType::new(
    StatusCode::RequestHeaderFieldsTooLarge,
    rfc!("rfc6585#section-5"),
);
pub const UNAVAILABLE_FOR_LEGAL_REASONS: ProblemType = ProblemType::with_fixed_title(
    StatusCode::UnavailableForLegalReasons,
    rfc!("rfc7725#section-3"),
    "Unavailable For Legal Reasons",
);
pub const INTERNAL_SERVER_ERROR: ProblemType = ProblemType::new(
    StatusCode::InternalServerError,
    rfc!("rfc7231#section-6.6.1"),
);
pub const NOT_IMPLEMENTED: ProblemType =
    ProblemType::new(StatusCode::NotImplemented, rfc!("rfc7231#section-6.6.2"));
pub const BAD_GATEWAY: ProblemType =
    ProblemType::new(StatusCode::BadGateway, rfc!("rfc7231#section-6.6.3"));
pub const SERVICE_UNAVAILABLE: ProblemType = ProblemType::new(
    StatusCode::ServiceUnavailable,
    rfc!("rfc7231#section-6.6.4"),
);
pub const GATEWAY_TIMEOUT: ProblemType =
    ProblemType::new(StatusCode::GatewayTimeout, rfc!("rfc7231#section-6.6.5"));
pub const HTTP_VERSION_NOT_SUPPORTED: ProblemType = ProblemType::new(
    StatusCode::HttpVersionNotSupported,
    rfc!("rfc7231#section-6.6.6"),
);
pub const VARIANT_ALSO_NEGOTIATES: ProblemType = ProblemType::new(
    StatusCode::VariantAlsoNegotiates,
    rfc!("rfc2295#section-8.1"),
);
pub const INSUFFICIENT_STORAGE: ProblemType = ProblemType::new(
    StatusCode::InsufficientStorage,
    rfc!("rfc4918#section-11.5"),
);
pub const LOOP_DETECTED: ProblemType =
    ProblemType::new(StatusCode::LoopDetected, rfc!("rfc5842#section-7.2"));
pub const NOT_EXTENDED: ProblemType =
    ProblemType::new(StatusCode::NotExtended, rfc!("rfc2774#section-7"));
pub const NETWORK_AUTHENTICATION_REQUIRED: ProblemType = ProblemType::new(
    StatusCode::NetworkAuthenticationRequired,
    rfc!("rfc6585#section-6"),
);

impl StatusCode {
    /// このステータスコードが属するレスポンス系統
    pub const fn family(self) -> Family {
        match self {
            StatusCode::Ok
            | StatusCode::Created
            | StatusCode::Accepted
            | StatusCode::NonAuthoritativeInformation
            | StatusCode::PartialContent
            | StatusCode::MultiStatus
            | StatusCode::AlreadyReported
            | StatusCode::ImUsed => Family::Payload,
            StatusCode::NoContent | StatusCode::ResetContent => Family::Empty,

            StatusCode::BadRequest => Family::Problem(&BAD_REQUEST),
            StatusCode::Unauthorized => Family::Problem(&UNAUTHORIZED),
            StatusCode::PaymentRequired => Family::Problem(&PAYMENT_REQUIRED),
            StatusCode::Forbidden => Family::Problem(&FORBIDDEN),
            StatusCode::NotFound => Family::Problem(&NOT_FOUND),
            StatusCode::MethodNotAllowed => Family::Problem(&METHOD_NOT_ALLOWED),
            StatusCode::NotAcceptable => Family::Problem(&NOT_ACCEPTABLE),
            StatusCode::ProxyAuthenticationRequired => {
                Family::Problem(&PROXY_AUTHENTICATION_REQUIRED)
            }
            StatusCode::RequestTimeout => Family::Problem(&REQUEST_TIMEOUT),
            StatusCode::Conflict => Family::Problem(&CONFLICT),
            StatusCode::Gone => Family::Problem(&GONE),
            StatusCode::LengthRequired => Family::Problem(&LENGTH_REQUIRED),
            StatusCode::PreconditionFailed => Family::Problem(&PRECONDITION_FAILED),
            StatusCode::PayloadTooLarge => Family::Problem(&PAYLOAD_TOO_LARGE),
            StatusCode::UriTooLong => Family::Problem(&URI_TOO_LONG),
            StatusCode::UnsupportedMediaType => Family::Problem(&UNSUPPORTED_MEDIA_TYPE),
            StatusCode::RangeNotSatisfiable => Family::Problem(&RANGE_NOT_SATISFIABLE),
            StatusCode::ExpectationFailed => Family::Problem(&EXPECTATION_FAILED),
            StatusCode::ImATeapot => Family::Problem(&IM_A_TEAPOT),
            StatusCode::MisdirectedRequest => Family::Problem(&MISDIRECTED_REQUEST),
            StatusCode::UnprocessableEntity => Family::Problem(&UNPROCESSABLE_ENTITY),
            StatusCode::Locked => Family::Problem(&LOCKED),
            StatusCode::FailedDependency => Family::Problem(&FAILED_DEPENDENCY),
            StatusCode::TooEarly => Family::Problem(&TOO_EARLY),
            StatusCode::UpgradeRequired => Family::Problem(&UPGRADE_REQUIRED),
            StatusCode::PreconditionRequired => Family::Problem(&PRECONDITION_REQUIRED),
            StatusCode::TooManyRequests => Family::Problem(&TOO_MANY_REQUESTS),
            StatusCode::RequestHeaderFieldsTooLarge => {
                Family::Problem(&REQUEST_HEADER_FIELDS_TOO_LARGE)
            }
            StatusCode::UnavailableForLegalReasons => {
                Family::Problem(&UNAVAILABLE_FOR_LEGAL_REASONS)
            }
            StatusCode::InternalServerError => Family::Problem(&INTERNAL_SERVER_ERROR),
            StatusCode::NotImplemented => Family::Problem(&NOT_IMPLEMENTED),
            StatusCode::BadGateway => Family::Problem(&BAD_GATEWAY),
            StatusCode::ServiceUnavailable => Family::Problem(&SERVICE_UNAVAILABLE),
            StatusCode::GatewayTimeout => Family::Problem(&GATEWAY_TIMEOUT),
            StatusCode::HttpVersionNotSupported => Family::Problem(&HTTP_VERSION_NOT_SUPPORTED),
            StatusCode::VariantAlsoNegotiates => Family::Problem(&VARIANT_ALSO_NEGOTIATES),
            StatusCode::InsufficientStorage => Family::Problem(&INSUFFICIENT_STORAGE),
            StatusCode::LoopDetected => Family::Problem(&LOOP_DETECTED),
            StatusCode::NotExtended => Family::Problem(&NOT_EXTENDED),
            StatusCode::NetworkAuthenticationRequired => {
                Family::Problem(&NETWORK_AUTHENTICATION_REQUIRED)
            }
        }
    }

    /// problem details 系統であれば登録内容を取得
    pub const fn problem_type(self) -> Option<&'static ProblemType> {
        match self.family() {
            Family::Problem(problem_type) => Some(problem_type),
            Family::Payload | Family::Empty => None,
        }
    }
}

/// problem details 系統として登録された全種別（ステータスコード昇順）
pub fn registered_problem_types() -> impl Iterator<Item = &'static ProblemType> {
    StatusCode::ALL.into_iter().filter_map(StatusCode::problem_type)
}

/// 種別URIがIETFのRFCアンカーを指しているか
pub fn is_rfc_anchor(type_uri: &str) -> bool {
    type_uri
        .strip_prefix(RFC_BASE)
        .map(|rest| rest.starts_with("rfc") && rest.contains("#section-"))
        .unwrap_or(false)
}
