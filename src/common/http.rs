//! HTTP関連の基本型とユーティリティ

use std::collections::HashMap;
use std::convert::TryFrom;

use serde::Serialize;

use crate::error::Error;

use super::utils::is_header_value_valid;

/// JSONのContent-Type
pub const APPLICATION_JSON: &str = "application/json";

/// RFC7807 problem details のContent-Type
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// HTTPステータスコード
///
/// 各コードがどのレスポンス系統に属するかは [`StatusCode::family`] が宣言する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    // 2xx Success
    Ok = 200,
    Created = 201,
    Accepted = 202,
    NonAuthoritativeInformation = 203,
    NoContent = 204,
    ResetContent = 205,
    PartialContent = 206,
    MultiStatus = 207,
    AlreadyReported = 208,
    ImUsed = 226,

    // 4xx Client Error
    BadRequest = 400,
    Unauthorized = 401,
    PaymentRequired = 402,
    Forbidden = 403,
    NotFound = 404,
    MethodNotAllowed = 405,
    NotAcceptable = 406,
    ProxyAuthenticationRequired = 407,
    RequestTimeout = 408,
    Conflict = 409,
    Gone = 410,
    LengthRequired = 411,
    PreconditionFailed = 412,
    PayloadTooLarge = 413,
    UriTooLong = 414,
    UnsupportedMediaType = 415,
    RangeNotSatisfiable = 416,
    ExpectationFailed = 417,
    ImATeapot = 418,
    MisdirectedRequest = 421,
    UnprocessableEntity = 422,
    Locked = 423,
    FailedDependency = 424,
    TooEarly = 425,
    UpgradeRequired = 426,
    PreconditionRequired = 428,
    TooManyRequests = 429,
    RequestHeaderFieldsTooLarge = 431,
    UnavailableForLegalReasons = 451,

    // 5xx Server Error
    InternalServerError = 500,
    NotImplemented = 501,
    BadGateway = 502,
    ServiceUnavailable = 503,
    GatewayTimeout = 504,
    HttpVersionNotSupported = 505,
    VariantAlsoNegotiates = 506,
    InsufficientStorage = 507,
    LoopDetected = 508,
    NotExtended = 510,
    NetworkAuthenticationRequired = 511,
}

impl StatusCode {
    /// 定義済みの全ステータスコード（昇順）
    pub const ALL: [StatusCode; 50] = [
        StatusCode::Ok,
        StatusCode::Created,
        StatusCode::Accepted,
        StatusCode::NonAuthoritativeInformation,
        StatusCode::NoContent,
        StatusCode::ResetContent,
        StatusCode::PartialContent,
        StatusCode::MultiStatus,
        StatusCode::AlreadyReported,
        StatusCode::ImUsed,
        StatusCode::BadRequest,
        StatusCode::Unauthorized,
        StatusCode::PaymentRequired,
        StatusCode::Forbidden,
        StatusCode::NotFound,
        StatusCode::MethodNotAllowed,
        StatusCode::NotAcceptable,
        StatusCode::ProxyAuthenticationRequired,
        StatusCode::RequestTimeout,
        StatusCode::Conflict,
        StatusCode::Gone,
        StatusCode::LengthRequired,
        StatusCode::PreconditionFailed,
        StatusCode::PayloadTooLarge,
        StatusCode::UriTooLong,
        StatusCode::UnsupportedMediaType,
        StatusCode::RangeNotSatisfiable,
        StatusCode::ExpectationFailed,
        StatusCode::ImATeapot,
        StatusCode::MisdirectedRequest,
        StatusCode::UnprocessableEntity,
        StatusCode::Locked,
        StatusCode::FailedDependency,
        StatusCode::TooEarly,
        StatusCode::UpgradeRequired,
        StatusCode::PreconditionRequired,
        StatusCode::TooManyRequests,
        StatusCode::RequestHeaderFieldsTooLarge,
        StatusCode::UnavailableForLegalReasons,
        StatusCode::InternalServerError,
        StatusCode::NotImplemented,
        StatusCode::BadGateway,
        StatusCode::ServiceUnavailable,
        StatusCode::GatewayTimeout,
        StatusCode::HttpVersionNotSupported,
        StatusCode::VariantAlsoNegotiates,
        StatusCode::InsufficientStorage,
        StatusCode::LoopDetected,
        StatusCode::NotExtended,
        StatusCode::NetworkAuthenticationRequired,
    ];

    /// u16の値を取得
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// u16からStatusCodeに変換
    pub fn from_u16(code: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|status| status.as_u16() == code)
    }

    /// 理由句を取得
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::Accepted => "Accepted",
            StatusCode::NonAuthoritativeInformation => "Non-Authoritative Information",
            StatusCode::NoContent => "No Content",
            StatusCode::ResetContent => "Reset Content",
            StatusCode::PartialContent => "Partial Content",
            StatusCode::MultiStatus => "Multi-Status",
            StatusCode::AlreadyReported => "Already Reported",
            StatusCode::ImUsed => "IM Used",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Unauthorized => "Unauthorized",
            StatusCode::PaymentRequired => "Payment Required",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::NotAcceptable => "Not Acceptable",
            StatusCode::ProxyAuthenticationRequired => "Proxy Authentication Required",
            StatusCode::RequestTimeout => "Request Timeout",
            StatusCode::Conflict => "Conflict",
            StatusCode::Gone => "Gone",
            StatusCode::LengthRequired => "Length Required",
            StatusCode::PreconditionFailed => "Precondition Failed",
            StatusCode::PayloadTooLarge => "Payload Too Large",
            StatusCode::UriTooLong => "URI Too Long",
            StatusCode::UnsupportedMediaType => "Unsupported Media Type",
            StatusCode::RangeNotSatisfiable => "Range Not Satisfiable",
            StatusCode::ExpectationFailed => "Expectation Failed",
            StatusCode::ImATeapot => "I'm a teapot",
            StatusCode::MisdirectedRequest => "Misdirected Request",
            StatusCode::UnprocessableEntity => "Unprocessable Entity",
            StatusCode::Locked => "Locked",
            StatusCode::FailedDependency => "Failed Dependency",
            StatusCode::TooEarly => "Too Early",
            StatusCode::UpgradeRequired => "Upgrade Required",
            StatusCode::PreconditionRequired => "Precondition Required",
            StatusCode::TooManyRequests => "Too Many Requests",
            StatusCode::RequestHeaderFieldsTooLarge => "Request Header Fields Too Large",
            StatusCode::UnavailableForLegalReasons => "Unavailable For Legal Reasons",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::NotImplemented => "Not Implemented",
            StatusCode::BadGateway => "Bad Gateway",
            StatusCode::ServiceUnavailable => "Service Unavailable",
            StatusCode::GatewayTimeout => "Gateway Timeout",
            StatusCode::HttpVersionNotSupported => "HTTP Version Not Supported",
            StatusCode::VariantAlsoNegotiates => "Variant Also Negotiates",
            StatusCode::InsufficientStorage => "Insufficient Storage",
            StatusCode::LoopDetected => "Loop Detected",
            StatusCode::NotExtended => "Not Extended",
            StatusCode::NetworkAuthenticationRequired => "Network Authentication Required",
        }
    }

    /// 成功ステータスかどうか判定
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.as_u16())
    }

    /// クライアントエラーかどうか判定
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.as_u16())
    }

    /// サーバーエラーかどうか判定
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.as_u16())
    }
}

impl From<StatusCode> for u16 {
    fn from(status: StatusCode) -> u16 {
        status.as_u16()
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = Error;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        StatusCode::from_u16(code).ok_or(Error::UnknownStatusCode(code))
    }
}

impl From<StatusCode> for http::StatusCode {
    fn from(status: StatusCode) -> http::StatusCode {
        // 定義済みコードはすべて100..=999に収まる
        http::StatusCode::from_u16(status.as_u16())
            .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl TryFrom<http::StatusCode> for StatusCode {
    type Error = Error;

    fn try_from(status: http::StatusCode) -> Result<Self, Self::Error> {
        StatusCode::try_from(status.as_u16())
    }
}

/// 標準的なセキュリティヘッダー
const SECURITY_HEADERS: [(&str, &str); 5] = [
    ("X-Content-Type-Options", "nosniff"),
    ("X-Frame-Options", "DENY"),
    ("X-XSS-Protection", "1; mode=block"),
    ("Referrer-Policy", "strict-origin-when-cross-origin"),
    ("Content-Security-Policy", "default-src 'self'"),
];

/// HTTPレスポンス（フレームワーク非依存）
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// HTTPステータスコード
    pub status: u16,
    /// HTTPヘッダー
    pub headers: HashMap<String, String>,
    /// レスポンスボディ
    pub body: Option<Vec<u8>>,
}

impl Response {
    /// 新しいレスポンスを作成
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// StatusCodeから新しいレスポンスを作成
    pub fn with_status(status: StatusCode) -> Self {
        Self::new(status.as_u16())
    }

    /// ヘッダーを追加（CRLF・制御文字を含む値は無視）
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if is_header_value_valid(&value) {
            self.headers.insert(key.into(), value);
        }
        self
    }

    /// ボディを追加
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// JSONをボディとして設定
    pub fn json<T: Serialize>(self, value: &T) -> Result<Self, Error> {
        self.json_as(value, APPLICATION_JSON)
    }

    /// 指定のContent-TypeでJSONをボディとして設定
    pub fn json_as<T: Serialize>(mut self, value: &T, content_type: &str) -> Result<Self, Error> {
        let json = serde_json::to_vec(value)
            .map_err(|e| Error::ResponseSerializationError(e.to_string()))?;

        self.headers.insert("Content-Type".to_string(), content_type.to_string());
        self.body = Some(json);
        Ok(self)
    }

    /// ボディをJSONとしてパース
    pub fn body_json<T: for<'de> serde::Deserialize<'de>>(&self) -> Option<T> {
        self.body
            .as_ref()
            .and_then(|body| serde_json::from_slice(body).ok())
    }

    /// Error型から固定メッセージのレスポンスを生成
    pub fn from_error(error: &Error) -> Self {
        let status = error.status_code();
        let message = StatusCode::from_u16(status)
            .map(|s| s.reason_phrase())
            .unwrap_or("Error");
        Response::new(status)
            .with_header("Content-Type", "text/plain")
            .with_body(message.as_bytes().to_vec())
    }
}

/// レスポンス構築のためのビルダー
#[derive(Debug, Clone)]
pub struct ResponseBuilder {
    status: u16,
    headers: HashMap<String, String>,
    body: Option<Vec<u8>>,
}

impl ResponseBuilder {
    /// 新しいResponseBuilderを作成（u16ステータスコード）
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// 新しいResponseBuilderを作成（StatusCode）
    pub fn with_status(status: StatusCode) -> Self {
        Self::new(status.as_u16())
    }

    /// ヘッダーを追加（CRLF・制御文字を含む値は無視）
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if is_header_value_valid(&value) {
            self.headers.insert(key.into(), value);
        }
        self
    }

    /// ヘッダーを追加（不正な値はエラー）
    pub fn try_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, Error> {
        let key = key.into();
        let value = value.into();
        if !is_header_value_valid(&value) {
            return Err(Error::InvalidHeaderValue { name: key, value });
        }
        self.headers.insert(key, value);
        Ok(self)
    }

    /// 標準的なセキュリティヘッダーを一括追加（既存の値は上書きしない）
    pub fn security_headers(mut self) -> Self {
        for (key, value) in SECURITY_HEADERS {
            self.headers
                .entry(key.to_string())
                .or_insert_with(|| value.to_string());
        }
        self
    }

    /// 指定のContent-TypeでJSONボディを設定
    pub fn json_as<T: Serialize>(mut self, data: &T, content_type: &str) -> Result<Self, Error> {
        let json = serde_json::to_vec(data)
            .map_err(|e| Error::ResponseSerializationError(e.to_string()))?;

        self.headers.insert("Content-Type".to_string(), content_type.to_string());
        self.body = Some(json);
        Ok(self)
    }

    /// Responseを構築
    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}
