//! actix-web 連携（feature `actix`）

use actix_web::http::StatusCode as ActixStatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder};
use log::{info, warn};
use serde::Serialize;

use crate::common::Response;
use crate::problem::{ResponseEnvelope, ResponseWrapper};

/// 共通のResponseをactix-webのHttpResponseに変換
pub fn to_http_response(response: Response) -> HttpResponse {
    let status = ActixStatusCode::from_u16(response.status).unwrap_or_else(|_| {
        warn!("Unknown status code {}, responding 500", response.status);
        ActixStatusCode::INTERNAL_SERVER_ERROR
    });
    let mut builder = HttpResponse::build(status);

    for (key, value) in response.headers {
        builder.insert_header((key, value));
    }

    match response.body {
        Some(body) => builder.body(body),
        None => builder.finish(),
    }
}

/// ハンドラーからエンベロープをそのまま返せるようにする
///
/// 描画に失敗した場合は500のプレーンテキストを返す。
impl<T: Serialize> Responder for ResponseEnvelope<T> {
    type Body = actix_web::body::BoxBody;

    fn respond_to(self, req: &HttpRequest) -> HttpResponse<Self::Body> {
        let status = self.status();
        info!("{} {} -> {}", req.method(), req.path(), status.as_u16());

        let response = self
            .into_response()
            .unwrap_or_else(|e| Response::from_error(&e));
        to_http_response(response)
    }
}
