use std::io::Write;

use bytes::Bytes;
use log::{error, info};

use problembridge::content::{
    ContentAttribute, ContentOrchestrationService, ContentPropertyProcessor, ContentSource,
    ContentValue, DescribeBroker, FieldDescriptor, FoundationPropertyService,
};
use problembridge::{responses, Failure, ResponseWrapper};

/// 添付ファイル付きの投稿（パート名が重複している）
struct Upload {
    title: String,
    attachment: Bytes,
}

impl ContentSource for Upload {
    fn describe(&self) -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::attributed(
                "title",
                ContentAttribute::text("part"),
                ContentValue::Text(self.title.clone()),
            ),
            FieldDescriptor::attributed(
                "attachment",
                ContentAttribute::file_stream("part", "report.pdf"),
                ContentValue::Stream(self.attachment.clone()),
            ),
            FieldDescriptor::plain("draft", ContentValue::Absent),
        ]
    }
}

fn respond(failure: &Failure) -> problembridge::ResponseEnvelope {
    if failure.is_caller_fault() {
        responses::bad_request(failure)
    } else {
        responses::internal_server_error(failure)
    }
}

fn main() {
    // ロガーの初期化（既定はinfo、出力はstderr）
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).init();

    let foundation = FoundationPropertyService::new(DescribeBroker);
    let service = ContentOrchestrationService::new(ContentPropertyProcessor::new(foundation));
    let upload = Upload {
        title: "quarterly report".to_string(),
        attachment: Bytes::from_static(b"%PDF-1.7"),
    };

    let envelope = match service.build_parts(&upload) {
        Ok(parts) => {
            info!("Built {} parts", parts.len());
            responses::ok(serde_json::json!({ "parts": parts.len() }))
        }
        Err(failure) => {
            info!("{} failure at {}: {}", failure.category(), failure.layer(), failure);
            respond(&failure)
        }
    };

    match envelope.into_response() {
        Ok(response) => {
            println!("HTTP {}", response.status);
            for (key, value) in &response.headers {
                println!("{}: {}", key, value);
            }
            println!();
            if let Some(body) = response.body {
                let mut stdout = std::io::stdout();
                if let Err(e) = stdout.write_all(&body).and_then(|_| writeln!(stdout)) {
                    error!("Failed to write response body: {}", e);
                }
            }
        }
        Err(e) => {
            error!("Failed to render response: {}", e);
            std::process::exit(1);
        }
    }
}
