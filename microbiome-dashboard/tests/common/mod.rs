#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use tower::ServiceExt;

use microbiome_dashboard::app::{create_router, AppState};
use microbiome_dashboard::config::Config;

pub const BOUNDARY: &str = "dashboard-test-boundary";

pub struct TestHarness {
    app: Router,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::default()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> Response<Body> {
        self.app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .header(header::COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn upload(&self, file_name: &str, content: &[u8]) -> Response<Body> {
        self.post_multipart(multipart_body(UploadPart::file("fastq_file", file_name, content)), None)
            .await
    }

    /// Posts to the upload form with a Content-Length, as browsers do.
    pub async fn post_multipart(&self, body: Vec<u8>, cookie: Option<&str>) -> Response<Body> {
        let mut request = Request::builder()
            .method("POST")
            .uri("/upload/")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .header(header::CONTENT_LENGTH, body.len());
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }

        self.app
            .clone()
            .oneshot(request.body(Body::from(body)).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_raw(&self, uri: &str, content_type: &str, body: &'static str) -> Response<Body> {
        self.app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, content_type)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    pub async fn body_string(response: Response<Body>) -> String {
        String::from_utf8(Self::body_bytes(response).await).unwrap()
    }

    pub async fn body_json<T: serde::de::DeserializeOwned>(response: Response<Body>) -> T {
        serde_json::from_slice(&Self::body_bytes(response).await).unwrap()
    }

    /// The `name=value` pair of the session cookie set by a response.
    pub fn session_cookie(response: &Response<Body>) -> Option<String> {
        response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find(|value| value.starts_with("sessionid="))
            .and_then(|value| value.split(';').next())
            .map(|pair| pair.to_string())
    }
}

#[derive(Default)]
pub struct TestHarnessBuilder {
    max_upload_bytes: Option<usize>,
}

impl TestHarnessBuilder {
    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = Some(max_upload_bytes);
        self
    }

    pub fn build(self) -> TestHarness {
        let mut config = Config::default_for_test();
        if let Some(max_upload_bytes) = self.max_upload_bytes {
            config.max_upload_bytes = max_upload_bytes;
        }

        let app = create_router(AppState::from_config(&config), None);
        TestHarness { app }
    }
}

pub struct UploadPart<'a> {
    pub field: &'a str,
    pub file_name: Option<&'a str>,
    pub content: &'a [u8],
}

impl<'a> UploadPart<'a> {
    pub fn file(field: &'a str, file_name: &'a str, content: &'a [u8]) -> Self {
        Self {
            field,
            file_name: Some(file_name),
            content,
        }
    }

    pub fn text(field: &'a str, content: &'a str) -> Self {
        Self {
            field,
            file_name: None,
            content: content.as_bytes(),
        }
    }
}

pub fn multipart_body(part: UploadPart<'_>) -> Vec<u8> {
    multipart_body_from_parts(&[part])
}

pub fn multipart_body_from_parts(parts: &[UploadPart<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part.file_name {
            Some(file_name) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                        part.field, file_name
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
            }
            None => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                        part.field
                    )
                    .as_bytes(),
                );
            }
        }
        body.extend_from_slice(part.content);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub const FASTQ_RECORD: &[u8] = b"@read1\nGATTTGGGGTTCAAAGCAGTATCGATCAAATAGTAAATCCATTTGTTCAACTCACAGTTT\n+\n!''*((((***+))%%%++)(%%%%).1***-+*''))**55CCF>>>>>>CCCCCCC65\n";
