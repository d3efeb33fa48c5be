//! Reusable request sequences.

use axum_test::multipart::{MultipartForm, Part};
use axum_test::{TestResponse, TestServer};
use serde_json::json;

/// POST `data` to /upload as the `file` field with the given client filename.
pub async fn upload(client: &TestServer, filename: &str, data: Vec<u8>) -> TestResponse {
    let part = Part::bytes(bytes::Bytes::from(data))
        .file_name(filename.to_string())
        .mime_type("model/stl");
    let form = MultipartForm::new().add_part("file", part);

    client.post("/upload").multipart(form).await
}

/// POST /convert for `filename`.
pub async fn convert(client: &TestServer, filename: &str) -> TestResponse {
    client
        .post("/convert")
        .json(&json!({ "filename": filename }))
        .await
}

/// Upload and convert, asserting both succeed. Returns the export name.
pub async fn upload_and_convert(client: &TestServer, filename: &str, data: Vec<u8>) -> String {
    let response = upload(client, filename, data).await;
    assert_eq!(response.status_code(), 200);
    let stored = response.json::<serde_json::Value>()["filename"]
        .as_str()
        .expect("filename in upload response")
        .to_string();

    let response = convert(client, &stored).await;
    assert_eq!(response.status_code(), 200);
    response.json::<serde_json::Value>()["obj_filename"]
        .as_str()
        .expect("obj_filename in convert response")
        .to_string()
}
