//! Shared fixtures for the wiremock-backed integration tests

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use serde_json::{Value, json};
use sharepoint_fetch::config::Config;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN_PATH: &str = "/tenant-id/oauth2/v2.0/token";
pub const DRIVES_PATH: &str = "/v1.0/sites/site-id/drives";
pub const FOLDER_PATH: &str = "/v1.0/sites/site-id/drives/d1/root:/US/US02/US0201.3834/Projs";
pub const CHILDREN_PATH: &str = "/v1.0/sites/site-id/drives/d1/items/folder-1/children";
pub const ACCESS_TOKEN: &str = "test-token";

pub fn config_json(server: &MockServer) -> Value {
    json!({
        "sharepoint_client_id": "client-id",
        "authority": format!("{}/tenant-id", server.uri()),
        "sharepoint_client_sct_value": "client-secret",
        "sharepoint_scope": ["https://graph.microsoft.com/.default"],
        "graph_sites": format!("{}{}", server.uri(), DRIVES_PATH),
    })
}

pub fn config_for(server: &MockServer) -> Config {
    Config::from_json_str(&config_json(server).to_string()).unwrap()
}

pub async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=client-id"))
        .and(body_string_contains("client_secret=client-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "Bearer",
            "expires_in": 3599,
            "ext_expires_in": 3599,
            "access_token": ACCESS_TOKEN,
        })))
        .expect(1)
        .mount(server)
        .await;
}

pub fn drives_body() -> Value {
    json!({
        "value": [
            { "id": "d0", "name": "Documents" },
            { "id": "d1", "name": "Sales" },
        ]
    })
}

pub fn folder_body() -> Value {
    json!({
        "id": "folder-1",
        "name": "Projs",
        "folder": { "childCount": 3 }
    })
}

pub fn child(server: &MockServer, name: &str, modified: &str) -> Value {
    json!({
        "id": format!("id-{}", name),
        "name": name,
        "lastModifiedDateTime": modified,
        "@microsoft.graph.downloadUrl": format!("{}/download/{}", server.uri(), name),
        "file": { "mimeType": "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" }
    })
}

/// Workbook with a SUMMARY sheet (header + two rows) and a Notes sheet
pub fn workbook_bytes() -> Vec<u8> {
    let mut workbook = Workbook::new();

    let summary = workbook.add_worksheet();
    summary.set_name("SUMMARY").unwrap();
    summary.write_string(0, 0, "Project").unwrap();
    summary.write_string(0, 1, "Hours").unwrap();
    summary.write_string(1, 0, "Alpha").unwrap();
    summary.write_number(1, 1, 12.5).unwrap();
    summary.write_string(2, 0, "Beta").unwrap();
    summary.write_number(2, 1, 3).unwrap();

    let notes = workbook.add_worksheet();
    notes.set_name("Notes").unwrap();
    notes.write_string(0, 0, "Remark").unwrap();

    workbook.save_to_buffer().unwrap()
}
