#![allow(dead_code)]

use ngo_crm::{config::CrmConfig, Crm};
use serde_json::{json, Value};
use wiremock::MockServer;

pub async fn setup() -> (MockServer, Crm) {
    let server = MockServer::start().await;
    let config = CrmConfig::new(&server.uri()).expect("mock server uri is a valid base");
    let crm = Crm::new(config).expect("client builds");
    (server, crm)
}

/// A successful `{ success, data }` body
pub fn ok(data: Value) -> Value {
    json!({ "success": true, "data": data })
}

pub fn user(id: &str, name: &str, country: &str, role: &str) -> Value {
    json!({
        "id": id,
        "fullName": name,
        "email": format!("{}@whv.org", id),
        "role": role,
        "countryId": country,
        "countryName": if country == "np" { "Nepal" } else { "India" },
    })
}
