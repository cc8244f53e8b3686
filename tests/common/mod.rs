// common/mod.rs - Shared test utilities: an in-process OMDb stub
//
// The stub replays the canned payloads from the fixtures module and
// records every request it receives, so suites can assert on request
// counts and query parameters as well as on parsed results.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use actix_web::{web, App, HttpResponse, HttpServer};

use movie_zone::fixtures::payloads::{
    BatmanBeginsDetail, BatmanSearchPage, IncorrectImdbId, InvalidApiKey, MovieNotFound,
};
use movie_zone::fixtures::CannedPayload;

/// Credential the stub accepts
pub const STUB_API_KEY: &str = "test-key";

#[derive(Default)]
pub struct StubOmdb {
    hits: AtomicUsize,
    requests: Mutex<Vec<HashMap<String, String>>>,
}

impl StubOmdb {
    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn recorded(&self) -> Vec<HashMap<String, String>> {
        self.requests.lock().unwrap().clone()
    }
}

async fn stub_omdb(
    state: web::Data<StubOmdb>,
    query: web::Query<HashMap<String, String>>,
) -> HttpResponse {
    let params = query.into_inner();
    state.hits.fetch_add(1, Ordering::SeqCst);
    state.requests.lock().unwrap().push(params.clone());

    if params.get("apikey").map(String::as_str) != Some(STUB_API_KEY) {
        return json_body(InvalidApiKey::json());
    }

    if let Some(q) = params.get("s") {
        if q.contains("malformed") {
            return HttpResponse::Ok()
                .content_type("application/json")
                .body("{ this is not json");
        }
        let body = if q.to_lowercase().contains("batman") {
            BatmanSearchPage::json()
        } else {
            MovieNotFound::json()
        };
        return json_body(body);
    }

    if let Some(id) = params.get("i") {
        let body = if id == "tt0372784" {
            BatmanBeginsDetail::json()
        } else {
            IncorrectImdbId::json()
        };
        return json_body(body);
    }

    json_body(r#"{"Response":"False","Error":"Something went wrong."}"#)
}

fn json_body(body: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .body(body)
}

/// Start the stub on an ephemeral port; returns its base URL and state
pub async fn start_stub() -> anyhow::Result<(String, web::Data<StubOmdb>)> {
    let state = web::Data::new(StubOmdb::default());
    let app_state = state.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .route("/", web::get().to(stub_omdb))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))?;

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    Ok((format!("http://{}/", addr), state))
}
