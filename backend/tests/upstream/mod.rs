//! In-process stand-in for the magang API that records every request it serves.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri};
use axum::{Json, Router};
use backend::{ApiConfig, MagangApiClient};
use serde_json::Value;

type Responder = Arc<dyn Fn(&str, &HashMap<String, String>) -> (StatusCode, Value) + Send + Sync>;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub params: HashMap<String, String>,
}

#[derive(Clone)]
struct UpstreamState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responder: Responder,
}

pub struct MockUpstream {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockUpstream {
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&str, &HashMap<String, String>) -> (StatusCode, Value) + Send + Sync + 'static,
    {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = UpstreamState { requests: requests.clone(), responder: Arc::new(responder) };
        let app = Router::new().fallback(handle).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { base_url: format!("http://{}", addr), requests }
    }

    pub fn client(&self) -> MagangApiClient {
        MagangApiClient::new(ApiConfig::default().with_base_url(self.base_url.clone())).unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests().into_iter().filter(|r| r.path == path).collect()
    }
}

async fn handle(
    State(state): State<UpstreamState>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(RecordedRequest { path: path.clone(), params: params.clone() });
    let (status, body) = (state.responder)(&path, &params);
    (status, Json(body))
}

pub fn search_body(total: i64, data: Vec<Value>) -> Value {
    serde_json::json!({ "meta": { "page": 1, "limit": 20, "total": total }, "data": data })
}

pub fn listing(id: &str, posisi: &str) -> Value {
    serde_json::json!({
        "id_posisi": id,
        "posisi": posisi,
        "deskripsi_posisi": "Bantu tim menganalisis performa program.",
        "jumlah_kuota": 5,
        "jumlah_terdaftar": 2,
        "program_studi": ["Statistika", "Sistem Informasi"],
        "jenjang": ["Sarjana"],
        "nama_perusahaan": "MagangHub Labs",
        "kode_provinsi": "31",
        "nama_provinsi": "DKI Jakarta",
        "nama_kabupaten": "Jakarta Selatan",
        "is_active": true,
    })
}
