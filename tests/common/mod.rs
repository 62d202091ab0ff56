use async_trait::async_trait;
use jatra::sdk::fare::{FareError, FareOracle, FareQuery};
use jatra::{router, AppState};
use serde_json::{json, Value};
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

/// Counting stand-in for the external model. `reply: None` simulates the
/// collaborator throwing; `Some(value)` is returned verbatim.
pub struct StubOracle {
    pub calls: Arc<AtomicUsize>,
    pub reply: Option<Value>,
}

impl StubOracle {
    pub fn replying(reply: Option<Value>) -> (Arc<Self>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let oracle = Arc::new(Self {
            calls: Arc::clone(&calls),
            reply,
        });
        (oracle, calls)
    }
}

#[async_trait]
impl FareOracle for StubOracle {
    async fn estimate(&self, _query: &FareQuery) -> Result<Value, FareError> {
        self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        match &self.reply {
            Some(value) => Ok(value.clone()),
            None => Err(FareError::UpstreamApi {
                code: 500,
                message: "stub exploded".to_string(),
            }),
        }
    }
}

/// Schema-conforming reply used by the happy-path scenarios.
pub fn uttara_motijheel_reply() -> Value {
    json!({
        "distance_km": 22.5,
        "fares": [{
            "transport": "Local Bus",
            "fare": "40-50 BDT",
            "notes": "Frequent service, crowded at rush hour",
            "bus_names": ["Turag"]
        }],
        "travel_tips": [
            "Avoid the evening rush between 5 and 8 pm",
            "Carry small notes for the conductor"
        ]
    })
}

/// Runs a relay with the given stub reply on an ephemeral port and returns
/// its base URL. The server thread lives for the rest of the test process.
#[allow(dead_code)]
pub fn spawn_stub_relay(reply: Option<Value>) -> String {
    let (oracle, _calls) = StubOracle::replying(reply);
    let app = router(AppState::new(oracle));

    let runtime = tokio::runtime::Runtime::new().expect("create test runtime");
    let listener = runtime.block_on(async {
        tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port")
    });
    let addr = listener.local_addr().expect("local addr");

    std::thread::spawn(move || {
        runtime.block_on(async {
            axum::serve(listener, app).await.expect("serve stub relay");
        });
    });

    format!("http://{addr}")
}
