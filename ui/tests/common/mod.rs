use egui_kittest::Harness;
use erp_ui::ErpApp;
use erp_ui::state::State;
use erp_business::Route;
use kittest::Queryable;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const DEFAULT_NETWORK_WAIT_MS: u64 = 100;

pub struct TestCtx<'a> {
    /// Mock server must be retained to keep HTTP endpoints alive during tests.
    _mock_server: MockServer,
    harness: Harness<'a, ErpApp>,
}

impl<'a> TestCtx<'a> {
    /// App opened on `route`, backed by a mock `/api/mps` answering with
    /// `status` and `body`.
    pub async fn new_app(route: Route, status: u16, body: serde_json::Value) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/mps"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&mock_server)
            .await;

        let mut state = State::test(mock_server.uri());
        state.navigate(route);
        let app = ErpApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, ErpApp> {
        &mut self.harness
    }

    /// Steps the app until `label` shows up or the attempts run out.
    pub async fn wait_for_label(&mut self, label: &str) -> bool {
        for _ in 0..50 {
            self.harness.step();
            if self.harness.query_by_label(label).is_some() {
                return true;
            }
            tokio::time::sleep(std::time::Duration::from_millis(DEFAULT_NETWORK_WAIT_MS)).await;
        }
        false
    }
}

/// `count` MPS rows in wire format, ids `1..=count`.
#[allow(unused)]
pub fn mps_rows(count: usize) -> serde_json::Value {
    let statuses = ["Planned", "In Progress", "Completed"];
    serde_json::Value::Array(
        (1..=count)
            .map(|i| {
                serde_json::json!({
                    "id": i,
                    "productName": format!("Product {i}"),
                    "workOrderId": format!("WO-{:04}", 1000 + i),
                    "quantity": i * 10,
                    "dueDate": format!("2024-02-{:02}", i),
                    "status": statuses[i % statuses.len()],
                })
            })
            .collect(),
    )
}
