//! Per-test fixture: a fresh mock service plus ready-to-use API values.
//!
//! Every test constructs its own `TestService`, facade, and transport, so
//! no state is shared between tests and the external runner may schedule
//! them concurrently.

use posts_client::{ApiClient, ApiError, HttpMethod, HttpRequest, HttpResponse, PostsApi, Transport};

/// Real-HTTP transport over ureq.
///
/// Builds a fresh agent for every call — an isolated request context with
/// no pooling or session carryover. Disables ureq's status-as-error
/// behavior so 4xx/5xx responses come back as data for the tests to assert
/// against.
pub struct UreqTransport;

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();

        let result = match (&request.method, &request.body) {
            (HttpMethod::Get, _) => agent.get(&request.url).call(),
            (HttpMethod::Delete, _) => agent.delete(&request.url).call(),
            (HttpMethod::Post, Some(body)) => {
                let mut req = agent.post(&request.url);
                for (name, value) in &request.headers {
                    req = req.header(name.as_str(), value.as_str());
                }
                req.send(body.as_bytes())
            }
            (HttpMethod::Post, None) => agent.post(&request.url).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                let mut req = agent.put(&request.url);
                for (name, value) in &request.headers {
                    req = req.header(name.as_str(), value.as_str());
                }
                req.send(body.as_bytes())
            }
            (HttpMethod::Put, None) => agent.put(&request.url).send_empty(),
        };

        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

/// One freshly seeded mock posts service on an OS-assigned port.
pub struct TestService {
    root: String,
}

impl TestService {
    pub fn start() -> Self {
        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        // Detached server thread; it dies with the test process.
        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                mock_server::run(listener).await
            })
            .unwrap();
        });

        Self {
            root: format!("http://{addr}"),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// A posts facade wired to this service, with its own transport.
    pub fn posts_api(&self) -> PostsApi<UreqTransport> {
        PostsApi::new(&self.root, UreqTransport)
    }

    /// A bare wrapper for ad-hoc requests outside the facade surface.
    pub fn client(&self) -> ApiClient<UreqTransport> {
        ApiClient::new(UreqTransport)
    }
}
