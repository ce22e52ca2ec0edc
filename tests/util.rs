pub mod common {
    use std::net::SocketAddr;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::extract::State;
    use axum::http::{StatusCode, Uri};
    use axum::Router;
    use tokio::sync::Mutex;

    // the request exactly as the mock service received it
    #[derive(Clone, Debug)]
    pub struct CapturedRequest {
        pub uri: String,
        pub body: String,
    }

    #[derive(Clone)]
    struct MockService {
        status: StatusCode,
        body: String,
        delay: Duration,
        captured: Arc<Mutex<Option<CapturedRequest>>>,
    }

    async fn handle(
        State(svc): State<MockService>,
        uri: Uri,
        body: String,
    ) -> (StatusCode, String) {
        *svc.captured.lock().await = Some(CapturedRequest {
            uri: uri.to_string(),
            body,
        });
        if !svc.delay.is_zero() {
            tokio::time::sleep(svc.delay).await;
        }
        (svc.status, svc.body.clone())
    }

    /// Serve one canned response on an ephemeral port. Returns the base url
    /// to point the provider at, plus the capture slot for assertions.
    pub async fn spawn_mock(
        status: u16,
        body: &str,
        delay: Duration,
    ) -> (String, Arc<Mutex<Option<CapturedRequest>>>) {
        let captured = Arc::new(Mutex::new(None));
        let state = MockService {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body: body.to_string(),
            delay,
            captured: Arc::clone(&captured),
        };
        let app = Router::new().fallback(handle).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock listener");
        let addr: SocketAddr = listener.local_addr().expect("mock listener has no addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock server failed");
        });

        (format!("http://{addr}/v1beta"), captured)
    }

    /// Bind then release a port so nothing is listening on it.
    pub async fn unused_addr() -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind");
        listener.local_addr().expect("listener has no addr")
    }
}
