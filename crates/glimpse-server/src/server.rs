//! Development server implementation.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tokio::sync::{broadcast, mpsc, RwLock};
use tower_http::services::ServeDir;

use glimpse_bundle::{BundleConfig, BundleOutput, Bundler};
use glimpse_tree::load_dir;

use crate::console::{log_console_events, ConsoleBus, ConsoleEvent};
use crate::host::HOST_PAGE;
use crate::watcher::{FileWatcher, WatchEvent};
use crate::websocket::{ClientMessage, ReloadHub, ServerMessage};

/// Quiet period after a change before rebuilding.
const DEBOUNCE: Duration = Duration::from_millis(100);

/// Configuration for the development server.
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// Project directory to bundle and watch
    pub project_dir: PathBuf,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,

    /// Bundler settings
    pub bundle: BundleConfig,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("."),
            port: 5177,
            host: "127.0.0.1".to_string(),
            open: true,
            bundle: BundleConfig::default(),
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address: {0}")]
    Address(String),

    #[error("Failed to bind to {0}: {1}")]
    Bind(SocketAddr, String),

    #[error("File watch error: {0}")]
    Watch(String),

    #[error("Failed to load project: {0}")]
    Load(String),
}

/// Shared server state.
pub struct ServerState {
    project_dir: PathBuf,
    bundler: Bundler,
    document: RwLock<String>,
    reload: ReloadHub,
    console: ConsoleBus,
}

impl ServerState {
    pub fn new(project_dir: PathBuf, bundle: BundleConfig) -> Self {
        Self {
            project_dir,
            bundler: Bundler::new(bundle),
            document: RwLock::new(String::new()),
            reload: ReloadHub::new(),
            console: ConsoleBus::new(),
        }
    }

    pub fn reload_hub(&self) -> &ReloadHub {
        &self.reload
    }

    pub fn console_bus(&self) -> &ConsoleBus {
        &self.console
    }

    /// Current preview document.
    pub async fn document(&self) -> String {
        self.document.read().await.clone()
    }

    /// Load the project from disk and bundle it.
    pub fn build(&self) -> Result<BundleOutput, ServerError> {
        let nodes = load_dir(&self.project_dir, &self.bundler.config().exclude)
            .map_err(|e| ServerError::Load(e.to_string()))?;

        Ok(self.bundler.bundle(&nodes))
    }

    /// Rebuild, replace the current document and tell pages to reload.
    pub async fn refresh(self: &Arc<Self>) -> Result<(), ServerError> {
        let state = Arc::clone(self);
        let output = tokio::task::spawn_blocking(move || state.build())
            .await
            .map_err(|e| ServerError::Load(e.to_string()))??;

        tracing::info!(
            "Rebuilt {} preview ({} modules) in {}ms",
            output.shape.as_str(),
            output.modules,
            output.duration_ms
        );

        *self.document.write().await = output.html;
        self.reload.send(ServerMessage::Reload);

        Ok(())
    }
}

/// Development server.
pub struct DevServer {
    config: DevServerConfig,
}

impl DevServer {
    /// Create a new development server.
    pub fn new(config: DevServerConfig) -> Self {
        Self { config }
    }

    /// Start the development server.
    pub async fn start(self) -> Result<(), ServerError> {
        let address = format!("{}:{}", self.config.host, self.config.port);
        let addr: SocketAddr = address
            .parse()
            .map_err(|_| ServerError::Address(address.clone()))?;

        let state = Arc::new(ServerState::new(
            self.config.project_dir.clone(),
            self.config.bundle.clone(),
        ));
        state.refresh().await?;

        let (watcher, rx) = FileWatcher::new(&self.config.project_dir, &self.config.bundle.exclude)
            .map_err(|e| ServerError::Watch(e.to_string()))?;

        let watch_state = Arc::clone(&state);
        tokio::spawn(async move {
            watch_loop(watch_state, rx).await;
            // Keep watcher alive
            drop(watcher);
        });

        tokio::spawn(log_console_events(state.console.clone()));

        let app = router(state);

        tracing::info!("Starting dev server at http://{}", addr);

        if self.config.open {
            let url = format!("http://{}", addr);
            if let Err(e) = open::that(&url) {
                tracing::debug!("Could not open browser: {}", e);
            }
        }

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Bind(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Bind(addr, e.to_string()))?;

        Ok(())
    }
}

/// Routes: host page, preview document, WebSocket and the project's
/// `public/` directory.
pub fn router(state: Arc<ServerState>) -> Router {
    let public = ServeDir::new(state.project_dir.join("public"));

    Router::new()
        .route("/", get(host_handler))
        .route("/__preview", get(preview_handler))
        .route("/__ws", get(ws_handler))
        .nest_service("/public", public)
        .with_state(state)
}

/// Rebuild after each burst of file changes.
async fn watch_loop(state: Arc<ServerState>, mut rx: mpsc::Receiver<WatchEvent>) {
    while let Some(event) = rx.recv().await {
        tracing::debug!("Changed: {}", event.path().display());

        tokio::time::sleep(DEBOUNCE).await;
        while rx.try_recv().is_ok() {}

        if let Err(e) = state.refresh().await {
            tracing::warn!("Rebuild failed: {}", e);
        }
    }
}

async fn host_handler() -> Html<&'static str> {
    Html(HOST_PAGE)
}

async fn preview_handler(State(state): State<Arc<ServerState>>) -> Html<String> {
    Html(state.document().await)
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Push reloads to the page and collect the console lines it relays.
async fn handle_ws(mut socket: WebSocket, state: Arc<ServerState>) {
    let mut rx = state.reload.subscribe();

    if !send_message(&mut socket, &ServerMessage::Connected).await {
        return;
    }

    loop {
        tokio::select! {
            outgoing = rx.recv() => match outgoing {
                Ok(msg) => {
                    if !send_message(&mut socket, &msg).await {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => break,
            },
            incoming = socket.recv() => match incoming {
                Some(Ok(Message::Text(text))) => {
                    if let Some(ClientMessage::Console { message }) = ClientMessage::parse(text.as_str()) {
                        state.console.publish(ConsoleEvent::from_line(&message));
                    }
                }
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
        }
    }
}

async fn send_message(socket: &mut WebSocket, msg: &ServerMessage) -> bool {
    match serde_json::to_string(msg) {
        Ok(json) => socket.send(Message::Text(json.into())).await.is_ok(),
        Err(e) => {
            tracing::warn!("Failed to serialize message: {}", e);
            false
        }
    }
}
