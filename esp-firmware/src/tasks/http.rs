// HTTP Server Task - Serviert statische Assets und Test-Daten-Downloads
use core::fmt::Write;

use alloc::string::String;

use defmt::info;
use embassy_net::Stack;
use embassy_time::{Duration, Instant};
use picoserve::{
    io::embedded_io_async,
    response::IntoResponse,
    routing::{get, parse_path_segment},
};

use esp_core::{Asset, DownloadRequest, UseCase, content_type_for, file_name_of};

use crate::DOWNLOAD_COUNT;
use crate::config::*;
use crate::tasks::deferred;
use crate::web::{ASSETS, TEST_DATA, dir_asset, protocol::StatsResponse, test_data_asset};

/// Antwort für statische Assets
///
/// Liefert gefundene Dateien mit Content-Type und Cache-Control aus;
/// Lookup-Misses der Verzeichnis-Routen antworten mit "404 Not found.".
enum AssetResponse {
    Cached(&'static Asset),
    NotFound,
}

impl IntoResponse for AssetResponse {
    async fn write_to<
        R: embedded_io_async::Read,
        W: picoserve::response::ResponseWriter<Error = R::Error>,
    >(
        self,
        connection: picoserve::response::Connection<'_, R>,
        response_writer: W,
    ) -> Result<picoserve::ResponseSent, W::Error> {
        match self {
            AssetResponse::Cached(asset) => {
                picoserve::response::Response::new(
                    picoserve::response::StatusCode::OK,
                    asset.body,
                )
                .with_header("Content-Type", content_type_for(asset.path))
                .with_header("Cache-Control", STATIC_CACHE_CONTROL)
                .write_to(connection, response_writer)
                .await
            }
            AssetResponse::NotFound => {
                not_found_response()
                    .write_to(connection, response_writer)
                    .await
            }
        }
    }
}

/// Antwort für Test-Daten-Downloads
///
/// Downloads werden als Attachment ausgeliefert (Browser speichert die
/// Datei statt sie anzuzeigen). `Busy` signalisiert einen bereits
/// belegten deferred Slot.
enum DownloadResponse {
    Attachment(&'static Asset),
    Busy,
    NotFound,
}

impl IntoResponse for DownloadResponse {
    async fn write_to<
        R: embedded_io_async::Read,
        W: picoserve::response::ResponseWriter<Error = R::Error>,
    >(
        self,
        connection: picoserve::response::Connection<'_, R>,
        response_writer: W,
    ) -> Result<picoserve::ResponseSent, W::Error> {
        match self {
            DownloadResponse::Attachment(asset) => {
                // Content-Disposition Header mit Dateinamen zusammensetzen
                let mut disposition = heapless::String::<DISPOSITION_BUFFER_SIZE>::new();
                let _ = write!(
                    &mut disposition,
                    "attachment; filename=\"{}\"",
                    file_name_of(asset.path)
                );

                picoserve::response::Response::new(
                    picoserve::response::StatusCode::OK,
                    asset.body,
                )
                .with_header("Content-Type", content_type_for(asset.path))
                .with_header("Content-Disposition", disposition.as_str())
                .write_to(connection, response_writer)
                .await
            }
            DownloadResponse::Busy => {
                // Der deferred Slot fasst genau einen Request; weitere
                // uc2-Requests werden abgewiesen statt zu hängen
                picoserve::response::Response::new(
                    picoserve::response::StatusCode::new(503),
                    "Service Unavailable: deferred download slot is busy",
                )
                .with_header("Retry-After", "5")
                .write_to(connection, response_writer)
                .await
            }
            DownloadResponse::NotFound => {
                not_found_response()
                    .write_to(connection, response_writer)
                    .await
            }
        }
    }
}

/// JSON-Antwort für GET /api/stats
///
/// Serialisiert in einen festen Buffer (serde-json-core, kein Heap).
struct StatsJson(StatsResponse);

impl IntoResponse for StatsJson {
    async fn write_to<
        R: embedded_io_async::Read,
        W: picoserve::response::ResponseWriter<Error = R::Error>,
    >(
        self,
        connection: picoserve::response::Connection<'_, R>,
        response_writer: W,
    ) -> Result<picoserve::ResponseSent, W::Error> {
        let mut json_buffer = [0u8; JSON_STATS_BUFFER_SIZE];
        match serde_json_core::to_slice(&self.0, &mut json_buffer) {
            Ok(n) => {
                let json_str = core::str::from_utf8(&json_buffer[..n]).unwrap_or("{}");
                picoserve::response::Response::new(
                    picoserve::response::StatusCode::OK,
                    json_str,
                )
                .with_header("Content-Type", "application/json")
                .write_to(connection, response_writer)
                .await
            }
            Err(_) => {
                picoserve::response::Response::new(
                    picoserve::response::StatusCode::new(500),
                    "JSON serialization failed",
                )
                .write_to(connection, response_writer)
                .await
            }
        }
    }
}

/// 404-Antwort als text/plain
fn not_found_response() -> impl IntoResponse {
    picoserve::response::Response::new(picoserve::response::StatusCode::new(404), "Not found.")
        .with_header("Content-Type", "text/plain")
}

/// Root-Zugriff auf die Startseite umleiten
async fn redirect_to_index() -> impl IntoResponse {
    picoserve::response::Response::new(picoserve::response::StatusCode::new(302), "")
        .with_header("Location", "/index.html")
}

/// uc1: Download im HTTP-Server-Kontext
///
/// Dateiname kommt aus dem Wildcard-Pfadsegment; der Zähler wird vor dem
/// Lookup erhöht (auch Misses zählen als Request).
async fn download_uc1(file_name: String) -> DownloadResponse {
    let count = DOWNLOAD_COUNT.record();
    info!(
        "{} - {}{} requested (uc1).",
        count,
        TEST_DATA_PATH,
        file_name.as_str()
    );

    match test_data_asset(&file_name) {
        Some(asset) => DownloadResponse::Attachment(asset),
        None => DownloadResponse::NotFound,
    }
}

/// uc2: Download deferred in den Main-Loop-Kontext
///
/// Der Handler reicht nur den Dateinamen weiter; Lookup, Zähler und Log
/// laufen im Main-Loop (siehe `tasks::deferred`). Die Antwort schreibt
/// weiterhin dieser Handler, da die Connection ihm gehört.
async fn download_uc2(file_name: String) -> DownloadResponse {
    let request = match DownloadRequest::new(&file_name, UseCase::Uc2) {
        Ok(request) => request,
        // Überlange Namen existieren im Store nicht
        Err(_) => return DownloadResponse::NotFound,
    };

    match deferred::submit(request).await {
        Some(Some(asset)) => DownloadResponse::Attachment(asset),
        Some(None) => DownloadResponse::NotFound,
        None => DownloadResponse::Busy,
    }
}

/// Download der fest verdrahteten Datei (Basic-Variante, ohne Zähler)
async fn download_hardcoded() -> DownloadResponse {
    info!(
        "{}{} requested (uc1).",
        TEST_DATA_PATH, BASIC_TEST_DATA_FILE
    );

    match test_data_asset(BASIC_TEST_DATA_FILE) {
        Some(asset) => DownloadResponse::Attachment(asset),
        None => DownloadResponse::NotFound,
    }
}

/// Serviert die Server-Statistiken als JSON
async fn serve_stats() -> StatsJson {
    StatsJson(StatsResponse {
        downloads: DOWNLOAD_COUNT.current(),
        asset_count: ASSETS.count(),
        asset_bytes: ASSETS.total_bytes(),
        test_data_count: TEST_DATA.count(),
        test_data_bytes: TEST_DATA.total_bytes(),
        uptime_ms: Instant::now().as_millis(),
    })
}

/// Router für die statischen Routen (beide Varianten identisch)
///
/// /index.html und /favicon.png explizit, /images/, /js/ und /style/
/// als Verzeichnis-Routen mit einem Pfadsegment. Nicht registrierte
/// Pfade beantwortet der Router selbst mit 404.
fn static_routes() -> picoserve::Router<impl picoserve::routing::PathRouter> {
    picoserve::Router::new()
        .route("/", get(redirect_to_index))
        .route(
            "/index.html",
            get(|| async {
                match ASSETS.lookup("/index.html") {
                    Some(asset) => AssetResponse::Cached(asset),
                    None => AssetResponse::NotFound,
                }
            }),
        )
        .route(
            "/favicon.png",
            get(|| async {
                match ASSETS.lookup("/favicon.png") {
                    Some(asset) => AssetResponse::Cached(asset),
                    None => AssetResponse::NotFound,
                }
            }),
        )
        .route(
            ("/images", parse_path_segment::<String>()),
            get(|file_name: String| async move {
                match dir_asset("/images/", &file_name) {
                    Some(asset) => AssetResponse::Cached(asset),
                    None => AssetResponse::NotFound,
                }
            }),
        )
        .route(
            ("/js", parse_path_segment::<String>()),
            get(|file_name: String| async move {
                match dir_asset("/js/", &file_name) {
                    Some(asset) => AssetResponse::Cached(asset),
                    None => AssetResponse::NotFound,
                }
            }),
        )
        .route(
            ("/style", parse_path_segment::<String>()),
            get(|file_name: String| async move {
                match dir_asset("/style/", &file_name) {
                    Some(asset) => AssetResponse::Cached(asset),
                    None => AssetResponse::NotFound,
                }
            }),
        )
        .route("/api/stats", get(serve_stats))
}

/// HTTP Server Task - Variante mit Wildcard-Downloads und deferred uc2
///
/// **Task Pool:** Diese Task wird 4x gespawnt für concurrent connections:
/// - Ermöglicht gleichzeitiges Laden von HTML, CSS, JS und Downloads
/// - Verhindert Blockierung wenn eine Connection aktiv ist
///
/// # Parameter
/// - `task_id`: Eindeutige ID für diese Server-Instanz (0..3)
/// - `stack`: embassy-net Stack für Netzwerk-Zugriff
#[embassy_executor::task(pool_size = 4)]
pub async fn http_server_task(task_id: usize, stack: &'static Stack<'static>) {
    info!(
        "HTTP: Server task {} starting on port {}...",
        task_id, WEBSERVER_PORT
    );

    // Router: statische Routen + beide Download-Use-Cases
    let app = static_routes()
        .route(
            ("/download/uc1", parse_path_segment::<String>()),
            get(download_uc1),
        )
        .route(
            ("/download/uc2", parse_path_segment::<String>()),
            get(download_uc2),
        );

    serve(task_id, stack, &app).await;

    info!("HTTP: Server task {} ended", task_id);
}

/// HTTP Server Task - Basic-Variante mit einer fest verdrahteten Route
#[embassy_executor::task(pool_size = 4)]
pub async fn http_server_basic_task(task_id: usize, stack: &'static Stack<'static>) {
    info!(
        "HTTP: Basic server task {} starting on port {}...",
        task_id, WEBSERVER_PORT
    );

    // Router: statische Routen + genau eine Download-Route
    let app = static_routes().route("/download/uc1/lorem.txt", get(download_hardcoded));

    serve(task_id, stack, &app).await;

    info!("HTTP: Basic server task {} ended", task_id);
}

/// Lässt den picoserve-Server auf Port 80 laufen
async fn serve<P: picoserve::routing::PathRouter>(
    task_id: usize,
    stack: &'static Stack<'static>,
    app: &picoserve::Router<P>,
) {
    // Server-Konfiguration
    let config = picoserve::Config::new(picoserve::Timeouts {
        start_read_request: Some(Duration::from_secs(5)),
        read_request: Some(Duration::from_secs(1)),
        write: Some(Duration::from_secs(1)),
        persistent_start_read_request: Some(Duration::from_secs(5)),
    })
    .keep_connection_alive();

    // HTTP-Buffer für Requests/Responses
    let mut http_buffer = [0u8; HTTP_BUFFER_SIZE];

    // TCP-Buffers für Socket
    let mut rx_buffer = [0u8; TCP_RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TCP_TX_BUFFER_SIZE];

    // Server erstellen und auf Port 80 lauschen
    // task_id ermöglicht mehrere concurrent Server-Instanzen
    let server = picoserve::Server::new(app, &config, &mut http_buffer);

    let _ = server
        .listen_and_serve(task_id, *stack, WEBSERVER_PORT, &mut rx_buffer, &mut tx_buffer)
        .await;
}
