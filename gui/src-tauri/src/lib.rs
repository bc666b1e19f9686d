use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::info;

/// Response wrapper for all Tauri commands
#[derive(Serialize)]
pub struct Response<T: Serialize> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> Response<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(msg.into()),
        }
    }

    fn from_result(result: howlong::Result<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::err(e.to_string()),
        }
    }
}

#[tauri::command]
fn ping() -> Response<String> {
    Response::ok("pong".to_string())
}

#[tauri::command]
fn current_time() -> Response<String> {
    Response::ok(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true))
}

#[tauri::command]
fn calculate_elapsed_time(event_time: String) -> Response<String> {
    info!(%event_time, "calculate_elapsed_time");
    Response::from_result(howlong::calculate_elapsed_time(&event_time))
}

#[tauri::command]
fn wedding(name: String) -> Response<String> {
    info!(%name, "wedding");
    Response::ok(howlong::wedding(&name))
}

/// Directory the rolling log files go into. The CLI's `log-path` command
/// prints the newest file found here.
fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("howlong")
        .join("logs")
}

fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let appender = tracing_appender::rolling::daily(log_dir(), "howlong.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    guard
}

pub fn run() {
    let _guard = init_logging();

    tauri::Builder::default()
        .setup(|_app| {
            info!("howlong GUI started");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            ping,
            current_time,
            calculate_elapsed_time,
            wedding
        ])
        .run(tauri::generate_context!())
        .expect("error running howlong GUI");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_ok_serializes_without_error_field() {
        let json = serde_json::to_string(&Response::ok("1y ago".to_string())).unwrap();
        assert!(json.contains("\"ok\":true"));
        assert!(json.contains("\"data\":\"1y ago\""));
        assert!(!json.contains("error"));
    }

    #[test]
    fn response_err_serializes_without_data_field() {
        let json = serde_json::to_string(&Response::<String>::err("boom")).unwrap();
        assert!(json.contains("\"ok\":false"));
        assert!(json.contains("\"error\":\"boom\""));
        assert!(!json.contains("data"));
    }

    #[test]
    fn calculate_elapsed_time_rejects_malformed_input() {
        let resp = calculate_elapsed_time("not-a-date".to_string());
        assert!(!resp.ok);
        assert!(resp.error.unwrap().contains("invalid time format"));
    }

    #[test]
    fn calculate_elapsed_time_returns_ago_string() {
        let resp = calculate_elapsed_time("2023-08-23T00:00:00Z".to_string());
        assert!(resp.ok);
        assert!(resp.data.unwrap().ends_with("ago"));
    }

    #[test]
    fn wedding_addresses_name() {
        let resp = wedding("Alice".to_string());
        assert!(resp.ok);
        assert!(resp.data.unwrap().contains("since Alice"));
    }
}
