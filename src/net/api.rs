//! REST API helpers for the dashboard backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since the API is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so fetch
//! failures degrade into flash notices without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Channel, TaskStats, TaskSummary};

#[cfg(any(test, feature = "hydrate"))]
fn tasks_endpoint(status: Option<&str>, limit: u32) -> String {
    match status {
        Some(status) => format!("/api/v1/tasks?status={status}&limit={limit}"),
        None => format!("/api/v1/tasks?limit={limit}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn task_endpoint(task_id: &str) -> String {
    format!("/api/v1/tasks/{task_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

/// Fetch aggregate task counters from `/api/v1/tasks/stats`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server
/// responds with a non-OK status.
pub async fn fetch_stats() -> Result<TaskStats, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/v1/tasks/stats")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("stats", resp.status()));
        }
        resp.json::<TaskStats>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// List tasks from `/api/v1/tasks`, optionally filtered by status.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server
/// responds with a non-OK status.
pub async fn list_tasks(status: Option<&str>, limit: u32) -> Result<Vec<TaskSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = tasks_endpoint(status, limit);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("tasks", resp.status()));
        }
        resp.json::<Vec<TaskSummary>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (status, limit);
        Err("not available on server".to_owned())
    }
}

/// List configured channels from `/api/v1/channels`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server
/// responds with a non-OK status.
pub async fn list_channels() -> Result<Vec<Channel>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/v1/channels")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("channels", resp.status()));
        }
        resp.json::<Vec<Channel>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Cancel a task via `DELETE /api/v1/tasks/{task_id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server
/// responds with a non-OK status.
pub async fn cancel_task(task_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = task_endpoint(task_id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("cancel", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = task_id;
        Err("not available on server".to_owned())
    }
}
