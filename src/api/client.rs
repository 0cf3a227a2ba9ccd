//! HTTP API Client
//!
//! Functions for communicating with the MediTrack REST API. The backend
//! contract is pinned to the singular `/medicine` path, username-based
//! login and the `username`/`email`/`phone`/`password` register payload.

use gloo_net::http::{Method, RequestBuilder};
use serde_json::Value;

use crate::api::error::{ApiError, ApiResult};
use crate::state::global::{Medicine, MedicineData, MedicineType, User};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Local storage key for the API base URL override
const API_URL_KEY: &str = "meditrack_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Request Wrapper ============

/// Perform a call against the backend and normalize the response.
///
/// The response body is read as text first; classification of what came
/// back is entirely in [`interpret_body`] so it stays testable without a
/// browser.
async fn request(
    path: &str,
    method: Method,
    body: Option<&Value>,
    token: Option<&str>,
) -> ApiResult<Value> {
    let url = format!("{}{}", get_api_base(), path);

    let mut builder = RequestBuilder::new(&url).method(method);
    if let Some(token) = token {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?,
        None => builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?,
    };

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let ok = response.ok();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    interpret_body(status, ok, &text)
}

/// Classify a response body into a payload or an [`ApiError`].
///
/// Empty bodies count as an empty JSON object. Non-JSON bodies are
/// inspected for an HTML document signature so server-rendered error
/// pages (missing route, crashed backend) get a clearer message than
/// a raw parse failure would.
fn interpret_body(status: u16, ok: bool, text: &str) -> ApiResult<Value> {
    let trimmed = text.trim();

    let parsed: Value = if trimmed.is_empty() {
        Value::Object(serde_json::Map::new())
    } else {
        match serde_json::from_str(trimmed) {
            Ok(value) => value,
            Err(_) if looks_like_html(trimmed) => {
                return Err(match status {
                    404 => ApiError::EndpointNotFound,
                    500 => ApiError::ServerError,
                    status => ApiError::ErrorPage(status),
                });
            }
            Err(_) => {
                return Err(ApiError::Malformed(format!(
                    "unexpected non-JSON body (status {})",
                    status
                )));
            }
        }
    };

    if !ok {
        let message = parsed
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| parsed.get("error").and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        return Err(ApiError::Rejected { status, message });
    }

    Ok(parsed)
}

/// Whether a body looks like an HTML document rather than data
fn looks_like_html(text: &str) -> bool {
    let head = text.trim_start().to_ascii_lowercase();
    head.starts_with("<!doctype") || head.starts_with("<html")
}

// ============ Wire Shapes ============

/// User object as the backend sends it, before normalization
#[derive(Debug, Default, serde::Deserialize)]
struct RawUser {
    #[serde(rename = "_id", default)]
    mongo_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    avatar: Option<String>,
}

impl RawUser {
    /// Resolve the duplicated identifier fields into the canonical model.
    ///
    /// `_id` wins over `id`; a record carrying neither is unusable.
    /// Username falls back to the wire `name` for older backend revisions.
    fn normalize(self) -> ApiResult<User> {
        let id = self
            .mongo_id
            .or(self.id)
            .ok_or_else(|| ApiError::Malformed("user record has no identifier".to_string()))?;
        let username = self.username.or_else(|| self.name.clone()).unwrap_or_default();
        Ok(User {
            id,
            username,
            name: self.name,
            email: self.email,
            avatar: self.avatar,
        })
    }
}

/// Medicine object as the backend sends it, before normalization
#[derive(Debug, Default, serde::Deserialize)]
struct RawMedicine {
    #[serde(rename = "_id", default)]
    mongo_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    dosage: String,
    #[serde(default)]
    frequency: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    user: String,
    #[serde(rename = "createdAt", default)]
    created_at: Option<String>,
}

impl RawMedicine {
    fn normalize(self) -> ApiResult<Medicine> {
        let id = self
            .mongo_id
            .or(self.id)
            .ok_or_else(|| ApiError::Malformed("medicine record has no identifier".to_string()))?;
        Ok(Medicine {
            id,
            name: self.name,
            dosage: self.dosage,
            frequency: self.frequency,
            kind: self
                .kind
                .as_deref()
                .map(MedicineType::from_wire)
                .unwrap_or_default(),
            user: self.user,
            created_at: self.created_at,
        })
    }
}

/// Normalized payload of a successful login or registration
#[derive(Debug, Clone, PartialEq)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

fn auth_from_value(value: Value) -> ApiResult<AuthPayload> {
    let token = value
        .get("token")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::Malformed("auth response has no token".to_string()))?
        .to_string();
    let user = user_from_value(
        value
            .get("user")
            .cloned()
            .ok_or_else(|| ApiError::Malformed("auth response has no user".to_string()))?,
    )?;
    Ok(AuthPayload { token, user })
}

fn user_from_value(value: Value) -> ApiResult<User> {
    let raw: RawUser = serde_json::from_value(value)
        .map_err(|e| ApiError::Malformed(format!("user record: {}", e)))?;
    raw.normalize()
}

fn medicine_from_value(value: Value) -> ApiResult<Medicine> {
    let raw: RawMedicine = serde_json::from_value(value)
        .map_err(|e| ApiError::Malformed(format!("medicine record: {}", e)))?;
    raw.normalize()
}

/// Normalize the medicine list payload.
///
/// A non-array payload becomes an empty list; entries that fail to parse
/// or carry no identifier are dropped rather than failing the whole load.
fn medicines_from_value(value: Value) -> Vec<Medicine> {
    match value {
        Value::Array(entries) => entries
            .into_iter()
            .filter_map(|entry| medicine_from_value(entry).ok())
            .collect(),
        _ => Vec::new(),
    }
}

// ============ Auth ============

/// Log in with username and password
pub async fn login(username: &str, password: &str) -> ApiResult<AuthPayload> {
    let body = serde_json::json!({
        "username": username,
        "password": password,
    });

    let value = request("/auth/login", Method::POST, Some(&body), None).await?;
    auth_from_value(value)
}

/// Register a new account
pub async fn register(
    username: &str,
    email: Option<&str>,
    phone: Option<&str>,
    password: &str,
) -> ApiResult<AuthPayload> {
    #[derive(serde::Serialize)]
    struct RegisterRequest<'a> {
        username: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        email: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        phone: Option<&'a str>,
        password: &'a str,
    }

    let body = serde_json::to_value(RegisterRequest {
        username,
        email,
        phone,
        password,
    })
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let value = request("/auth/register", Method::POST, Some(&body), None).await?;
    auth_from_value(value)
}

/// Request a password reset link
///
/// Returns the backend's message when it sends one; the caller decides
/// what to show the user.
pub async fn forgot_password(email: &str) -> ApiResult<Option<String>> {
    let body = serde_json::json!({ "email": email });

    let value = request("/auth/forgot-password", Method::POST, Some(&body), None).await?;
    Ok(value
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string))
}

// ============ Profile ============

/// Fetch the authenticated user's profile
pub async fn fetch_profile(token: &str) -> ApiResult<User> {
    let value = request("/user/profile", Method::GET, None, Some(token)).await?;
    user_from_value(value)
}

/// Update the authenticated user's display name and email
pub async fn update_profile(
    token: &str,
    name: Option<&str>,
    email: Option<&str>,
) -> ApiResult<User> {
    #[derive(serde::Serialize)]
    struct ProfileRequest<'a> {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        email: Option<&'a str>,
    }

    let body = serde_json::to_value(ProfileRequest { name, email })
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let value = request("/user/profile", Method::PUT, Some(&body), Some(token)).await?;
    user_from_value(value)
}

// ============ Medicines ============

/// Fetch the user's medicine list
pub async fn fetch_medicines(token: &str) -> ApiResult<Vec<Medicine>> {
    let value = request("/medicine", Method::GET, None, Some(token)).await?;
    Ok(medicines_from_value(value))
}

/// Create a medicine
pub async fn add_medicine(token: &str, data: &MedicineData) -> ApiResult<Medicine> {
    let body = serde_json::to_value(data).map_err(|e| ApiError::Network(e.to_string()))?;

    let value = request("/medicine", Method::POST, Some(&body), Some(token)).await?;
    medicine_from_value(value)
}

/// Update an existing medicine
pub async fn update_medicine(token: &str, id: &str, data: &MedicineData) -> ApiResult<Medicine> {
    let body = serde_json::to_value(data).map_err(|e| ApiError::Network(e.to_string()))?;

    let path = format!("/medicine/{}", id);
    let value = request(&path, Method::PUT, Some(&body), Some(token)).await?;
    medicine_from_value(value)
}

/// Delete a medicine
pub async fn delete_medicine(token: &str, id: &str) -> ApiResult<()> {
    let path = format!("/medicine/{}", id);
    request(&path, Method::DELETE, None, Some(token)).await?;
    Ok(())
}
