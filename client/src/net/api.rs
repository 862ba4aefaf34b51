//! Backend client for auth, table, rpc, and storage calls.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to `ApiError::Unavailable` since
//! the session lives in the browser.
//!
//! ERROR HANDLING
//! ==============
//! All calls return `Result<_, ApiError>`; callers log and toast. Nothing
//! here retries or distinguishes transient from permanent failures.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::query::{Order, TableQuery, cond_eq, rpc_path};
use super::types::{
    NewObject, NewTrade, Object, ObjectUpdate, Profile, Session, TokenResponse, Trade, TradeStatus,
    TradeStatusUpdate,
};
use crate::config::BackendConfig;

/// Embedded joins for the trade dashboard and notification feed.
const TRADE_SELECT: &str = "id, created_at, updated_at, status, mensagem,
    proponente_id, receptor_id, objeto_oferecido_id, objeto_desejado_id, location_id,
    proponente:profiles!proponente_id(id, nome_completo, avatar_url, email),
    receptor:profiles!receptor_id(id, nome_completo, avatar_url, email),
    objeto_oferecido:objects!objeto_oferecido_id(id, titulo, categoria, imagens),
    objeto_desejado:objects!objeto_desejado_id(id, titulo, categoria, imagens)";

const OBJECT_WITH_OWNER_SELECT: &str = "*, owner:profiles(*)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HttpMethod {
    Get,
    Post,
    Patch,
}

// =============================================================================
// QUERY TARGETS
// =============================================================================

pub(crate) fn available_objects_query() -> TableQuery {
    TableQuery::new("objects")
        .select(OBJECT_WITH_OWNER_SELECT)
        .eq("status", "disponivel")
        .order("created_at", Order::Desc)
}

pub(crate) fn owned_objects_query(owner_id: &str) -> TableQuery {
    TableQuery::new("objects")
        .select(OBJECT_WITH_OWNER_SELECT)
        .eq("owner_id", owner_id)
        .order("created_at", Order::Desc)
}

pub(crate) fn object_by_id_query(object_id: &str) -> TableQuery {
    TableQuery::new("objects").select(OBJECT_WITH_OWNER_SELECT).eq("id", object_id)
}

pub(crate) fn profile_query(user_id: &str) -> TableQuery {
    TableQuery::new("profiles").select("*").eq("id", user_id)
}

fn involving_user(user_id: &str) -> [String; 2] {
    [cond_eq("proponente_id", user_id), cond_eq("receptor_id", user_id)]
}

pub(crate) fn trades_for_user_query(user_id: &str) -> TableQuery {
    TableQuery::new("trades")
        .select(TRADE_SELECT)
        .or(&involving_user(user_id))
        .order("created_at", Order::Desc)
}

pub(crate) fn recent_trades_query(user_id: &str, limit: usize) -> TableQuery {
    TableQuery::new("trades")
        .select(TRADE_SELECT)
        .or(&involving_user(user_id))
        .order_nulls_last("updated_at", Order::Desc)
        .order("created_at", Order::Desc)
        .limit(limit)
}

/// Storage path for an uploaded image: `<user_id>/<random>.<ext>`.
pub fn image_object_path(user_id: &str, file_name: &str, random: &str) -> String {
    match file_extension(file_name) {
        Some(ext) => format!("{user_id}/{random}.{ext}"),
        None => format!("{user_id}/{random}"),
    }
}

/// Lower-cased extension after the last dot, if any.
pub fn file_extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() || ext.contains('/') {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

fn sign_up_payload(email: &str, password: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "password": password,
        "data": { "nome_completo": name }
    })
}

fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

// =============================================================================
// CLIENT
// =============================================================================

/// Handle to the hosted backend, optionally carrying a user access token.
#[derive(Clone, Debug)]
pub struct BackendClient {
    config: BackendConfig,
    access_token: Option<String>,
}

impl BackendClient {
    pub fn new(config: BackendConfig, access_token: Option<String>) -> Self {
        Self { config, access_token }
    }

    /// Client using build-time settings and the given session's token.
    ///
    /// # Errors
    ///
    /// Returns an error when the build-time backend settings are invalid.
    pub fn for_session(session: Option<&Session>) -> Result<Self, ApiError> {
        let config = BackendConfig::from_build_env()?;
        Ok(Self::new(config, session.map(|s| s.access_token.clone())))
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn bearer(&self) -> &str {
        self.access_token.as_deref().unwrap_or(&self.config.anon_key)
    }

    fn require_session(&self) -> Result<(), ApiError> {
        if self.access_token.is_some() { Ok(()) } else { Err(ApiError::NotAuthenticated) }
    }

    // -------------------------------------------------------------------------
    // Auth
    // -------------------------------------------------------------------------

    /// Exchange email + password for a session.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or rejected credentials.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let url = self.config.auth_url("token?grant_type=password");
        let body = serde_json::json!({ "email": email, "password": password });
        let resp: TokenResponse = self.send_json(HttpMethod::Post, &url, Some(&body), None).await?;
        Ok(Session::from_token_response(resp, now_secs()))
    }

    /// Register an account; the backend creates the profile from `name`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or when the backend rejects the sign-up.
    pub async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<(), ApiError> {
        let url = self.config.auth_url("signup");
        let body = sign_up_payload(email, password, name);
        self.send_no_content(HttpMethod::Post, &url, Some(&body), None).await
    }

    /// Trade a refresh token for a fresh session.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or when the refresh token is no longer valid.
    pub async fn refresh_session(&self, refresh_token: &str) -> Result<Session, ApiError> {
        let url = self.config.auth_url("token?grant_type=refresh_token");
        let body = serde_json::json!({ "refresh_token": refresh_token });
        let resp: TokenResponse = self.send_json(HttpMethod::Post, &url, Some(&body), None).await?;
        Ok(Session::from_token_response(resp, now_secs()))
    }

    /// Revoke the current access token.
    ///
    /// # Errors
    ///
    /// Returns an error when not signed in or on transport failure.
    pub async fn sign_out(&self) -> Result<(), ApiError> {
        self.require_session()?;
        let url = self.config.auth_url("logout");
        self.send_no_content::<()>(HttpMethod::Post, &url, None, None).await
    }

    // -------------------------------------------------------------------------
    // Profiles
    // -------------------------------------------------------------------------

    /// Fetch one profile by user id.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or when the row does not exist.
    pub async fn fetch_profile(&self, user_id: &str) -> Result<Profile, ApiError> {
        let url = self.config.rest_url(&profile_query(user_id).to_path());
        self.get_single(&url).await
    }

    /// Average rating of a user, via the `get_user_rating` procedure.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn user_rating(&self, user_id: &str) -> Result<f64, ApiError> {
        let url = self.config.rest_url(&rpc_path("get_user_rating"));
        let body = serde_json::json!({ "user_id": user_id });
        let rating: Option<f64> = self.send_json(HttpMethod::Post, &url, Some(&body), None).await?;
        Ok(rating.unwrap_or(0.0))
    }

    // -------------------------------------------------------------------------
    // Objects
    // -------------------------------------------------------------------------

    /// Every available object with its owner, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or decode failure.
    pub async fn list_available_objects(&self) -> Result<Vec<Object>, ApiError> {
        let url = self.config.rest_url(&available_objects_query().to_path());
        self.get_json(&url).await
    }

    /// Objects owned by `owner_id`, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or decode failure.
    pub async fn list_owned_objects(&self, owner_id: &str) -> Result<Vec<Object>, ApiError> {
        let url = self.config.rest_url(&owned_objects_query(owner_id).to_path());
        self.get_json(&url).await
    }

    /// One object with its owner.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or when the row does not exist.
    pub async fn fetch_object(&self, object_id: &str) -> Result<Object, ApiError> {
        let url = self.config.rest_url(&object_by_id_query(object_id).to_path());
        self.get_single(&url).await
    }

    /// Insert an object and return the stored row.
    ///
    /// # Errors
    ///
    /// Returns an error when not signed in, on transport failure, or when the
    /// backend returns no row.
    pub async fn create_object(&self, object: &NewObject) -> Result<Object, ApiError> {
        self.require_session()?;
        let url = self.config.rest_url("objects");
        let rows: Vec<Object> = self
            .send_json(HttpMethod::Post, &url, Some(object), Some("return=representation"))
            .await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| ApiError::Decode("insert returned no rows".to_owned()))
    }

    /// Patch an object's editable columns.
    ///
    /// # Errors
    ///
    /// Returns an error when not signed in or on transport failure.
    pub async fn update_object(&self, object_id: &str, update: &ObjectUpdate) -> Result<(), ApiError> {
        self.require_session()?;
        let url = self.config.rest_url(&TableQuery::new("objects").eq("id", object_id).to_path());
        self.send_no_content(HttpMethod::Patch, &url, Some(update), Some("return=minimal")).await
    }

    // -------------------------------------------------------------------------
    // Trades
    // -------------------------------------------------------------------------

    /// Every trade where the user proposes or receives, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or decode failure.
    pub async fn list_trades_for(&self, user_id: &str) -> Result<Vec<Trade>, ApiError> {
        let url = self.config.rest_url(&trades_for_user_query(user_id).to_path());
        self.get_json(&url).await
    }

    /// The `limit` most recently active trades involving the user.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or decode failure.
    pub async fn list_recent_trades_for(&self, user_id: &str, limit: usize) -> Result<Vec<Trade>, ApiError> {
        let url = self.config.rest_url(&recent_trades_query(user_id, limit).to_path());
        self.get_json(&url).await
    }

    /// Insert a trade proposal.
    ///
    /// # Errors
    ///
    /// Returns an error when not signed in or on transport failure.
    pub async fn create_trade(&self, trade: &NewTrade) -> Result<(), ApiError> {
        self.require_session()?;
        let url = self.config.rest_url("trades");
        self.send_no_content(HttpMethod::Post, &url, Some(trade), Some("return=minimal")).await
    }

    /// Set a trade's status. Whether the caller may do so is the backend's call.
    ///
    /// # Errors
    ///
    /// Returns an error when not signed in or on transport failure.
    pub async fn update_trade_status(&self, trade_id: &str, status: TradeStatus) -> Result<(), ApiError> {
        self.require_session()?;
        let url = self.config.rest_url(&TableQuery::new("trades").eq("id", trade_id).to_path());
        let body = TradeStatusUpdate { status, updated_at: chrono::Utc::now() };
        self.send_no_content(HttpMethod::Patch, &url, Some(&body), Some("return=minimal")).await
    }

    // -------------------------------------------------------------------------
    // Storage
    // -------------------------------------------------------------------------

    /// Upload one image file and return its public URL.
    ///
    /// # Errors
    ///
    /// Returns an error when not signed in or when the upload is rejected.
    #[cfg(feature = "hydrate")]
    pub async fn upload_image(&self, object_path: &str, file: &web_sys::File) -> Result<String, ApiError> {
        use crate::config::IMAGE_BUCKET;

        self.require_session()?;
        let url = self.config.storage_upload_url(IMAGE_BUCKET, object_path);
        let content_type = file.type_();
        let content_type = if content_type.is_empty() { "application/octet-stream".to_owned() } else { content_type };
        let request = self
            .builder(HttpMethod::Post, &url)
            .header("Content-Type", &content_type)
            .header("x-upsert", "false")
            .body(file.clone())?;
        let resp = request.send().await?;
        ensure_ok(resp).await?;
        Ok(self.config.storage_public_url(IMAGE_BUCKET, object_path))
    }

    // -------------------------------------------------------------------------
    // Transport
    // -------------------------------------------------------------------------

    #[cfg(feature = "hydrate")]
    fn builder(&self, method: HttpMethod, url: &str) -> gloo_net::http::RequestBuilder {
        let method = match method {
            HttpMethod::Get => gloo_net::http::Method::GET,
            HttpMethod::Post => gloo_net::http::Method::POST,
            HttpMethod::Patch => gloo_net::http::Method::PATCH,
        };
        gloo_net::http::RequestBuilder::new(url)
            .method(method)
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &format!("Bearer {}", self.bearer()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        self.send_json::<(), T>(HttpMethod::Get, url, None, None).await
    }

    /// `GET` expecting exactly one row.
    async fn get_single<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .builder(HttpMethod::Get, url)
                .header("Accept", "application/vnd.pgrst.object+json")
                .send()
                .await?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, self.bearer());
            Err(ApiError::Unavailable)
        }
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<&B>,
        prefer: Option<&str>,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.dispatch(method, url, body, prefer).await?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, url, body.is_some(), prefer, self.bearer());
            Err(ApiError::Unavailable)
        }
    }

    async fn send_no_content<B: Serialize>(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<&B>,
        prefer: Option<&str>,
    ) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.dispatch(method, url, body, prefer).await?;
            ensure_ok(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, url, body.is_some(), prefer, self.bearer());
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    async fn dispatch<B: Serialize>(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<&B>,
        prefer: Option<&str>,
    ) -> Result<gloo_net::http::Response, ApiError> {
        let mut builder = self.builder(method, url);
        if let Some(prefer) = prefer {
            builder = builder.header("Prefer", prefer);
        }
        let request = match body {
            Some(body) => builder.json(body)?,
            None => builder.build()?,
        };
        Ok(request.send().await?)
    }
}

#[cfg(feature = "hydrate")]
async fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let resp = ensure_ok(resp).await?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
