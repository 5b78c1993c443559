//! Thin wrapper over the hosted table backend's REST interface.
//!
//! Query construction and error classification are plain functions; only the
//! transport itself touches the network.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{ContentError, MessageDraft, Project, SiteProfile, SkillCategory};
use crate::config::{self, BackendConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// A read query against one table: column projection plus optional equality
/// filter, ordering, and row limit.
#[derive(Debug, Clone)]
pub struct Select<'a> {
    table: &'a str,
    columns: &'a str,
    filter: Option<(&'a str, &'a str)>,
    order: Option<(&'a str, Direction)>,
    limit: Option<u32>,
}

impl<'a> Select<'a> {
    pub fn all(table: &'a str) -> Self {
        Select {
            table,
            columns: "*",
            filter: None,
            order: None,
            limit: None,
        }
    }

    pub fn columns(mut self, columns: &'a str) -> Self {
        self.columns = columns;
        self
    }

    pub fn eq(mut self, column: &'a str, value: &'a str) -> Self {
        self.filter = Some((column, value));
        self
    }

    pub fn order(mut self, column: &'a str, direction: Direction) -> Self {
        self.order = Some((column, direction));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn url(&self, base_url: &str) -> String {
        let mut url = format!(
            "{}/rest/v1/{}?select={}",
            base_url.trim_end_matches('/'),
            self.table,
            self.columns
        );
        if let Some((column, value)) = self.filter {
            url.push_str(&format!("&{column}=eq.{value}"));
        }
        if let Some((column, direction)) = self.order {
            url.push_str(&format!("&order={column}.{}", direction.as_str()));
        }
        if let Some(limit) = self.limit {
            url.push_str(&format!("&limit={limit}"));
        }
        url
    }
}

/// Structured error payload the backend attaches to failed requests.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Map a failed read onto the error taxonomy. Absence is detected from the
/// backend's structured codes (`PGRST116`: not exactly one row for a
/// singular select, `42P01`: relation missing) and the 404/406 statuses that
/// carry them, never from message text.
pub(crate) fn classify_error(status: u16, body: &str) -> ContentError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    if matches!(parsed.code.as_deref(), Some("PGRST116") | Some("42P01")) {
        return ContentError::NotFound;
    }
    if status == 404 || status == 406 {
        return ContentError::NotFound;
    }
    backend_error(status, parsed)
}

/// Failed writes always surface the backend's message verbatim; absence
/// classification only applies to reads.
pub(crate) fn write_error(status: u16, body: &str) -> ContentError {
    backend_error(status, serde_json::from_str(body).unwrap_or_default())
}

fn backend_error(status: u16, parsed: ErrorBody) -> ContentError {
    match parsed.message {
        Some(message) if !message.is_empty() => ContentError::Backend(message),
        _ => ContentError::Backend(format!("backend request failed (status {status})")),
    }
}

#[derive(Debug, Clone)]
pub struct ContentClient {
    base_url: String,
    api_key: String,
}

impl ContentClient {
    pub fn new(config: BackendConfig) -> Self {
        ContentClient {
            base_url: config.base_url.to_string(),
            api_key: config.api_key.to_string(),
        }
    }

    pub fn from_env() -> Self {
        ContentClient::new(config::backend())
    }

    pub async fn select<T: DeserializeOwned>(
        &self,
        query: Select<'_>,
    ) -> Result<Vec<T>, ContentError> {
        let request = self.with_auth(Request::get(&query.url(&self.base_url)));
        let response = send(request).await?;
        decode(response).await
    }

    /// Fetch the single row of a one-row table. A table with no rows (or
    /// more than one) resolves to `NotFound`.
    pub async fn select_one<T: DeserializeOwned>(&self, table: &str) -> Result<T, ContentError> {
        let query = Select::all(table).limit(1);
        let request = self
            .with_auth(Request::get(&query.url(&self.base_url)))
            .header("Accept", "application/vnd.pgrst.object+json");
        let response = send(request).await?;
        decode(response).await
    }

    pub async fn insert<T: Serialize>(&self, table: &str, record: &T) -> Result<(), ContentError> {
        let url = format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), table);
        let request = self
            .with_auth(Request::post(&url))
            .header("Prefer", "return=minimal")
            .json(record)
            .map_err(|err| ContentError::Backend(err.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|err| ContentError::Backend(err.to_string()))?;
        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(write_error(response.status(), &body));
        }
        Ok(())
    }

    fn with_auth(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header("Authorization", &format!("Bearer {}", self.api_key))
    }
}

async fn send(request: RequestBuilder) -> Result<Response, ContentError> {
    let response = request
        .send()
        .await
        .map_err(|err| ContentError::Backend(err.to_string()))?;
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(classify_error(response.status(), &body));
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ContentError> {
    response
        .json()
        .await
        .map_err(|err| ContentError::Decode(err.to_string()))
}

// The four operations the sections actually issue.
impl ContentClient {
    pub async fn site_profile(&self) -> Result<SiteProfile, ContentError> {
        self.select_one("personal_info").await
    }

    pub async fn projects(&self) -> Result<Vec<Project>, ContentError> {
        self.select(Select::all("projects").order("created_at", Direction::Desc))
            .await
    }

    pub async fn skill_categories(&self) -> Result<Vec<SkillCategory>, ContentError> {
        self.select(
            Select::all("skill_categories")
                .columns("*,skills(id,name)")
                .order("sort_order", Direction::Asc),
        )
        .await
    }

    pub async fn send_message(&self, draft: &MessageDraft) -> Result<(), ContentError> {
        self.insert("messages", draft).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_url_with_order_desc() {
        let url = Select::all("projects")
            .order("created_at", Direction::Desc)
            .url("https://api.example.com");
        assert_eq!(
            url,
            "https://api.example.com/rest/v1/projects?select=*&order=created_at.desc"
        );
    }

    #[test]
    fn select_url_with_embedded_columns_and_ascending_order() {
        let url = Select::all("skill_categories")
            .columns("*,skills(id,name)")
            .order("sort_order", Direction::Asc)
            .url("https://api.example.com");
        assert_eq!(
            url,
            "https://api.example.com/rest/v1/skill_categories?select=*,skills(id,name)&order=sort_order.asc"
        );
    }

    #[test]
    fn select_url_with_filter_and_limit() {
        let url = Select::all("projects")
            .columns("id")
            .eq("category", "Web")
            .limit(1)
            .url("https://api.example.com/");
        assert_eq!(
            url,
            "https://api.example.com/rest/v1/projects?select=id&category=eq.Web&limit=1"
        );
    }

    #[test]
    fn missing_row_code_classifies_as_not_found() {
        let body = r#"{"code":"PGRST116","message":"JSON object requested, multiple (or no) rows returned"}"#;
        assert_eq!(classify_error(406, body), ContentError::NotFound);
        assert_eq!(classify_error(200, body), ContentError::NotFound);
    }

    #[test]
    fn missing_relation_code_classifies_as_not_found() {
        let body = r#"{"code":"42P01","message":"relation \"public.personal_info\" does not exist"}"#;
        assert_eq!(classify_error(404, body), ContentError::NotFound);
    }

    #[test]
    fn other_failures_keep_the_backend_message() {
        let body = r#"{"code":"23505","message":"duplicate key value"}"#;
        assert_eq!(
            classify_error(409, body),
            ContentError::Backend("duplicate key value".to_string())
        );
    }

    #[test]
    fn unparseable_body_falls_back_to_status() {
        assert_eq!(
            classify_error(500, "<html>bad gateway</html>"),
            ContentError::Backend("backend request failed (status 500)".to_string())
        );
    }

    #[test]
    fn bare_not_found_status_without_body() {
        assert_eq!(classify_error(404, ""), ContentError::NotFound);
    }

    #[test]
    fn failed_write_keeps_message_even_for_missing_relation() {
        let body = r#"{"code":"42P01","message":"relation \"public.messages\" does not exist"}"#;
        assert_eq!(
            write_error(404, body),
            ContentError::Backend(r#"relation "public.messages" does not exist"#.to_string())
        );
    }

    #[test]
    fn failed_write_without_body_falls_back_to_status() {
        assert_eq!(
            write_error(404, ""),
            ContentError::Backend("backend request failed (status 404)".to_string())
        );
    }
}
