//! REST client for a Firestore database.
//!
//! Wraps the v1 REST API using [`reqwest`]:
//! - ordered / filtered reads go through `documents:runQuery`
//! - single reads are `GET {collection}/{id}`, with 404 meaning absent
//! - inserts are `POST {collection}` and let the server assign the key
//!
//! Firestore wraps every field in a typed envelope (`{"stringValue": ..}`);
//! [`encode_value`] and [`decode_value`] translate to and from
//! [`FieldValue`].

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::config::FirestoreConfig;
use crate::document::{Collection, Document, FieldValue, Fields, Query, CREATED_AT};
use crate::error::StoreError;
use crate::probe::StoreConnector;
use crate::DocumentStore;

/// HTTP client for one Firestore database.
pub struct FirestoreStore {
    client: reqwest::Client,
    /// `{base}/projects/{project}/databases/{database}/documents`
    documents_url: String,
    access_token: Option<String>,
    api_key: Option<String>,
}

impl fmt::Debug for FirestoreStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Credentials stay out of logs.
        f.debug_struct("FirestoreStore")
            .field("documents_url", &self.documents_url)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

/// Document resource as returned by the REST API.
#[derive(Debug, Deserialize)]
struct RawDocument {
    /// Full resource name; the key is the last path segment.
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

/// One element of the `runQuery` response stream. Entries without a
/// `document` only report progress and are skipped.
#[derive(Debug, Deserialize)]
struct RunQueryEntry {
    document: Option<RawDocument>,
}

impl FirestoreStore {
    /// Build a client for the configured project.
    ///
    /// Fails with [`StoreError::NotConfigured`] when no project is set.
    pub fn new(config: &FirestoreConfig) -> Result<Self, StoreError> {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Build a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        config: &FirestoreConfig,
    ) -> Result<Self, StoreError> {
        let project_id = config
            .project_id
            .as_deref()
            .ok_or_else(|| StoreError::NotConfigured("FIRESTORE_PROJECT_ID is not set".into()))?;

        let documents_url = format!(
            "{}/projects/{}/databases/{}/documents",
            config.base_url.trim_end_matches('/'),
            project_id,
            config.database,
        );
        Url::parse(&documents_url)
            .map_err(|e| StoreError::NotConfigured(format!("invalid document store URL: {e}")))?;

        Ok(Self {
            client,
            documents_url,
            access_token: config.access_token.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// URL of a collection, or of a document within it when `id` is given.
    /// The id is pushed as a single percent-encoded path segment.
    fn resource_url(&self, collection: Collection, id: Option<&str>) -> Result<Url, StoreError> {
        let mut url = Url::parse(&self.documents_url)
            .map_err(|e| StoreError::NotConfigured(format!("invalid document store URL: {e}")))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| StoreError::NotConfigured("document store URL cannot be a base".into()))?;
            segments.push(collection.name());
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = match &self.api_key {
            Some(key) => request.query(&[("key", key)]),
            None => request,
        };
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, or return an
    /// [`StoreError::Api`] containing the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StoreError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Read a successful response body as `T`. A body that is not the
    /// expected JSON is [`StoreError::Decode`]; transport failures while
    /// reading stay [`StoreError::Request`].
    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, StoreError> {
        let bytes = Self::ensure_success(response).await?.bytes().await?;
        parse_body(&bytes)
    }
}

fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, StoreError> {
    serde_json::from_slice(bytes).map_err(|e| StoreError::Decode(e.to_string()))
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    async fn query(&self, query: &Query) -> Result<Vec<Document>, StoreError> {
        let body = json!({ "structuredQuery": structured_query(query) });

        let request = self
            .client
            .post(format!("{}:runQuery", self.documents_url))
            .json(&body);
        let response = self.authorize(request).send().await?;
        let entries: Vec<RunQueryEntry> = Self::read_json(response).await?;

        Ok(entries
            .into_iter()
            .filter_map(|entry| entry.document)
            .map(into_document)
            .collect())
    }

    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Document>, StoreError> {
        if id.is_empty() || id.contains('/') {
            return Ok(None);
        }
        let url = self.resource_url(collection, Some(id))?;
        let response = self.authorize(self.client.get(url)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let raw: RawDocument = Self::read_json(response).await?;
        Ok(Some(into_document(raw)))
    }

    async fn add(&self, collection: Collection, fields: Fields) -> Result<String, StoreError> {
        let url = self.resource_url(collection, None)?;
        let body = json!({ "fields": encode_fields(&fields) });

        let response = self.authorize(self.client.post(url).json(&body)).send().await?;
        let raw: RawDocument = Self::read_json(response).await?;
        Ok(document_key(&raw.name).to_string())
    }
}

// ---------------------------------------------------------------------------
// Connector
// ---------------------------------------------------------------------------

/// Connects to the Firestore database named by a [`FirestoreConfig`].
pub struct FirestoreConnector {
    config: FirestoreConfig,
    client: reqwest::Client,
}

impl FirestoreConnector {
    pub fn new(config: FirestoreConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl StoreConnector for FirestoreConnector {
    async fn connect(&self) -> Result<Arc<dyn DocumentStore>, StoreError> {
        let store = FirestoreStore::with_client(self.client.clone(), &self.config)?;
        Ok(Arc::new(store))
    }
}

// ---------------------------------------------------------------------------
// Query / value codec
// ---------------------------------------------------------------------------

fn structured_query(query: &Query) -> Value {
    let mut structured = json!({
        "from": [{ "collectionId": query.collection.name() }],
        "orderBy": [{
            "field": { "fieldPath": CREATED_AT },
            "direction": "DESCENDING",
        }],
    });
    if let Some(flag) = query.flag {
        structured["where"] = json!({
            "fieldFilter": {
                "field": { "fieldPath": flag },
                "op": "EQUAL",
                "value": { "booleanValue": true },
            }
        });
    }
    if let Some(limit) = query.limit {
        structured["limit"] = json!(limit);
    }
    structured
}

fn document_key(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

fn into_document(raw: RawDocument) -> Document {
    let id = document_key(&raw.name).to_string();
    let fields = raw
        .fields
        .iter()
        .filter_map(|(name, value)| match decode_value(value) {
            Some(decoded) => Some((name.clone(), decoded)),
            None => {
                tracing::debug!(document = %id, field = %name, "Skipping unsupported field value");
                None
            }
        })
        .collect();
    Document { id, fields }
}

fn encode_fields(fields: &Fields) -> Map<String, Value> {
    fields
        .iter()
        .map(|(name, value)| (name.clone(), encode_value(value)))
        .collect()
}

/// Wrap a [`FieldValue`] in its Firestore type envelope.
pub fn encode_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Null => json!({ "nullValue": null }),
        FieldValue::Bool(b) => json!({ "booleanValue": b }),
        // 64-bit integers travel as strings.
        FieldValue::Integer(n) => json!({ "integerValue": n.to_string() }),
        FieldValue::Double(d) => json!({ "doubleValue": d }),
        FieldValue::String(s) => json!({ "stringValue": s }),
        FieldValue::Timestamp(ts) => json!({ "timestampValue": ts.to_rfc3339() }),
    }
}

/// Unwrap a Firestore type envelope. Returns `None` for value kinds with
/// no [`FieldValue`] counterpart (maps, arrays, bytes, geo points).
pub fn decode_value(value: &Value) -> Option<FieldValue> {
    let obj = value.as_object()?;
    let (kind, inner) = obj.iter().next()?;
    match kind.as_str() {
        "nullValue" => Some(FieldValue::Null),
        "booleanValue" => inner.as_bool().map(FieldValue::Bool),
        "integerValue" => match inner {
            Value::String(s) => s.parse().ok().map(FieldValue::Integer),
            other => other.as_i64().map(FieldValue::Integer),
        },
        "doubleValue" => inner.as_f64().map(FieldValue::Double),
        "stringValue" | "referenceValue" => inner.as_str().map(FieldValue::from),
        "timestampValue" => inner
            .as_str()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|ts| FieldValue::Timestamp(ts.with_timezone(&Utc))),
        _ => None,
    }
}
