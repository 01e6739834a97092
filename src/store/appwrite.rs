use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;

use super::{Direction, Document, DocumentStore, Filter, FilterOp, Query, StoreError};

/// Page size used when a query has no explicit limit
const PAGE_SIZE: usize = 100;

/// Appwrite databases API client
///
/// Maps the generic document operations onto Appwrite's REST endpoints:
/// - `GET/PATCH/DELETE .../documents/{id}` for single documents
/// - `GET .../documents?queries[]=...` for filtered queries
/// - `PATCH .../documents/{id}/{attribute}/increment` for counters
///
/// Appwrite's `$id` is exposed as `id`; other `$` metadata is dropped.
pub struct AppwriteStore {
    base_url: String,
    api_key: String,
    project_id: String,
    database_id: String,
    client: Client,
}

impl AppwriteStore {
    /// Create a new Appwrite client
    pub fn new(
        base_url: String,
        api_key: String,
        project_id: String,
        database_id: String,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            project_id,
            database_id,
            client,
        })
    }

    fn documents_url(&self, collection: &str) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.base_url.trim_end_matches('/'),
            self.database_id,
            collection
        )
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!(
            "{}/{}",
            self.documents_url(collection),
            urlencoding::encode(id)
        )
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
    }

    /// Fetch one page of documents, returning Appwrite's `total` alongside it
    async fn fetch_page(
        &self,
        collection: &str,
        queries: &[String],
    ) -> Result<(u64, Vec<Document>), StoreError> {
        let query_string = queries
            .iter()
            .map(|q| format!("queries[]={}", urlencoding::encode(q)))
            .collect::<Vec<_>>()
            .join("&");

        let mut url = self.documents_url(collection);
        if !query_string.is_empty() {
            url = format!("{}?{}", url, query_string);
        }

        tracing::debug!("Querying {} with {:?}", collection, queries);

        let response = self.authorized(self.client.get(&url)).send().await?;
        let response = Self::check(response, "query documents").await?;
        let json: Value = response.json().await?;

        let total = json.get("total").and_then(|t| t.as_u64()).unwrap_or(0);

        let documents = json
            .get("documents")
            .and_then(|d| d.as_array())
            .ok_or_else(|| StoreError::InvalidResponse("Missing documents array".into()))?;

        let docs = documents.iter().map(normalize).collect::<Result<Vec<_>, _>>()?;

        Ok((total, docs))
    }

    async fn check(response: Response, action: &str) -> Result<Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read body".to_string());
        tracing::error!("Appwrite failed to {}: {} - {}", action, status, body);

        Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => StoreError::Unauthorized,
            StatusCode::NOT_FOUND => StoreError::NotFound(action.to_string()),
            StatusCode::CONFLICT => StoreError::Conflict(action.to_string()),
            _ => StoreError::ApiError(format!("Failed to {}: {}", action, status)),
        })
    }
}

/// Render a filter in Appwrite's query string syntax, e.g. `equal("categoryId", ["art"])`
pub fn filter_to_query(filter: &Filter) -> String {
    let method = match filter.op {
        FilterOp::Equal => "equal",
        FilterOp::NotEqual => "notEqual",
        FilterOp::LessThan => "lessThan",
        FilterOp::LessThanEqual => "lessThanEqual",
        FilterOp::GreaterThan => "greaterThan",
        FilterOp::GreaterThanEqual => "greaterThanEqual",
        FilterOp::ArrayContains => "contains",
    };
    format!("{}(\"{}\", [{}])", method, filter.field, filter.value)
}

/// Render every part of a query as Appwrite query strings
pub fn build_queries(query: &Query) -> Vec<String> {
    let mut queries: Vec<String> = query.filters.iter().map(filter_to_query).collect();

    if let Some(order) = &query.order_by {
        let method = match order.direction {
            Direction::Asc => "orderAsc",
            Direction::Desc => "orderDesc",
        };
        queries.push(format!("{}(\"{}\")", method, order.field));
    }

    if let Some(limit) = query.limit {
        queries.push(format!("limit({})", limit));
    }

    queries
}

/// Flatten an Appwrite document into a plain document with `id`
fn normalize(doc: &Value) -> Result<Document, StoreError> {
    let obj = doc
        .as_object()
        .ok_or_else(|| StoreError::InvalidResponse("Document is not an object".into()))?;

    let mut out: Document = match obj.get("data").and_then(Value::as_object) {
        Some(data) => data.clone(),
        None => obj
            .iter()
            .filter(|(k, _)| !k.starts_with('$'))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
    };

    if let Some(id) = obj.get("$id").cloned() {
        out.insert("id".to_string(), id);
    }

    Ok(out)
}

#[async_trait]
impl DocumentStore for AppwriteStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let url = self.document_url(collection, id);
        tracing::debug!("Fetching document from: {}", url);

        let response = self.authorized(self.client.get(&url)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = Self::check(response, "fetch document").await?;
        let json: Value = response.json().await?;
        normalize(&json).map(Some)
    }

    async fn query(&self, collection: &str, query: &Query) -> Result<Vec<Document>, StoreError> {
        let queries = build_queries(query);

        if query.limit.is_some() {
            let (_, docs) = self.fetch_page(collection, &queries).await?;
            return Ok(docs);
        }

        // Without an explicit limit Appwrite only returns its default page,
        // so walk the pages until `total` documents have been read
        let mut docs = Vec::new();
        loop {
            let mut page_queries = queries.clone();
            page_queries.push(format!("limit({})", PAGE_SIZE));
            page_queries.push(format!("offset({})", docs.len()));

            let (total, page) = self.fetch_page(collection, &page_queries).await?;
            let page_len = page.len();
            docs.extend(page);

            if page_len == 0 || docs.len() as u64 >= total {
                break;
            }
        }

        tracing::debug!("Queried {} documents from {}", docs.len(), collection);

        Ok(docs)
    }

    async fn create(&self, collection: &str, data: Document) -> Result<String, StoreError> {
        let url = self.documents_url(collection);
        let payload = json!({ "documentId": "unique()", "data": data });

        let response = self.authorized(self.client.post(&url)).json(&payload).send().await?;
        let response = Self::check(response, "create document").await?;
        let json: Value = response.json().await?;

        json.get("$id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| StoreError::InvalidResponse("Missing $id in created document".into()))
    }

    async fn create_with_id(
        &self,
        collection: &str,
        id: &str,
        data: Document,
    ) -> Result<(), StoreError> {
        let url = self.documents_url(collection);
        let payload = json!({ "documentId": id, "data": data });

        let response = self.authorized(self.client.post(&url)).json(&payload).send().await?;
        Self::check(response, "create document").await?;

        tracing::debug!("Created document {}/{}", collection, id);
        Ok(())
    }

    async fn update(&self, collection: &str, id: &str, patch: Document) -> Result<(), StoreError> {
        let url = self.document_url(collection, id);
        let payload = json!({ "data": patch });

        let response = self.authorized(self.client.patch(&url)).json(&payload).send().await?;
        Self::check(response, "update document").await?;
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let url = self.document_url(collection, id);

        let response = self.authorized(self.client.delete(&url)).send().await?;
        Self::check(response, "delete document").await?;
        Ok(())
    }

    async fn increment(
        &self,
        collection: &str,
        id: &str,
        field: &str,
        delta: i64,
    ) -> Result<(), StoreError> {
        let url = format!("{}/{}/increment", self.document_url(collection, id), field);
        let payload = json!({ "value": delta });

        let response = self.authorized(self.client.patch(&url)).json(&payload).send().await?;
        Self::check(response, "increment attribute").await?;
        Ok(())
    }
}
