use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use tokio::sync::RwLock;

use super::{Direction, Document, DocumentStore, Filter, FilterOp, Query, StoreError};

/// In-process document store
///
/// Collections keep insertion order so unordered queries are stable.
/// Field names may use dotted paths (`location.city`) to reach nested values.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection
    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, |docs| docs.len())
    }
}

fn doc_id(doc: &Document) -> Option<&str> {
    doc.get("id").and_then(Value::as_str)
}

fn lookup<'a>(doc: &'a Document, path: &str) -> Option<&'a Value> {
    let mut parts = path.split('.');
    let mut current = doc.get(parts.next()?)?;
    for part in parts {
        current = current.get(part)?;
    }
    Some(current)
}

fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Order two JSON values of the same kind, `None` across kinds.
///
/// Two RFC 3339 strings compare as instants; a timestamp sorts before any
/// other string; the rest compare lexically.
fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            Some(x.as_f64()?.total_cmp(&y.as_f64()?))
        }
        (Value::String(x), Value::String(y)) => Some(match (parse_instant(x), parse_instant(y)) {
            (Some(dx), Some(dy)) => dx.cmp(&dy),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => x.cmp(y),
        }),
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        _ => None,
    }
}

fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Total order used for `order_by`: values rank by JSON kind first, equal
/// instants written differently fall back to their text
fn sort_order(a: &Value, b: &Value) -> Ordering {
    match compare_values(a, b) {
        Some(Ordering::Equal) => match (a, b) {
            (Value::String(x), Value::String(y)) => x.cmp(y),
            _ => Ordering::Equal,
        },
        Some(ord) => ord,
        None => kind_rank(a).cmp(&kind_rank(b)),
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    compare_values(a, b) == Some(Ordering::Equal) || a == b
}

fn matches_filter(doc: &Document, filter: &Filter) -> bool {
    let field = lookup(doc, &filter.field);

    match filter.op {
        FilterOp::Equal => field.is_some_and(|v| values_equal(v, &filter.value)),
        FilterOp::NotEqual => !field.is_some_and(|v| values_equal(v, &filter.value)),
        FilterOp::ArrayContains => field
            .and_then(Value::as_array)
            .is_some_and(|items| items.iter().any(|v| values_equal(v, &filter.value))),
        FilterOp::LessThan
        | FilterOp::LessThanEqual
        | FilterOp::GreaterThan
        | FilterOp::GreaterThanEqual => {
            let Some(ordering) = field.and_then(|v| compare_values(v, &filter.value)) else {
                return false;
            };
            match filter.op {
                FilterOp::LessThan => ordering == Ordering::Less,
                FilterOp::LessThanEqual => ordering != Ordering::Greater,
                FilterOp::GreaterThan => ordering == Ordering::Greater,
                _ => ordering != Ordering::Less,
            }
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| doc_id(d) == Some(id)))
            .cloned())
    }

    async fn query(&self, collection: &str, query: &Query) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        let Some(docs) = collections.get(collection) else {
            return Ok(vec![]);
        };

        let mut results: Vec<Document> = docs
            .iter()
            .filter(|doc| query.filters.iter().all(|f| matches_filter(doc, f)))
            .cloned()
            .collect();

        if let Some(order) = &query.order_by {
            // Documents missing the field sort last in either direction
            results.sort_by(|a, b| {
                match (lookup(a, &order.field), lookup(b, &order.field)) {
                    (Some(x), Some(y)) => {
                        let ord = sort_order(x, y);
                        match order.direction {
                            Direction::Asc => ord,
                            Direction::Desc => ord.reverse(),
                        }
                    }
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            });
        }

        if let Some(limit) = query.limit {
            results.truncate(limit);
        }

        tracing::trace!("Memory query on {} returned {} documents", collection, results.len());

        Ok(results)
    }

    async fn create(&self, collection: &str, data: Document) -> Result<String, StoreError> {
        let id = uuid::Uuid::new_v4().to_string();
        self.create_with_id(collection, &id, data).await?;
        Ok(id)
    }

    async fn create_with_id(
        &self,
        collection: &str,
        id: &str,
        mut data: Document,
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();

        if docs.iter().any(|d| doc_id(d) == Some(id)) {
            return Err(StoreError::Conflict(format!("{}/{}", collection, id)));
        }

        data.insert("id".to_string(), Value::String(id.to_string()));
        docs.push(data);
        Ok(())
    }

    async fn update(&self, collection: &str, id: &str, patch: Document) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| doc_id(d) == Some(id)))
            .ok_or_else(|| StoreError::NotFound(format!("{}/{}", collection, id)))?;

        for (key, value) in patch {
            if key != "id" {
                doc.insert(key, value);
            }
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let docs = collections
            .get_mut(collection)
            .ok_or_else(|| StoreError::NotFound(format!("{}/{}", collection, id)))?;

        let before = docs.len();
        docs.retain(|d| doc_id(d) != Some(id));
        if docs.len() == before {
            return Err(StoreError::NotFound(format!("{}/{}", collection, id)));
        }
        Ok(())
    }

    async fn increment(
        &self,
        collection: &str,
        id: &str,
        field: &str,
        delta: i64,
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| doc_id(d) == Some(id)))
            .ok_or_else(|| StoreError::NotFound(format!("{}/{}", collection, id)))?;

        let current = match doc.get(field) {
            None | Some(Value::Null) => 0,
            Some(v) => v.as_i64().ok_or_else(|| {
                StoreError::InvalidResponse(format!("Field {} is not an integer", field))
            })?,
        };
        doc.insert(field.to_string(), Value::from(current + delta));
        Ok(())
    }
}
