#![allow(dead_code)]

use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use mongodb::bson::oid::ObjectId;
use swimshop_api::api::create_router;
use swimshop_api::db::{
    DeleteOutcome, DocumentStore, Filter, InsertOutcome, ReplaceOutcome, StoreError, StoreHandle,
    StoreResult,
};
use swimshop_api::models::{Client, Document, SwimmingTool};
use swimshop_api::AppState;

/// Router over empty in-memory collections.
pub fn memory_app() -> Router {
    create_router(AppState::new(StoreHandle::in_memory()))
}

#[derive(Debug, Clone, Copy)]
pub enum Script {
    /// Every call fails.
    Fail,
    /// Inserts are not acknowledged; everything else matches nothing.
    Unacknowledged,
    /// Every call succeeds and matches nothing.
    Empty,
}

/// Store with canned answers that counts how often it was called.
pub struct ScriptedStore<D> {
    script: Script,
    calls: Arc<AtomicUsize>,
    _document: PhantomData<fn() -> D>,
}

impl<D> ScriptedStore<D> {
    pub fn new(script: Script, calls: Arc<AtomicUsize>) -> Self {
        Self {
            script,
            calls,
            _document: PhantomData,
        }
    }

    fn answer<T>(&self, operation: &'static str, ok: T) -> StoreResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script {
            Script::Fail => Err(StoreError::operation(
                operation,
                "scripted",
                anyhow::anyhow!("connection reset by peer"),
            )),
            Script::Unacknowledged | Script::Empty => Ok(ok),
        }
    }
}

#[async_trait]
impl<D: Document> DocumentStore<D> for ScriptedStore<D> {
    async fn find(&self, _filter: Filter) -> StoreResult<Vec<D>> {
        self.answer("find", Vec::new())
    }

    async fn insert_one(&self, _document: D) -> StoreResult<InsertOutcome> {
        let acknowledged = !matches!(self.script, Script::Unacknowledged);
        self.answer(
            "insert_one",
            InsertOutcome {
                acknowledged,
                inserted_id: acknowledged.then(ObjectId::new),
            },
        )
    }

    async fn replace_one(&self, _id: ObjectId, _document: D) -> StoreResult<ReplaceOutcome> {
        self.answer("replace_one", ReplaceOutcome::default())
    }

    async fn delete_one(&self, _id: ObjectId) -> StoreResult<DeleteOutcome> {
        self.answer("delete_one", DeleteOutcome::default())
    }
}

/// Router over scripted stores, plus the shared call counter.
pub fn scripted_app(script: Script) -> (Router, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let store = StoreHandle::new(
        Arc::new(ScriptedStore::<Client>::new(script, calls.clone())),
        Arc::new(ScriptedStore::<SwimmingTool>::new(script, calls.clone())),
    );
    (create_router(AppState::new(store)), calls)
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
