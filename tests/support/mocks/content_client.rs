// tests/support/mocks/content_client.rs
use async_trait::async_trait;
use mokkan_reader::application::ports::content::{
    ContentClient, ContentClientError, QueryParams,
};
use serde_json::Value;
use std::sync::Mutex;

/// クエリ文字列の部分一致で応答を返すコンテンツクライアント
#[derive(Default)]
pub struct ScriptedContentClient {
    responses: Vec<(String, Value)>,
    queries: Mutex<Vec<(String, QueryParams)>>,
    created: Mutex<Vec<Value>>,
}

impl ScriptedContentClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// `fragment` を含むクエリに `result` を返す
    pub fn respond(mut self, fragment: &str, result: Value) -> Self {
        self.responses.push((fragment.to_owned(), result));
        self
    }

    pub fn queries(&self) -> Vec<(String, QueryParams)> {
        self.queries.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<Value> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentClient for ScriptedContentClient {
    async fn fetch(&self, query: &str, params: &QueryParams) -> Result<Value, ContentClientError> {
        self.queries
            .lock()
            .unwrap()
            .push((query.to_owned(), params.clone()));
        self.responses
            .iter()
            .find(|(fragment, _)| query.contains(fragment.as_str()))
            .map(|(_, result)| result.clone())
            .ok_or_else(|| ContentClientError::Status {
                status: 400,
                message: format!("unscripted query: {query}"),
            })
    }

    async fn create(&self, document: Value) -> Result<(), ContentClientError> {
        self.created.lock().unwrap().push(document);
        Ok(())
    }
}
