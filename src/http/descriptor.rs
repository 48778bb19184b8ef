//! Outbound call description consumed by [`super::ApiClient::send`].

#[cfg(test)]
#[path = "descriptor_test.rs"]
mod tests;

use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};

/// Path, method, query parameters and body for one backend call.
///
/// Serialization problems are kept on the descriptor rather than returned,
/// so they surface through the client's failure pipeline like any other
/// local fault.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    method: Method,
    path: String,
    query: Map<String, Value>,
    body: Option<Value>,
    fault: Option<String>,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Map::new(), body: None, fault: None }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Merge the fields of `params` (a struct or map) into the query string.
    #[must_use]
    pub fn with_query<T: Serialize + ?Sized>(mut self, params: &T) -> Self {
        match serde_json::to_value(params) {
            Ok(Value::Object(fields)) => self.query.extend(fields),
            Ok(Value::Null) => {}
            Ok(other) => self.record_fault(format!("query parameters must be an object, got {other}")),
            Err(error) => self.record_fault(format!("query parameters: {error}")),
        }
        self
    }

    /// Set the JSON body.
    #[must_use]
    pub fn with_body<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => self.body = Some(value),
            Err(error) => self.record_fault(format!("request body: {error}")),
        }
        self
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn query(&self) -> &Map<String, Value> {
        &self.query
    }

    #[must_use]
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn body_mut(&mut self) -> Option<&mut Value> {
        self.body.as_mut()
    }

    /// First local fault recorded while building, if any.
    #[must_use]
    pub fn fault(&self) -> Option<&str> {
        self.fault.as_deref()
    }

    /// Flatten the query map into string pairs. `null` values are dropped;
    /// arrays and objects are not valid query values.
    ///
    /// # Errors
    ///
    /// Returns a description of the first non-scalar parameter.
    pub fn query_pairs(&self) -> Result<Vec<(String, String)>, String> {
        let mut pairs = Vec::with_capacity(self.query.len());
        for (key, value) in &self.query {
            let rendered = match value {
                Value::Null => continue,
                Value::String(text) => text.clone(),
                Value::Bool(flag) => flag.to_string(),
                Value::Number(number) => number.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(format!("query parameter `{key}` must be a scalar"));
                }
            };
            pairs.push((key.clone(), rendered));
        }
        Ok(pairs)
    }

    fn record_fault(&mut self, description: String) {
        if self.fault.is_none() {
            self.fault = Some(description);
        }
    }
}
