//! Page payloads for the single-page front-end
//!
//! Every page response is `{ component, props, url }`. The props always carry
//! the shared `locale`, `dir` and `auth.user` values of the current request.

use crate::server::middleware::{current_subject, locale_context};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;
use serde_json::{Map, Value, json};

/// A page payload under construction
#[derive(Debug, Clone)]
pub struct Page {
    component: &'static str,
    props: Map<String, Value>,
    status: StatusCode,
}

/// Serialized page payload
#[derive(Debug, Serialize)]
pub struct PagePayload {
    pub component: &'static str,
    pub props: Map<String, Value>,
    pub url: String,
}

impl Page {
    pub fn new(component: &'static str) -> Self {
        Self {
            component,
            props: Map::new(),
            status: StatusCode::OK,
        }
    }

    /// Add a single prop
    pub fn prop(mut self, key: &str, value: Value) -> Self {
        self.props.insert(key.to_string(), value);
        self
    }

    /// Add every field of a JSON object as a prop; other values are ignored
    pub fn merge(mut self, value: Value) -> Self {
        if let Value::Object(fields) = value {
            self.props.extend(fields);
        }
        self
    }

    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Build the payload, adding the shared props of `req`
    pub fn payload(self, req: &HttpRequest) -> PagePayload {
        let context = locale_context(req);
        let user = current_subject(req).map(|subject| subject.user);

        let mut props = self.props;
        props.insert("locale".to_string(), json!(context.locale.code()));
        props.insert("dir".to_string(), json!(context.locale.direction().as_str()));
        props.insert("auth".to_string(), json!({ "user": user }));

        PagePayload {
            component: self.component,
            props,
            url: req.uri().to_string(),
        }
    }

    pub fn render(self, req: &HttpRequest) -> HttpResponse {
        let status = self.status;
        HttpResponse::build(status).json(self.payload(req))
    }
}
