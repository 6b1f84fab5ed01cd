use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use std::borrow::Cow;

pub enum Body<T: serde::Serialize> {
    Json(T),
    Html(String),
    Text(String),
    Empty,
}

pub struct Success<T: serde::Serialize = ()> {
    pub status: StatusCode,
    pub body: Body<T>,
    pub location: Option<Cow<'static, str>>,
}

impl<T: serde::Serialize> Success<T> {
    pub fn json(data: T) -> Self {
        Self { status: StatusCode::OK, body: Body::Json(data), location: None }
    }
}

impl Success {
    pub fn html(markup: String) -> Self {
        Self { status: StatusCode::OK, body: Body::Html(markup), location: None }
    }

    pub fn text(content: String) -> Self {
        Self { status: StatusCode::OK, body: Body::Text(content), location: None }
    }

    /// 302 Found, the status browsers follow with a GET after a form post.
    pub fn redirect(to: impl Into<Cow<'static, str>>) -> Self {
        Self { status: StatusCode::FOUND, body: Body::Empty, location: Some(to.into()) }
    }
}

impl<T: serde::Serialize> actix_web::Responder for Success<T> {
    type Body = actix_web::body::BoxBody;

    fn respond_to(self, _req: &actix_web::HttpRequest) -> HttpResponse<Self::Body> {
        let mut response = HttpResponse::build(self.status);

        if let Some(location) = self.location {
            response.insert_header((header::LOCATION, location.into_owned()));
        }

        match self.body {
            Body::Json(data) => response.json(data),
            Body::Html(markup) => response.content_type("text/html; charset=utf-8").body(markup),
            Body::Text(content) => response.content_type("text/plain; charset=utf-8").body(content),
            Body::Empty => response.finish(),
        }
    }
}
