//! URL-encoded body parsing stage.

use axum::{
    body::Body,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    middleware::Next,
    response::Response,
    Form,
};

use crate::{error::Error, model::request::FormFields};

/// Parses URL-encoded request bodies into [`FormFields`].
///
/// Every request leaves this stage with a `FormFields` extension; it is empty
/// unless the body was `application/x-www-form-urlencoded`. The body is consumed.
pub async fn parse_form_body(request: Request, next: Next) -> Result<Response, Error> {
    if !is_urlencoded(&request) {
        let mut request = request;
        request.extensions_mut().insert(FormFields::default());

        return Ok(next.run(request).await);
    }

    let (parts, body) = request.into_parts();
    let Form(fields) =
        Form::<Vec<(String, String)>>::from_request(Request::from_parts(parts.clone(), body), &())
            .await?;

    let mut request = Request::from_parts(parts, Body::empty());
    request.extensions_mut().insert(FormFields::from(fields));

    Ok(next.run(request).await)
}

fn is_urlencoded(request: &Request) -> bool {
    request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}
