//! Request builders for integration tests.

use axum::{
    body::Body,
    http::{
        header::{CONTENT_TYPE, COOKIE},
        Request,
    },
};

const BOUNDARY: &str = "shopfront-test-boundary";

/// A multipart part: field name, optional `(file name, content type)` and content.
pub type Part<'a> = (&'a str, Option<(&'a str, &'a str)>, &'a str);

/// `GET uri`, optionally with a session cookie.
pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::get(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }

    builder.body(Body::empty()).expect("valid request")
}

/// URL-encoded `POST uri` with `fields`, optionally with a session cookie.
pub fn form_post(uri: &str, cookie: Option<&str>, fields: &[(&str, &str)]) -> Request<Body> {
    let body = fields
        .iter()
        .map(|(name, value)| format!("{}={}", encode(name), encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    let mut builder = Request::post(uri).header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }

    builder.body(Body::from(body)).expect("valid request")
}

/// Multipart `POST uri` with `parts`, optionally with a session cookie.
pub fn multipart_post(uri: &str, cookie: Option<&str>, parts: &[Part<'_>]) -> Request<Body> {
    let mut body = String::new();
    for (name, file, content) in parts {
        body.push_str(&format!("--{}\r\n", BOUNDARY));
        match file {
            Some((file_name, content_type)) => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n",
                name, file_name, content_type
            )),
            None => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{}\"\r\n",
                name
            )),
        }
        body.push_str("\r\n");
        body.push_str(content);
        body.push_str("\r\n");
    }
    body.push_str(&format!("--{}--\r\n", BOUNDARY));

    let mut builder = Request::post(uri).header(
        CONTENT_TYPE,
        format!("multipart/form-data; boundary={}", BOUNDARY),
    );
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }

    builder.body(Body::from(body)).expect("valid request")
}

fn encode(value: &str) -> String {
    value
        .bytes()
        .map(|byte| match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'*' => {
                (byte as char).to_string()
            }
            b' ' => "+".to_string(),
            _ => format!("%{:02X}", byte),
        })
        .collect()
}
