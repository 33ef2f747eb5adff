//! Tests for the request pipeline as a whole.
//!
//! These drive the full application through `oneshot` and check what the
//! stages contribute before a route handler runs: view locals, identity
//! resolution, upload interception and the not-found and error pages.

mod locals;
mod not_found;
mod upload;

use axum::http::StatusCode;
use shopfront_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{self, request, TestContextExt};
