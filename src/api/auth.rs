//! Auth Endpoints
//!
//! Login and registration calls. Both ride the cookie channel plus the
//! anti-forgery header; neither uses the bearer token.

use crate::models::{Credentials, LoginResponse, Registration};

use super::{csrf_cookie, plan_request, send, ApiError, Method};

/// POST /auth/login — returns the token issued by the backend
pub async fn login(credentials: &Credentials) -> Result<String, ApiError> {
    let plan = plan_request(
        Method::Post,
        "/auth/login",
        csrf_cookie().as_deref(),
        None,
        Some(credentials),
    )?;
    let response = send(plan).await?;
    let body: LoginResponse = response.json()?;
    Ok(body.token)
}

/// POST /auth/register — returns the response status (201 on success)
pub async fn register(registration: &Registration) -> Result<u16, ApiError> {
    let plan = plan_request(
        Method::Post,
        "/auth/register",
        csrf_cookie().as_deref(),
        None,
        Some(registration),
    )?;
    let response = send(plan).await?;
    Ok(response.status)
}
