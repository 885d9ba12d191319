use actix_web::{body::{EitherBody, MessageBody}, dev::{Payload, ServiceRequest, ServiceResponse}, http::header::AUTHORIZATION, middleware::Next, web, Error, FromRequest, HttpMessage, HttpRequest, ResponseError};
use futures_util::future::{ready, Ready};

use crate::{errors::ApiError, schema::{Principal, Role}, utils::decode_token, GlobalState};

pub async fn admin_gate(
    req:ServiceRequest,
    next: Next<impl MessageBody + 'static>
) -> Result<ServiceResponse<impl MessageBody>, Error>{
    authenticate(Role::Admin, req, next).await
}

pub async fn user_gate(
    req:ServiceRequest,
    next: Next<impl MessageBody + 'static>
) -> Result<ServiceResponse<impl MessageBody>, Error>{
    authenticate(Role::User, req, next).await
}

/// Lets the request through only with a bearer token signed by `role`'s secret.
/// Rejections are answered here instead of reaching the handler.
async fn authenticate<B: MessageBody + 'static>(
    role:Role,
    req:ServiceRequest,
    next: Next<B>
) -> Result<ServiceResponse<EitherBody<B>>, Error>{

    match verify_request(role, &req) {
        Ok(principal) => {
            req.extensions_mut().insert(principal);
            next.call(req).await.map(ServiceResponse::map_into_left_body)
        },
        Err(e) => {
            let response = e.error_response();
            Ok(req.into_response(response).map_into_right_body())
        }
    }
}

fn verify_request(role:Role, req:&ServiceRequest) -> Result<Principal, ApiError>{

    let token = bearer_token(req).ok_or(ApiError::Unauthenticated)?;

    let state = req.app_data::<web::Data<GlobalState>>()
        .ok_or(ApiError::Internal("Internal Server Error"))?;

    let claims = decode_token(token, state.config.jwt_secret(role)).map_err(|e| {
        tracing::debug!(%role, error = %e, "rejected token");
        ApiError::InvalidToken
    })?;

    if claims.role != role {
        tracing::debug!(%role, claimed = %claims.role, "token role mismatch");
        return Err(ApiError::InvalidToken);
    }

    Ok(Principal{username: claims.sub, role})
}

fn bearer_token(req:&ServiceRequest) -> Option<&str>{
    req.headers()
        .get(AUTHORIZATION)?
        .to_str().ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl FromRequest for Principal {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // only present behind one of the gates
        ready(req.extensions().get::<Principal>().cloned().ok_or(ApiError::Unauthenticated))
    }
}
