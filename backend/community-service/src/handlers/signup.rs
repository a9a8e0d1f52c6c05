/// Signup handler - POST /api/signup
use actix_web::{web, HttpResponse};

use crate::error::Result;
use crate::models::SignupRequest;
use crate::AppState;

pub async fn signup(
    state: web::Data<AppState>,
    req: web::Json<SignupRequest>,
) -> Result<HttpResponse> {
    let response = state.signup.signup(req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
