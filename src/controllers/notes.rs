//! Notes REST API — the five CRUD endpoints under `/notes`.
//!
//! Handlers parse the typed payload, hand it to the store, and map the
//! outcome to a status code: 400 with a field→messages body for
//! validation failures, 404 with a generic message for missing ids.

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::errors::StoreError;
use crate::models::NotePayload;
use crate::AppState;

fn error_response(err: StoreError) -> HttpResponse {
    match err {
        StoreError::Validation(errors) => HttpResponse::BadRequest().json(serde_json::json!({
            "errors": errors
        })),
        StoreError::NotFound => HttpResponse::NotFound().json(serde_json::json!({
            "message": "note not found"
        })),
    }
}

async fn create_note(
    state: web::Data<AppState>,
    body: web::Json<NotePayload>,
) -> impl Responder {
    match state.store.create(&body.into_inner()) {
        Ok(note) => HttpResponse::Created().json(note),
        Err(e) => error_response(e),
    }
}

#[derive(Debug, Deserialize)]
struct ListNotesQuery {
    q: Option<String>,
}

async fn list_notes(
    state: web::Data<AppState>,
    query: web::Query<ListNotesQuery>,
) -> impl Responder {
    let notes = state.store.list(query.q.as_deref());
    HttpResponse::Ok().json(notes)
}

async fn get_note(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    match state.store.get(path.into_inner()) {
        Ok(note) => HttpResponse::Ok().json(note),
        Err(e) => error_response(e),
    }
}

async fn update_note(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<NotePayload>,
) -> impl Responder {
    match state.store.update(path.into_inner(), &body.into_inner()) {
        Ok(note) => HttpResponse::Ok().json(note),
        Err(e) => error_response(e),
    }
}

async fn delete_note(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    match state.store.delete(path.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "note deleted"
        })),
        Err(e) => error_response(e),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    // {id:\d+} keeps non-integer segments from matching these routes at all
    cfg.service(
        web::scope("/notes")
            .route("", web::post().to(create_note))
            .route("", web::get().to(list_notes))
            .route("/{id:\\d+}", web::get().to(get_note))
            .route("/{id:\\d+}", web::put().to(update_note))
            .route("/{id:\\d+}", web::delete().to(delete_note)),
    );
}
