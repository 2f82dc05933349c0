use axum::{
    extract::{Path, Query, State},
    response::Json,
    Router,
    routing::{delete, get, post},
};
use serde_json::Value;
use tracing::debug;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandResponse, ListTitlesCommand, ListTitlesCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchBooksCommandResponse};
use crate::catalog::command::statistics_cmd::{StatisticsCommand, StatisticsCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/books", post(add_book).get(list_books).delete(remove_book_by_query))
        .route("/books/search", get(search_books))
        .route("/books/titles", get(list_titles))
        .route("/books/:title", delete(remove_book))
        .route("/stats", get(statistics))
        .with_state(state)
}

pub async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    debug!(store = ?state.config.store, library_file = ?state.config.library_file, "add book");
    let res = AddBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub async fn remove_book(
    State(state): State<AppState>,
    Path(title): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    remove(state, RemoveBookCommandRequest::new(title)).await
}

// DELETE /books?title= reaches titles a path segment cannot carry, such as ""
pub async fn remove_book_by_query(
    State(state): State<AppState>,
    Query(req): Query<RemoveBookCommandRequest>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    remove(state, req).await
}

async fn remove(state: AppState, req: RemoveBookCommandRequest) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    debug!(store = ?state.config.store, library_file = ?state.config.library_file, title = req.title.as_str(), "remove book");
    let res = RemoveBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub async fn search_books(
    State(state): State<AppState>,
    Query(req): Query<SearchBooksCommandRequest>) -> Result<Json<SearchBooksCommandResponse>, ServerError> {
    let res = SearchBooksCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(state.catalog).execute(()).await?;
    Ok(Json(res))
}

pub async fn list_titles(
    State(state): State<AppState>) -> Result<Json<ListTitlesCommandResponse>, ServerError> {
    let res = ListTitlesCommand::new(state.catalog).execute(()).await?;
    Ok(Json(res))
}

pub async fn statistics(
    State(state): State<AppState>) -> Result<Json<StatisticsCommandResponse>, ServerError> {
    let res = StatisticsCommand::new(state.catalog).execute(()).await?;
    Ok(Json(res))
}
