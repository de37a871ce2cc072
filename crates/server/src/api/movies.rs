//! Movie CRUD endpoints

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;

use data_loader::{Movie, MovieId, MoviePatch, NewMovie, Year};

use crate::AppState;
use crate::api_error::ApiError;
use crate::catalog::MovieFilter;

/// Optional filters of `GET /movies`
#[derive(Debug, Default, Deserialize)]
pub struct MovieQuery {
    pub year: Option<String>,
    pub winner: Option<String>,
}

impl MovieQuery {
    /// `year` wins over `winner`; an empty `year` is ignored
    fn filter(&self) -> Result<MovieFilter, ApiError> {
        if let Some(year) = self.year.as_deref().filter(|y| !y.is_empty()) {
            let year: Year = year
                .trim()
                .parse()
                .map_err(|_| ApiError::BadRequest("Invalid year parameter".to_owned()))?;
            return Ok(MovieFilter::Year(year));
        }
        if self.winner.as_deref() == Some("true") {
            return Ok(MovieFilter::Winners);
        }
        Ok(MovieFilter::All)
    }
}

/// Body of `POST /movies` and `PUT /movies/{id}`.
///
/// Fields are optional here so that a missing one produces our own 400
/// message instead of a deserializer error.
#[derive(Debug, Default, Deserialize)]
pub struct MovieBody {
    pub year: Option<Year>,
    pub title: Option<String>,
    pub studios: Option<String>,
    pub producers: Option<String>,
    pub winner: Option<bool>,
}

impl MovieBody {
    fn into_new_movie(self) -> Result<NewMovie, ApiError> {
        let present = |field: Option<String>| field.filter(|value| !value.trim().is_empty());

        match (
            self.year.filter(|&year| year != 0),
            present(self.title),
            present(self.studios),
            present(self.producers),
        ) {
            (Some(year), Some(title), Some(studios), Some(producers)) => Ok(NewMovie {
                year,
                title,
                studios,
                producers,
                winner: self.winner.unwrap_or(false),
            }),
            _ => Err(ApiError::BadRequest(
                "Missing required fields: year, title, studios, producers".to_owned(),
            )),
        }
    }
}

/// Present PATCH fields follow the same rule as a full body
fn validate_patch(patch: &MoviePatch) -> Result<(), ApiError> {
    let blank = |field: &Option<String>| field.as_deref().is_some_and(|v| v.trim().is_empty());

    if patch.year == Some(0)
        || blank(&patch.title)
        || blank(&patch.studios)
        || blank(&patch.producers)
    {
        return Err(ApiError::BadRequest(
            "Fields cannot be empty: year, title, studios, producers".to_owned(),
        ));
    }
    Ok(())
}

/// Ids are positive integers written with digits only
pub fn parse_id(raw: &str) -> Result<MovieId, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::invalid_id());
    }
    match raw.parse::<MovieId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::invalid_id()),
    }
}

/// GET /movies
pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<MovieQuery>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let filter = query.filter()?;
    Ok(Json(state.catalog.list(filter)?))
}

/// GET /movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    let id = parse_id(&id)?;
    state
        .catalog
        .get(id)?
        .map(Json)
        .ok_or_else(ApiError::movie_not_found)
}

/// POST /movies
pub async fn create_movie(
    State(state): State<AppState>,
    payload: Result<Json<MovieBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    let Json(body) = payload?;
    let movie = state.catalog.create(body.into_new_movie()?)?;
    tracing::info!("Created movie {} ({})", movie.id, movie.title);
    Ok((StatusCode::CREATED, Json(movie)))
}

/// PUT /movies/{id}
pub async fn replace_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<MovieBody>, JsonRejection>,
) -> Result<Json<Movie>, ApiError> {
    let id = parse_id(&id)?;
    let Json(body) = payload?;
    let new_movie = body.into_new_movie()?;

    state
        .catalog
        .replace(id, new_movie)?
        .map(Json)
        .ok_or_else(ApiError::movie_not_found)
}

/// PATCH /movies/{id}
pub async fn patch_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<MoviePatch>, JsonRejection>,
) -> Result<Json<Movie>, ApiError> {
    let id = parse_id(&id)?;
    let Json(patch) = payload?;
    validate_patch(&patch)?;

    // Nothing to change: answer with the stored record
    let updated = if patch.is_empty() {
        state.catalog.get(id)?
    } else {
        state.catalog.update(id, patch)?
    };

    updated
        .map(Json)
        .ok_or_else(ApiError::movie_not_found)
}

/// DELETE /movies/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    if state.catalog.delete(id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::movie_not_found())
    }
}
