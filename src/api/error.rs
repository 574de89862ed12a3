use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::errors::LeagueError;

pub enum ApiError {
    League(LeagueError),
    Task(tokio::task::JoinError),
}

impl From<LeagueError> for ApiError {
    fn from(err: LeagueError) -> Self {
        ApiError::League(err)
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Task(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::League(err) if err.is_persistence_failure() => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::League(LeagueError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::League(LeagueError::Conflict(_)) => StatusCode::CONFLICT,
            ApiError::League(LeagueError::MalformedInput(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::League(_) | ApiError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::League(err) => err.to_string(),
            ApiError::Task(err) => format!("Request task failed: {err}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        if status.is_server_error() {
            log::error!("{message}");
        } else {
            log::warn!("{message}");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_per_error_kind() {
        let cases = [
            (LeagueError::NotFound("event 7".to_string()), StatusCode::NOT_FOUND),
            (LeagueError::Conflict("player 'Alice'".to_string()), StatusCode::CONFLICT),
            (LeagueError::MalformedInput("row 1".to_string()), StatusCode::UNPROCESSABLE_ENTITY),
            (
                LeagueError::Persistence(rusqlite::Error::QueryReturnedNoRows),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }
}
