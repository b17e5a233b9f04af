//! Game listing route.

use axum::Json;

use crate::errors::ApiResponse;
use crate::models::game::Game;
use crate::scrapers;

/// GET /api/games: registered games in scrape order.
pub async fn list() -> Json<ApiResponse<Vec<Game>>> {
    ApiResponse::success(scrapers::games())
}
