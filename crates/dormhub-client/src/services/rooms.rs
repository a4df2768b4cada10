//! Room inventory endpoints.

use std::sync::Arc;

use tracing::info;

use dormhub_core::result::AppResult;
use dormhub_core::types::RoomId;
use dormhub_entity::room::{Room, RoomInput};

use crate::api::ApiClient;

/// Manages rooms.
#[derive(Debug, Clone)]
pub struct RoomService {
    api: Arc<ApiClient>,
}

impl RoomService {
    /// Creates a new room service.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> AppResult<Vec<Room>> {
        self.api.get("/rooms").await
    }

    /// Rooms with at least one free bed.
    pub async fn available(&self) -> AppResult<Vec<Room>> {
        self.api.get("/rooms/available").await
    }

    pub async fn get(&self, id: RoomId) -> AppResult<Room> {
        self.api.get(&format!("/rooms/{id}")).await
    }

    pub async fn create(&self, input: &RoomInput) -> AppResult<Room> {
        let room: Room = self.api.post("/rooms", input).await?;
        info!(room_id = %room.id, room_number = %room.room_number, "Room created");
        Ok(room)
    }

    pub async fn update(&self, id: RoomId, input: &RoomInput) -> AppResult<Room> {
        self.api.put(&format!("/rooms/{id}"), input).await
    }

    pub async fn delete(&self, id: RoomId) -> AppResult<()> {
        self.api.delete(&format!("/rooms/{id}")).await?;
        info!(room_id = %id, "Room deleted");
        Ok(())
    }
}
