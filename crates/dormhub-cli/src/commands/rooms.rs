//! Room inventory commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use dormhub_auth::guard::Guard;
use dormhub_core::error::AppError;
use dormhub_core::types::RoomId;
use dormhub_entity::room::{Room, RoomInput, RoomStatus};

use crate::context::AppContext;
use crate::output::{self, OutputFormat};

/// Arguments for room commands
#[derive(Debug, Args)]
pub struct RoomArgs {
    /// Room subcommand
    #[command(subcommand)]
    pub command: RoomCommand,
}

/// Room subcommands
#[derive(Debug, Subcommand)]
pub enum RoomCommand {
    /// List all rooms
    List,
    /// List rooms with free beds
    Available,
    /// Show one room
    Show {
        /// Room ID
        id: RoomId,
    },
    /// Create a room
    Create {
        #[command(flatten)]
        input: RoomInputArgs,
    },
    /// Update a room
    Update {
        /// Room ID
        id: RoomId,
        #[command(flatten)]
        input: RoomInputArgs,
    },
    /// Delete a room
    Delete {
        /// Room ID
        id: RoomId,
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
}

/// Room fields
#[derive(Debug, Args)]
pub struct RoomInputArgs {
    /// Room number
    #[arg(long)]
    pub number: String,
    /// Floor
    #[arg(long)]
    pub floor: Option<i32>,
    /// Number of beds
    #[arg(long)]
    pub capacity: u32,
    /// Monthly rent
    #[arg(long)]
    pub rent: f64,
    /// Status
    #[arg(long, value_parser = parse_status)]
    pub status: Option<RoomStatus>,
}

impl From<&RoomInputArgs> for RoomInput {
    fn from(args: &RoomInputArgs) -> Self {
        Self {
            room_number: args.number.clone(),
            floor: args.floor,
            capacity: args.capacity,
            monthly_rent: args.rent,
            status: args.status,
        }
    }
}

fn parse_status(s: &str) -> Result<RoomStatus, String> {
    match s.to_ascii_lowercase().as_str() {
        "available" => Ok(RoomStatus::Available),
        "occupied" => Ok(RoomStatus::Occupied),
        "maintenance" => Ok(RoomStatus::Maintenance),
        "reserved" => Ok(RoomStatus::Reserved),
        _ => Err(format!(
            "invalid status '{s}' (expected available, occupied, maintenance, reserved)"
        )),
    }
}

/// Room display row
#[derive(Debug, Serialize, Tabled)]
pub(crate) struct RoomRow {
    /// Room ID
    id: String,
    /// Room number
    number: String,
    /// Floor
    floor: String,
    /// Beds used / total
    beds: String,
    /// Monthly rent
    rent: String,
    /// Status
    status: String,
}

impl From<&Room> for RoomRow {
    fn from(r: &Room) -> Self {
        Self {
            id: r.id.to_string(),
            number: r.room_number.clone(),
            floor: output::or_dash(r.floor),
            beds: format!("{}/{}", r.occupied, r.capacity),
            rent: format!("{:.2}", r.monthly_rent),
            status: r.status.to_string(),
        }
    }
}

pub(crate) fn rows(rooms: &[Room]) -> Vec<RoomRow> {
    rooms.iter().map(RoomRow::from).collect()
}

/// Execute room commands
pub async fn execute(args: &RoomArgs, ctx: &AppContext, format: OutputFormat) -> Result<(), AppError> {
    let rooms = &ctx.services.rooms;

    match &args.command {
        RoomCommand::List => {
            ctx.require(&Guard::new().permission("rooms", "read"), "view rooms")?;
            output::print_list(&rows(&rooms.list().await?), format);
        }
        RoomCommand::Available => {
            ctx.require(&Guard::new().permission("rooms", "read"), "view rooms")?;
            output::print_list(&rows(&rooms.available().await?), format);
        }
        RoomCommand::Show { id } => {
            ctx.require(&Guard::new().permission("rooms", "read"), "view rooms")?;
            let room = rooms.get(*id).await?;
            output::print_item(
                &room,
                &[
                    ("Room", room.room_number.clone()),
                    ("Floor", output::or_dash(room.floor)),
                    ("Capacity", room.capacity.to_string()),
                    ("Occupied", room.occupied.to_string()),
                    ("Vacancies", room.vacancies().to_string()),
                    ("Monthly rent", format!("{:.2}", room.monthly_rent)),
                    ("Status", room.status.to_string()),
                ],
                format,
            );
        }
        RoomCommand::Create { input } => {
            ctx.require(&Guard::new().permission("rooms", "write"), "create rooms")?;
            let room = rooms.create(&RoomInput::from(input)).await?;
            output::print_success(&format!("Room '{}' created (id: {})", room.room_number, room.id));
        }
        RoomCommand::Update { id, input } => {
            ctx.require(&Guard::new().permission("rooms", "write"), "edit rooms")?;
            let room = rooms.update(*id, &RoomInput::from(input)).await?;
            output::print_success(&format!("Room '{}' updated", room.room_number));
        }
        RoomCommand::Delete { id, force } => {
            ctx.require(&Guard::new().permission("rooms", "delete"), "delete rooms")?;
            if !force && !super::confirm(&format!("Delete room {}?", id))? {
                println!("Cancelled.");
                return Ok(());
            }
            rooms.delete(*id).await?;
            output::print_success(&format!("Room {} deleted", id));
        }
    }

    Ok(())
}
