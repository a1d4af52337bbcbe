//! Logistics CLI commands (rooms and transport)

use clap::Subcommand;

use crate::display;
use crate::edits::PlanEdit;
use crate::error::{UtsavError, UtsavResult};
use crate::models::{Room, Transport};
use crate::services::PlanService;
use crate::storage::Storage;

use super::parse_time;

/// Logistics subcommands
#[derive(Subcommand)]
pub enum LogisticsCommands {
    /// Show rooms and transport
    Show {
        /// Plan name or id prefix
        plan: String,
    },

    /// Add a hotel room
    RoomAdd {
        /// Plan name or id prefix
        plan: String,
        /// Hotel name
        hotel: String,
        /// Room number or block label
        room: String,
        /// Comma-separated occupant names
        #[arg(short, long)]
        occupants: Option<String>,
    },

    /// Remove a room
    RoomRemove {
        /// Plan name or id prefix
        plan: String,
        /// Room id prefix (see 'logistics show')
        room: String,
    },

    /// Add a transport leg
    TransportAdd {
        /// Plan name or id prefix
        plan: String,
        /// Vehicle description
        vehicle: String,
        /// Seating capacity
        capacity: u32,
        /// Route description (e.g., "Hotel → Venue")
        route: String,
        /// Pickup time (HH:MM)
        #[arg(short, long)]
        pickup: String,
    },

    /// Remove a transport leg
    TransportRemove {
        /// Plan name or id prefix
        plan: String,
        /// Transport id prefix
        transport: String,
    },
}

/// Handle a logistics command
pub fn handle_logistics_command(storage: &Storage, cmd: LogisticsCommands) -> UtsavResult<()> {
    let service = PlanService::new(storage);

    match cmd {
        LogisticsCommands::Show { plan } => {
            let plan = service.resolve(&plan)?;
            print!(
                "{}",
                display::format_logistics(&plan.rooms, &plan.transports)
            );
        }

        LogisticsCommands::RoomAdd {
            plan,
            hotel,
            room,
            occupants,
        } => {
            let mut new_room = Room::new(hotel.clone(), room.clone());
            if let Some(occupants) = occupants {
                new_room.occupants = occupants
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
            }

            service.edit(&plan, &PlanEdit::AddRoom { room: new_room })?;
            println!("Added room {} at {}", room, hotel);
        }

        LogisticsCommands::RoomRemove { plan, room } => {
            let resolved = service.resolve(&plan)?;
            let id = resolved
                .rooms
                .iter()
                .find(|r| r.id.matches_prefix(&room))
                .map(|r| r.id)
                .ok_or_else(|| UtsavError::NotFound {
                    entity_type: "Room",
                    identifier: room.clone(),
                })?;

            service.edit(&plan, &PlanEdit::RemoveRoom { id })?;
            println!("Removed room");
        }

        LogisticsCommands::TransportAdd {
            plan,
            vehicle,
            capacity,
            route,
            pickup,
        } => {
            let pickup = parse_time(&pickup)?;
            let transport = Transport::new(vehicle.clone(), capacity, route, pickup);

            service.edit(&plan, &PlanEdit::AddTransport { transport })?;
            println!("Added '{}' with {} seats", vehicle, capacity);
        }

        LogisticsCommands::TransportRemove { plan, transport } => {
            let resolved = service.resolve(&plan)?;
            let id = resolved
                .transports
                .iter()
                .find(|t| t.id.matches_prefix(&transport))
                .map(|t| t.id)
                .ok_or_else(|| UtsavError::NotFound {
                    entity_type: "Transport",
                    identifier: transport.clone(),
                })?;

            service.edit(&plan, &PlanEdit::RemoveTransport { id })?;
            println!("Removed transport");
        }
    }

    Ok(())
}
