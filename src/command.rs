use crate::game::ShipId;
use crate::position::Direction;

/// One instruction of the per-turn command queue, in the engine's
/// bot serial format: `m` moves (with `o` for staying put), `g` spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(ShipId, Direction),
    Stay(ShipId),
    Spawn,
}

impl Command {
    pub fn encode(&self) -> String {
        match self {
            Command::Move(ship_id, direction) => {
                format!("m {} {}", ship_id.0, direction.encode())
            }
            Command::Stay(ship_id) => format!("m {} o", ship_id.0),
            Command::Spawn => "g".to_string(),
        }
    }
}
