use serde_json::Value;

/// Game constants the engine sends as a JSON object on its first line.
/// Only the fields the bot consults are kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constants {
    /// Maximum halite a cell can hold and a ship can carry (`MAX_ENERGY`).
    pub max_halite: usize,
    /// Cost of spawning a new ship (`NEW_ENTITY_ENERGY_COST`).
    pub ship_cost: usize,
    /// Turn at which the engine ends the game (`MAX_TURNS`).
    pub max_turns: usize,
}

impl Constants {
    pub fn from_json(raw: &str) -> Constants {
        let json: Value = serde_json::from_str(raw).unwrap();
        Constants {
            max_halite: field(&json, "MAX_ENERGY"),
            ship_cost: field(&json, "NEW_ENTITY_ENERGY_COST"),
            max_turns: field(&json, "MAX_TURNS"),
        }
    }
}

fn field(json: &Value, key: &str) -> usize {
    json[key]
        .as_u64()
        .unwrap_or_else(|| panic!("constant {} missing from engine handshake", key)) as usize
}
