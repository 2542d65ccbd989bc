use crate::{
    command::Command,
    constants::Constants,
    input::Input,
    map::GameMap,
    position::Position,
};
use std::{
    collections::HashMap,
    io::{self, BufRead, Write},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipId(pub usize);

#[derive(Debug, Clone)]
pub struct Ship {
    pub id: ShipId,
    pub position: Position,
    pub halite: usize,
}

impl Ship {
    pub fn is_full(&self, max_halite: usize) -> bool {
        self.halite >= max_halite
    }
}

#[derive(Debug, Clone)]
pub struct Shipyard {
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct Dropoff {
    pub id: usize,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub id: usize,
    pub halite: usize,
    pub shipyard: Shipyard,
    pub ship_ids: Vec<ShipId>,
    pub dropoffs: Vec<Dropoff>,
}

/// Read-only snapshot of the game for the current turn. The bot never
/// mutates engine state; it only derives a command queue from this view.
pub struct Game {
    pub constants: Constants,
    pub my_id: usize,
    pub turn_number: usize,
    pub players: Vec<Player>,
    pub ships: HashMap<ShipId, Ship>,
    pub map: GameMap,
}

impl Game {
    /// Consumes the engine's initialization frame: constants line, player
    /// count and id, shipyard locations, then the full halite grid.
    pub fn from_input<R: BufRead>(input: &mut Input<R>) -> Game {
        let constants = Constants::from_json(&input.line());
        let num_players: usize = input.next();
        let my_id: usize = input.next();

        let mut players = Vec::with_capacity(num_players);
        for _ in 0..num_players {
            let id: usize = input.next();
            let x: i32 = input.next();
            let y: i32 = input.next();
            players.push(Player {
                id,
                halite: 0,
                shipyard: Shipyard {
                    position: Position::new(x, y),
                },
                ship_ids: Vec::new(),
                dropoffs: Vec::new(),
            });
        }

        let width: usize = input.next();
        let height: usize = input.next();
        let mut rows = Vec::with_capacity(height);
        for _ in 0..height {
            rows.push((0..width).map(|_| input.next()).collect());
        }
        let mut map = GameMap::from_rows(rows);
        for player in &players {
            map.at_mut(player.shipyard.position).structure = true;
        }

        Game {
            constants,
            my_id,
            turn_number: 0,
            players,
            ships: HashMap::new(),
            map,
        }
    }

    pub fn me(&self) -> &Player {
        &self.players[self.my_id]
    }

    /// Consumes one turn frame. Ships and cell occupancy are rebuilt from
    /// scratch; only the reported cells change halite.
    pub fn update_frame<R: BufRead>(&mut self, input: &mut Input<R>) {
        self.turn_number = input.next();
        self.ships.clear();
        self.map.clear_occupancy();

        for _ in 0..self.players.len() {
            let id: usize = input.next();
            let num_ships: usize = input.next();
            let num_dropoffs: usize = input.next();
            let halite: usize = input.next();

            let player = &mut self.players[id];
            player.halite = halite;
            player.ship_ids.clear();
            player.dropoffs.clear();

            for _ in 0..num_ships {
                let ship_id = ShipId(input.next());
                let x: i32 = input.next();
                let y: i32 = input.next();
                let cargo: usize = input.next();
                let position = Position::new(x, y);
                self.map.at_mut(position).occupied = true;
                self.ships.insert(
                    ship_id,
                    Ship {
                        id: ship_id,
                        position,
                        halite: cargo,
                    },
                );
                player.ship_ids.push(ship_id);
            }

            for _ in 0..num_dropoffs {
                let dropoff_id: usize = input.next();
                let x: i32 = input.next();
                let y: i32 = input.next();
                let position = Position::new(x, y);
                self.map.at_mut(position).structure = true;
                player.dropoffs.push(Dropoff {
                    id: dropoff_id,
                    position,
                });
            }
        }

        let updates: usize = input.next();
        for _ in 0..updates {
            let x: i32 = input.next();
            let y: i32 = input.next();
            let halite: usize = input.next();
            self.map.at_mut(Position::new(x, y)).halite = halite;
        }
    }

    /// Ready signal ending the initialization phase.
    pub fn ready(name: &str) {
        println!("{}", name);
        io::stdout().flush().unwrap();
    }

    /// Submits the command queue, ending the turn.
    pub fn end_turn(commands: &[Command]) {
        let serial: Vec<String> = commands.iter().map(|c| c.encode()).collect();
        println!("{}", serial.join(" "));
        io::stdout().flush().unwrap();
    }
}
