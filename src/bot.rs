use crate::{command::Command, game::Game, position::Direction};
use rand::{seq::SliceRandom, Rng};

/// Last turn on which a new ship may be spawned.
pub const SPAWN_TURN_LIMIT: usize = 200;

/// Derives the command queue for one turn from the current snapshot.
///
/// A ship sitting on a poor cell (strictly below a tenth of the halite cap)
/// or carrying a full load wanders in a random cardinal direction; any other
/// ship stays put and collects. Early in the game a new ship is spawned
/// whenever it is affordable and the shipyard cell is free.
pub fn plan_commands<R: Rng>(game: &Game, rng: &mut R) -> Vec<Command> {
    let me = game.me();
    let max_halite = game.constants.max_halite;
    let mut commands = Vec::with_capacity(me.ship_ids.len() + 1);

    for &ship_id in &me.ship_ids {
        let ship = &game.ships[&ship_id];
        let cell = game.map.at(ship.position);
        if cell.halite < max_halite / 10 || ship.is_full(max_halite) {
            let direction = *Direction::ALL.choose(rng).unwrap();
            commands.push(Command::Move(ship_id, direction));
        } else {
            commands.push(Command::Stay(ship_id));
        }
    }

    if game.turn_number <= SPAWN_TURN_LIMIT
        && me.halite >= game.constants.ship_cost
        && !game.map.at(me.shipyard.position).occupied
    {
        commands.push(Command::Spawn);
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::Constants,
        game::{Player, Ship, ShipId, Shipyard},
        map::GameMap,
        position::Position,
    };
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashMap;

    fn test_game(turn_number: usize, halite: usize) -> Game {
        let mut map = GameMap::from_rows(vec![vec![0; 8]; 8]);
        let home = Position::new(0, 0);
        map.at_mut(home).structure = true;
        Game {
            constants: Constants {
                max_halite: 1000,
                ship_cost: 1000,
                max_turns: 400,
            },
            my_id: 0,
            turn_number,
            players: vec![Player {
                id: 0,
                halite,
                shipyard: Shipyard { position: home },
                ship_ids: Vec::new(),
                dropoffs: Vec::new(),
            }],
            ships: HashMap::new(),
            map,
        }
    }

    fn add_ship(game: &mut Game, id: usize, position: Position, cargo: usize) {
        let ship_id = ShipId(id);
        game.ships.insert(
            ship_id,
            Ship {
                id: ship_id,
                position,
                halite: cargo,
            },
        );
        game.players[0].ship_ids.push(ship_id);
        game.map.at_mut(position).occupied = true;
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(28)
    }

    #[test]
    fn poor_cell_means_random_move() {
        let mut game = test_game(50, 0);
        game.map.at_mut(Position::new(3, 3)).halite = 99;
        add_ship(&mut game, 1, Position::new(3, 3), 0);

        match plan_commands(&game, &mut rng())[0] {
            Command::Move(ShipId(1), direction) => {
                assert!(Direction::ALL.contains(&direction))
            }
            ref other => panic!("expected a move, got {:?}", other),
        }
    }

    #[test]
    fn full_ship_moves_even_on_a_rich_cell() {
        let mut game = test_game(50, 0);
        game.map.at_mut(Position::new(3, 3)).halite = 800;
        add_ship(&mut game, 1, Position::new(3, 3), 1000);

        match plan_commands(&game, &mut rng())[0] {
            Command::Move(ShipId(1), _) => {}
            ref other => panic!("expected a move, got {:?}", other),
        }
    }

    #[test]
    fn threshold_cell_is_not_redirected() {
        // exactly max/10 fails the strict "less than" check
        let mut game = test_game(50, 0);
        game.map.at_mut(Position::new(3, 3)).halite = 100;
        add_ship(&mut game, 1, Position::new(3, 3), 500);

        assert_eq!(plan_commands(&game, &mut rng())[0], Command::Stay(ShipId(1)));
    }

    #[test]
    fn rich_cell_means_stay() {
        let mut game = test_game(50, 0);
        game.map.at_mut(Position::new(3, 3)).halite = 500;
        add_ship(&mut game, 1, Position::new(3, 3), 200);

        assert_eq!(plan_commands(&game, &mut rng())[0], Command::Stay(ShipId(1)));
    }

    #[test]
    fn spawns_through_turn_200_but_not_after() {
        let game = test_game(200, 1000);
        assert_eq!(plan_commands(&game, &mut rng()), vec![Command::Spawn]);

        let game = test_game(201, 1000);
        assert!(plan_commands(&game, &mut rng()).is_empty());
    }

    #[test]
    fn spawn_requires_exact_balance() {
        let game = test_game(10, 999);
        assert!(plan_commands(&game, &mut rng()).is_empty());

        let game = test_game(10, 1000);
        assert_eq!(plan_commands(&game, &mut rng()), vec![Command::Spawn]);
    }

    #[test]
    fn no_spawn_onto_an_occupied_shipyard() {
        let mut game = test_game(10, 5000);
        game.map.at_mut(Position::new(0, 0)).halite = 500;
        add_ship(&mut game, 1, Position::new(0, 0), 0);

        let commands = plan_commands(&game, &mut rng());
        assert_eq!(commands, vec![Command::Stay(ShipId(1))]);
    }

    #[test]
    fn ship_commands_precede_the_spawn() {
        let mut game = test_game(10, 5000);
        game.map.at_mut(Position::new(3, 3)).halite = 500;
        add_ship(&mut game, 1, Position::new(3, 3), 200);

        let commands = plan_commands(&game, &mut rng());
        assert_eq!(commands, vec![Command::Stay(ShipId(1)), Command::Spawn]);
    }

    #[test]
    fn same_seed_same_directions() {
        let mut game = test_game(50, 0);
        for id in 0..4 {
            add_ship(&mut game, id, Position::new(id as i32, 4), 0);
        }
        let first = plan_commands(&game, &mut rng());
        let second = plan_commands(&game, &mut rng());
        assert_eq!(first, second);
    }
}
