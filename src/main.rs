use clap::{App, Arg};
use halite_bot::{bot, game::Game, input::Input};
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;

fn main() {
    let matches = App::new("halite_bot")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::with_name("name")
                .long("name")
                .takes_value(true)
                .default_value("MyRustBot")
                .help("Bot name reported to the engine"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .help("Fix the RNG seed for reproducible games"),
        )
        .arg(
            Arg::with_name("log_file")
                .long("log-file")
                .takes_value(true)
                .help("Log file path (stdout belongs to the engine protocol)"),
        )
        .get_matches();

    let mut input = Input::new();
    let mut game = Game::from_input(&mut input);

    let log_path = matches
        .value_of("log_file")
        .map(String::from)
        .unwrap_or_else(|| format!("bot-{}.log", game.my_id));
    let log_file = File::create(&log_path).unwrap();
    WriteLogger::init(LevelFilter::Info, Config::default(), log_file).unwrap();

    let mut rng: StdRng = match matches.value_of("seed") {
        Some(seed) => StdRng::seed_from_u64(seed.parse().unwrap()),
        None => StdRng::from_entropy(),
    };

    Game::ready(matches.value_of("name").unwrap());
    info!(
        "player {} on a {}x{} map, {} turns, spawn cost {}",
        game.my_id,
        game.map.width,
        game.map.height,
        game.constants.max_turns,
        game.constants.ship_cost
    );

    loop {
        game.update_frame(&mut input);
        let commands = bot::plan_commands(&game, &mut rng);
        info!(
            "turn {}: {} ships, {} halite, {} commands",
            game.turn_number,
            game.me().ship_ids.len(),
            game.me().halite,
            commands.len()
        );
        Game::end_turn(&commands);
    }
}
