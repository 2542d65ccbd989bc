use clap::{App, Arg};
use halite_bot::{chart::LogParser, render::render_block};
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::{fs, path::PathBuf, process};

fn main() {
    let matches = App::new("chart_results")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Charts the scores and steps of a training-run log")
        .arg(
            Arg::with_name("log")
                .required(true)
                .index(1)
                .help("Training log to chart"),
        )
        .arg(
            Arg::with_name("out_dir")
                .long("out-dir")
                .takes_value(true)
                .default_value(".")
                .help("Directory the per-block SVGs are written to"),
        )
        .get_matches();

    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let log_path = matches.value_of("log").unwrap();
    let out_dir = PathBuf::from(matches.value_of("out_dir").unwrap());
    fs::create_dir_all(&out_dir).unwrap_or_else(|err| {
        eprintln!("cannot create {}: {}", out_dir.display(), err);
        process::exit(1);
    });

    let text = fs::read_to_string(log_path).unwrap_or_else(|err| {
        eprintln!("cannot read {}: {}", log_path, err);
        process::exit(1);
    });

    let mut parser = LogParser::new();
    let mut block_index = 0;
    for line in text.lines() {
        match parser.feed_line(line) {
            Ok(Some(block)) => {
                let path = out_dir.join(format!("block_{:03}.svg", block_index));
                render_block(&path, &block).unwrap_or_else(|err| {
                    eprintln!("cannot render {}: {}", path.display(), err);
                    process::exit(1);
                });
                info!(
                    "{}: {} scores, {} steps, discount {}, lr {}",
                    path.display(),
                    block.scores.len(),
                    block.steps.len(),
                    parser.params.discount_rate,
                    parser.params.learning_rate
                );
                block_index += 1;
            }
            Ok(None) => {}
            // malformed numeric line, no recovery for an offline tool
            Err(err) => {
                eprintln!("malformed line {:?}: {}", line, err);
                process::exit(1);
            }
        }
    }

    if block_index == 0 {
        info!("no complete blocks in {}", log_path);
    }
}
