//! Offline battle binary.
//!
//! Usage:
//!   cargo run --bin battle -- [OPTIONS]
//!
//! Options:
//!   --hands <N>      Number of hands to play (default: 100)
//!   --seed <N>       Random seed (default: 0)
//!   --bluff <F>      Bluff frequency for both agents (default: 0.15)

use std::env;
use std::process;

use holdem_agent::agent::AgentConfig;
use holdem_agent::battle::{Battle, BattleConfig};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut hands: usize = 100;
    let mut seed: u64 = 0;
    let mut bluff: f64 = AgentConfig::default().bluff_frequency;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--hands" | "-n" => {
                i += 1;
                if i < args.len() {
                    hands = args[i].parse().unwrap_or(hands);
                }
            }
            "--seed" | "-s" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or(seed);
                }
            }
            "--bluff" | "-b" => {
                i += 1;
                if i < args.len() {
                    bluff = args[i].parse().unwrap_or(bluff);
                }
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    let agent_config = AgentConfig::default().with_bluff_frequency(bluff);
    if let Err(e) = agent_config.validate() {
        eprintln!("invalid configuration: {}", e);
        process::exit(1);
    }

    println!("=================================================");
    println!("  Offline Battle");
    println!("=================================================");
    println!("Hands: {}", hands);
    println!("Seed:  {}", seed);
    println!("Bluff: {}", bluff);
    println!();

    let config = BattleConfig {
        hands,
        seed,
        agent_config,
    };
    let mut battle = Battle::new(&config);
    let report = battle.run(hands, true);

    println!("Final record over {} hands:", report.hands);
    println!(
        "  agent0: {} wins ({:.1}%)",
        report.wins[0],
        report.win_rate(0) * 100.0
    );
    println!(
        "  agent1: {} wins ({:.1}%)",
        report.wins[1],
        report.win_rate(1) * 100.0
    );
    println!("  ties:   {}", report.ties);
}

fn print_help() {
    println!("Offline two-agent battle");
    println!();
    println!("Options:");
    println!("  --hands <N>   Number of hands to play (default: 100)");
    println!("  --seed <N>    Random seed (default: 0)");
    println!("  --bluff <F>   Bluff frequency for both agents (default: 0.15)");
    println!("  --help        Show this help");
}
