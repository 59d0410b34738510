//! Live agent binary.
//!
//! Usage:
//!   agent <room_number> <name> <game_number>
//!
//! Arguments:
//!   room_number    Number of seats at the table
//!   name           Display identifier of the agent
//!   game_number    Maximum hands to play before stopping
//!
//! The server address is fixed (see `client::SERVER_HOST`/`SERVER_PORT`);
//! set RUST_LOG=debug to see every decision.

use std::env;
use std::process;

use holdem_agent::agent::{AgentConfig, PokerAgent};
use holdem_agent::client::{self, ClientConfig, SERVER_HOST, SERVER_PORT};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        print_usage(&args[0]);
        process::exit(1);
    }

    let room_number: usize = match args[1].parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("room_number must be an integer, got '{}'", args[1]);
            print_usage(&args[0]);
            process::exit(1);
        }
    };
    let name = args[2].clone();
    let game_number: usize = match args[3].parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("game_number must be an integer, got '{}'", args[3]);
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    println!("=================================================");
    println!("  Holdem Agent: {}", name);
    println!("=================================================");
    println!("Players per game: {}", room_number);
    println!("Max hands:        {}", game_number);
    println!();

    let mut agent = PokerAgent::new(AgentConfig::default());
    let config = ClientConfig {
        name,
        room_number,
        game_number,
    };

    match client::run(SERVER_HOST, SERVER_PORT, &mut agent, &config) {
        Ok(stats) => {
            println!();
            println!("Hands played: {}", stats.hands_played);
            println!("Won / lost:   {} / {}", stats.hands_won, stats.hands_lost);
            println!("Net winnings: {}", stats.net_winnings);
        }
        Err(e) => {
            eprintln!("session failed: {}", e);
            process::exit(1);
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <room_number> <name> <game_number>", program);
    eprintln!("Example: {} 2 MyAgent 10", program);
}
