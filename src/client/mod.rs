//! Game loop against the hosting server.
//!
//! The loop is strictly request/response: read one complete frame, react,
//! repeat. The decision engine is invoked only for `state` messages where
//! it is our turn; `result` messages are acknowledged and folded into the
//! session bookkeeping. Any other message ends the session.

use crate::agent::PokerAgent;
use crate::protocol::{read_frame, send_message, ClientMessage, ServerMessage};
use log::{debug, info, warn};
use std::io::{self, Read, Write};
use std::net::TcpStream;

/// Default hosting server address.
pub const SERVER_HOST: &str = "127.0.0.1";
/// Default hosting server port.
pub const SERVER_PORT: u16 = 2333;

/// Session parameters sent in the connect handshake.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Display name of the agent.
    pub name: String,
    /// Number of seats at the table.
    pub room_number: usize,
    /// Maximum hands to play before the server stops the session.
    pub game_number: usize,
}

/// Win/loss bookkeeping across one session.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionStats {
    /// Hands with a reported result.
    pub hands_played: usize,
    /// Hands won (positive winnings).
    pub hands_won: usize,
    /// Hands lost (negative winnings).
    pub hands_lost: usize,
    /// Net winnings over the session.
    pub net_winnings: f64,
}

impl SessionStats {
    fn record(&mut self, win_money: f64) {
        self.hands_played += 1;
        if win_money > 0.0 {
            self.hands_won += 1;
        } else if win_money < 0.0 {
            self.hands_lost += 1;
        }
        self.net_winnings += win_money;
    }
}

/// Connect to the hosting server and play until the session ends.
pub fn run(
    host: &str,
    port: u16,
    agent: &mut PokerAgent,
    config: &ClientConfig,
) -> io::Result<SessionStats> {
    let stream = TcpStream::connect((host, port))?;
    let mut reader = stream.try_clone()?;
    let mut writer = stream;
    run_session(&mut reader, &mut writer, agent, config)
}

/// Drive one session over an already-open transport.
///
/// Generic over the reader and writer so the loop is testable against
/// in-memory buffers.
pub fn run_session<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    agent: &mut PokerAgent,
    config: &ClientConfig,
) -> io::Result<SessionStats> {
    send_message(
        writer,
        &ClientMessage::Connect {
            name: config.name.clone(),
            room_number: config.room_number,
            game_number: config.game_number,
        },
    )?;
    info!(
        "connected as {} (room {}, up to {} hands)",
        config.name, config.room_number, config.game_number
    );

    let mut stats = SessionStats::default();
    let mut position = 0usize;

    loop {
        let payload = match read_frame(reader) {
            Ok(payload) => payload,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                info!("server closed the connection");
                break;
            }
            Err(e) => return Err(e),
        };

        let message = match ServerMessage::from_slice(&payload) {
            Ok(message) => message,
            Err(_) => {
                // Unknown info value: the server is ending the session.
                info!("session ended: {}", String::from_utf8_lossy(&payload));
                break;
            }
        };

        match message {
            ServerMessage::State(state) => {
                if !state.is_our_turn() {
                    continue;
                }
                position = state.position;
                let request = state.to_game_state();
                let action = agent.decide(&request);
                debug!(
                    "hand {:?} board {:?} legal {:?} -> {}",
                    request.hole_cards, request.board, request.legal_actions, action
                );
                send_message(writer, &ClientMessage::Action { action })?;
            }
            ServerMessage::Result(result) => {
                let win_money = result.win_money(position);
                stats.record(win_money);
                agent.record_result(win_money);
                if result.player_card.len() < 2 {
                    warn!("result with {} revealed hands", result.player_card.len());
                }
                info!(
                    "hand {} finished: win {} (cards {:?}, board {:?})",
                    stats.hands_played, win_money, result.player_card, result.public_card
                );
                send_message(writer, &ClientMessage::ready())?;
            }
        }
    }

    info!(
        "session over: {} hands, {} won / {} lost, net {}",
        stats.hands_played, stats.hands_won, stats.hands_lost, stats.net_winnings
    );
    Ok(stats)
}
