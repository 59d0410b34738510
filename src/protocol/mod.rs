//! Wire protocol for the hosting server.
//!
//! Every message is a 4-byte length prefix (native-endian signed 32-bit
//! integer, matching the server's native packing) followed by that many
//! bytes of UTF-8 JSON. Messages are tagged by their `info` field.
//!
//! The framing functions work over generic `Read`/`Write` so the game loop
//! can be exercised against in-memory buffers.

use crate::agent::{Action, Card, GameState};
use serde::{Deserialize, Serialize};
use std::io::{self, Read, Write};

/// Upper bound on a single frame; anything larger is a corrupt prefix.
pub const MAX_FRAME_LEN: usize = 1 << 20;

/// Write one length-prefixed frame.
pub fn write_frame<W: Write>(writer: &mut W, payload: &[u8]) -> io::Result<()> {
    let len = i32::try_from(payload.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "payload too large"))?;
    writer.write_all(&len.to_ne_bytes())?;
    writer.write_all(payload)?;
    writer.flush()
}

/// Read one length-prefixed frame, completing short reads.
///
/// A negative or oversized length prefix is reported as `InvalidData`.
pub fn read_frame<R: Read>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut prefix = [0u8; 4];
    reader.read_exact(&mut prefix)?;
    let len = i32::from_ne_bytes(prefix);
    if len < 0 || len as usize > MAX_FRAME_LEN {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("bad frame length {}", len),
        ));
    }
    let mut payload = vec![0u8; len as usize];
    reader.read_exact(&mut payload)?;
    Ok(payload)
}

/// Serialize a message and send it as one frame.
pub fn send_message<W: Write, M: Serialize>(writer: &mut W, message: &M) -> io::Result<()> {
    let payload = serde_json::to_vec(message)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    write_frame(writer, &payload)
}

/// Messages sent by the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "info", rename_all = "lowercase")]
pub enum ClientMessage {
    /// Session handshake.
    Connect {
        name: String,
        room_number: usize,
        game_number: usize,
    },
    /// The chosen action for the current decision request.
    Action { action: Action },
    /// Acknowledgment after a hand result, asking for the next hand.
    Ready { status: String },
}

impl ClientMessage {
    /// The `ready`/`start` acknowledgment the server expects after a
    /// result.
    pub fn ready() -> Self {
        ClientMessage::Ready {
            status: "start".to_string(),
        }
    }
}

/// Messages received from the hosting server.
///
/// Any `info` value other than the ones below fails to parse and ends the
/// session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "info", rename_all = "lowercase")]
pub enum ServerMessage {
    /// A table snapshot; the agent acts only when it is its turn.
    State(StateMessage),
    /// A finished hand with per-seat outcomes.
    Result(ResultMessage),
}

impl ServerMessage {
    /// Parse a frame payload.
    pub fn from_slice(payload: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(payload)
    }
}

/// A `state` message. All fields except the positions carry defaults, so a
/// sparse snapshot is still usable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateMessage {
    /// Our seat index.
    #[serde(default)]
    pub position: usize,
    /// Seat index of the player who must act.
    #[serde(default)]
    pub action_position: usize,
    /// Our two hole card tokens.
    #[serde(default)]
    pub hand: Vec<String>,
    /// Community card tokens revealed so far.
    #[serde(default)]
    pub public_cards: Vec<String>,
    /// Actions the server currently permits.
    #[serde(default)]
    pub legal_actions: Vec<Action>,
    /// Amount required to call.
    #[serde(default)]
    pub current_bet: f64,
    /// Current pot size.
    #[serde(default)]
    pub pot_size: f64,
    /// Number of players at the table.
    #[serde(default = "default_total_players")]
    pub total_players: usize,
}

fn default_total_players() -> usize {
    2
}

impl StateMessage {
    /// Whether this snapshot asks us to act.
    pub fn is_our_turn(&self) -> bool {
        self.position == self.action_position
    }

    /// Build the typed decision request for the engine.
    pub fn to_game_state(&self) -> GameState {
        GameState {
            legal_actions: self.legal_actions.clone(),
            hole_cards: Card::parse_all(&self.hand),
            board: Card::parse_all(&self.public_cards),
            position: self.position,
            total_players: self.total_players,
            current_bet: self.current_bet,
            pot_size: self.pot_size,
        }
    }
}

/// Per-seat outcome within a `result` message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatResult {
    /// Amount won (negative when lost).
    #[serde(default)]
    pub win_money: f64,
}

/// A `result` message closing one hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultMessage {
    /// Outcome per seat.
    #[serde(default)]
    pub players: Vec<SeatResult>,
    /// Revealed hole card tokens per seat.
    #[serde(default)]
    pub player_card: Vec<Vec<String>>,
    /// Final community card tokens.
    #[serde(default)]
    pub public_card: Vec<String>,
}

impl ResultMessage {
    /// Winnings for a seat, zero when the seat is missing.
    pub fn win_money(&self, position: usize) -> f64 {
        self.players.get(position).map_or(0.0, |p| p.win_money)
    }
}
