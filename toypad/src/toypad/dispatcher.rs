// toypad/src/toypad/dispatcher.rs

use crate::constants::{
    READ_LEN, STATUS_NOT_FOUND, STATUS_NOT_MINIFIGURE, STATUS_OK, WRITABLE_PAGE_LIMIT,
};
use crate::crypto::Prng;
use crate::protocol::{Command, Reply, Request};
use crate::token::TokenIdentity;
use crate::toypad::session::{Session, SessionState};
use crate::toypad::state::ToyPadState;
use crate::Result;

/// Routes decoded host commands to their handlers and owns the
/// challenge generator.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    prng: Prng,
}

/// Outcome of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    pub reply: Option<Reply>,
    pub session_change: Option<(SessionState, SessionState)>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the host's seed.
    pub fn reset(&mut self) {
        self.prng = Prng::default();
    }

    /// Decode `request` with the session key and run it. Unknown opcodes
    /// and malformed READ/WRITE data are errors; the caller drops them.
    pub fn handle(
        &mut self,
        state: &mut ToyPadState,
        session: &mut Session,
        request: &Request,
    ) -> Result<Dispatched> {
        let command = Command::decode(request, state.cipher_key())?;
        log::trace!("cid {:#04x}: {:?}", request.correlation_id, command);

        let mut session_change = None;
        let reply = match command {
            Command::Wake => {
                session_change = session.on_wake_command();
                Some(Reply::Wake)
            }
            Command::Seed { seed, conf } => {
                self.prng.init(seed);
                Some(Reply::Seed { conf })
            }
            Command::Challenge { conf } => Some(Reply::Challenge {
                value: self.prng.next_u32(),
                conf,
            }),
            Command::Read { index, page } => Some(read(state, index, page)),
            Command::Write { index, page, data } => {
                write(state, index, page, data);
                Some(Reply::write_ok())
            }
            Command::Model { index, conf } => Some(model(state, index, conf)),
            Command::Ignored(opcode) => {
                log::trace!("{:?} accepted, no reply", opcode);
                None
            }
        };

        Ok(Dispatched {
            reply,
            session_change,
        })
    }
}

fn read(state: &ToyPadState, index: u8, page: u8) -> Reply {
    match state.token_at(index) {
        Some(token) => Reply::Read {
            status: STATUS_OK,
            data: token.memory().read(page as usize),
        },
        None => {
            log::debug!("READ of empty slot {}", index);
            Reply::Read {
                status: STATUS_NOT_FOUND,
                data: [0; READ_LEN],
            }
        }
    }
}

fn write(state: &mut ToyPadState, index: u8, page: u8, data: [u8; 4]) {
    if page >= WRITABLE_PAGE_LIMIT {
        log::debug!("WRITE to page {:#04x} ignored", page);
        return;
    }
    match state.token_at_mut(index) {
        Some(token) => {
            if !token.write_page(page as usize, data) {
                log::debug!("WRITE to page {:#04x} past token memory, acked", page);
            }
        }
        None => log::debug!("WRITE to empty slot {}", index),
    }
}

fn model(state: &ToyPadState, index: u8, conf: u32) -> Reply {
    let (status, id) = match state.token_at(index).map(|t| t.identity()) {
        Some(TokenIdentity::Minifigure { id }) => (STATUS_OK, id),
        Some(TokenIdentity::Vehicle { .. }) => (STATUS_NOT_MINIFIGURE, 0),
        None => (STATUS_NOT_FOUND, 0),
    };
    Reply::Model { status, id, conf }
}
