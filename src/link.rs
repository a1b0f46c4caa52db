//! Command tokens and the datagram transport seam.
//!
//! Every command is a short ASCII token sent as one UDP datagram to a
//! fixed peer. Nothing is acknowledged and nothing is read back:
//!
//! ```text
//! Token     Peer       Meaning
//! fwd       vehicle    drive forward
//! bwd       vehicle    drive backward
//! lft       vehicle    turn left (sent for the joystick's RIGHT)
//! rgt       vehicle    turn right (sent for the joystick's LEFT)
//! stop      vehicle    idle, repeated every tick
//! arm       vehicle    toggle arm; the vehicle tracks up/down itself
//! fast      vehicle    switch to fast drive profile
//! slow      vehicle    switch to slow drive profile
//! dispense  dispenser  run one dispense cycle
//! ```

use crate::config::{DISPENSER_ADDR, VEHICLE_ADDR};

/// Fixed destination of a datagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Peer {
    Vehicle,
    Dispenser,
}

impl Peer {
    /// IPv4 address of the peer.
    pub const fn address(self) -> [u8; 4] {
        match self {
            Peer::Vehicle => VEHICLE_ADDR,
            Peer::Dispenser => DISPENSER_ADDR,
        }
    }
}

/// Wire command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Token {
    Fwd,
    Bwd,
    Lft,
    Rgt,
    Stop,
    Arm,
    Fast,
    Slow,
    Dispense,
}

impl Token {
    pub const fn as_str(self) -> &'static str {
        match self {
            Token::Fwd => "fwd",
            Token::Bwd => "bwd",
            Token::Lft => "lft",
            Token::Rgt => "rgt",
            Token::Stop => "stop",
            Token::Arm => "arm",
            Token::Fast => "fast",
            Token::Slow => "slow",
            Token::Dispense => "dispense",
        }
    }

    /// Datagram payload (no terminator).
    pub const fn as_bytes(self) -> &'static [u8] {
        self.as_str().as_bytes()
    }

    /// Which peer understands this token.
    pub const fn peer(self) -> Peer {
        match self {
            Token::Dispense => Peer::Dispenser,
            _ => Peer::Vehicle,
        }
    }

    /// Token announcing the speed mode the controller just switched to.
    pub const fn speed(fast: bool) -> Self {
        if fast {
            Token::Fast
        } else {
            Token::Slow
        }
    }
}

/// One outgoing command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Datagram {
    pub peer: Peer,
    pub token: Token,
}

impl From<Token> for Datagram {
    fn from(token: Token) -> Self {
        Self {
            peer: token.peer(),
            token,
        }
    }
}

/// Best-effort datagram sender.
///
/// Implemented by the firmware over an `embassy-net` UDP socket.
#[allow(async_fn_in_trait)]
pub trait Transport {
    type Error;

    /// Hand one datagram to the network. No retry.
    async fn send(&mut self, datagram: Datagram) -> Result<(), Self::Error>;
}

/// Send every datagram in order. A failed send is logged and skipped;
/// the rest still go out.
///
/// Returns how many datagrams the transport accepted.
pub async fn dispatch<T: Transport>(transport: &mut T, datagrams: &[Datagram]) -> usize {
    let mut sent = 0;
    for datagram in datagrams {
        match transport.send(*datagram).await {
            Ok(()) => sent += 1,
            Err(_) => warn!("send {} to {} dropped", datagram.token, datagram.peer),
        }
    }
    sent
}
