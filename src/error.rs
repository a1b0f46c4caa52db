//! Unified error type for rcpad.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used by the firmware bring-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Network
    /// Wi-Fi or UDP layer error.
    Net(NetError),

    // Display
    /// SPI device or panel initialisation failed.
    DisplayInit,
}

/// Subset of network errors we propagate (keeps the enum `Copy`-friendly).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NetError {
    /// Join attempt rejected; raw CYW43 status code.
    JoinFailed(u32),
    /// The local UDP socket could not be bound.
    BindFailed,
    /// The IP stack has no route to the peer (link down or no DHCP lease).
    NoRoute,
    /// Datagram dropped by the socket (buffer full, too large, unbound).
    SendFailed,
}

// Convenience conversions

impl From<NetError> for Error {
    fn from(e: NetError) -> Self {
        Error::Net(e)
    }
}
