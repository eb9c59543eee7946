use std::net::IpAddr;

use crate::error::{Error, Result};

/// Derives a fallback identity byte from the host's network interfaces.
///
/// Enumerates local interface addresses and returns the first octet of the
/// first non-loopback IPv4 address. Intended as a convenience identity source
/// for auto-configuring a worker or data-center ID when no external
/// assignment exists; it runs once at startup, never on the ID hot path.
///
/// Best-effort by design: on a host with several non-loopback interfaces the
/// result depends on enumeration order. Fleets that need stable identities
/// should assign them through configuration instead.
///
/// # Errors
///
/// Returns [`Error::NoAddressFound`] when interface enumeration fails or no
/// non-loopback IPv4 address exists (e.g. a loopback-only host).
///
/// # Example
/// ```no_run
/// use firn::{FirnGenerator, UnixClock, derive_identity_byte};
///
/// let worker_id = derive_identity_byte()? as i64;
/// let generator = FirnGenerator::new(worker_id, 0, UnixClock);
/// # Ok::<(), firn::Error>(())
/// ```
pub fn derive_identity_byte() -> Result<u8> {
    let interfaces = if_addrs::get_if_addrs().map_err(|_| Error::NoAddressFound)?;
    first_ipv4_octet(interfaces.into_iter().map(|interface| interface.ip()))
}

/// Returns the first octet of the first non-loopback IPv4 address in `addrs`.
///
/// The selection logic behind [`derive_identity_byte`], split out so callers
/// and tests can feed it any address list without touching real network
/// state.
///
/// # Errors
///
/// Returns [`Error::NoAddressFound`] when the list holds no non-loopback
/// IPv4 address.
pub fn first_ipv4_octet(addrs: impl IntoIterator<Item = IpAddr>) -> Result<u8> {
    for addr in addrs {
        if let IpAddr::V4(v4) = addr {
            if !v4.is_loopback() {
                return Ok(v4.octets()[0]);
            }
        }
    }
    Err(Error::NoAddressFound)
}
