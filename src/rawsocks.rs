use std::os::fd::{AsRawFd, OwnedFd};
use std::{io, mem};

use libc::{packet_mreq, sockaddr_ll, ETH_ALEN, ETH_P_ALL, PACKET_MR_PROMISC, SOL_PACKET};
use nix::sys::socket::{socket, AddressFamily, SockFlag, SockProtocol, SockType};

/// Open a raw AF_PACKET socket bound to the given interface for frame
/// injection.
///
/// The socket is left blocking. This tool only ever writes, and a write
/// that waits for room in the transmit queue beats a failed burst.
pub fn open_socket_tx(ifindex: i32) -> Result<OwnedFd, String> {
    let mut saddr: sockaddr_ll = unsafe { mem::zeroed() };
    let mut mrq: packet_mreq = unsafe { mem::zeroed() };
    let prioval: i32 = 20;

    let fd_socket_tx = socket(
        AddressFamily::Packet,
        SockType::Raw,
        SockFlag::SOCK_CLOEXEC,
        SockProtocol::EthAll,
    )
    .map_err(|e| e.to_string())?;

    mrq.mr_ifindex = ifindex;
    mrq.mr_type = PACKET_MR_PROMISC as u16;

    let ret = unsafe {
        libc::setsockopt(
            fd_socket_tx.as_raw_fd(),
            SOL_PACKET,
            libc::PACKET_ADD_MEMBERSHIP,
            &mrq as *const _ as *const libc::c_void,
            mem::size_of::<packet_mreq>() as libc::socklen_t,
        )
    };

    if ret < 0 {
        return Err("Failed to set PACKET_ADD_MEMBERSHIP option".to_string());
    }

    // Best effort, injection works without it.
    unsafe {
        libc::setsockopt(
            fd_socket_tx.as_raw_fd(),
            libc::SOL_SOCKET,
            libc::SO_PRIORITY,
            &prioval as *const _ as *const libc::c_void,
            mem::size_of::<i32>() as libc::socklen_t,
        )
    };

    saddr.sll_family = libc::AF_PACKET as u16;
    saddr.sll_protocol = (ETH_P_ALL as u16).to_be();
    saddr.sll_ifindex = ifindex;
    saddr.sll_halen = ETH_ALEN as u8;

    let bind_ret = unsafe {
        libc::bind(
            fd_socket_tx.as_raw_fd(),
            (&saddr as *const libc::sockaddr_ll).cast(),
            mem::size_of::<libc::sockaddr_ll>() as libc::socklen_t,
        )
    };

    if bind_ret < 0 {
        let error = io::Error::last_os_error();
        return Err(format!("Bind failed: {error}"));
    }

    Ok(fd_socket_tx)
}
