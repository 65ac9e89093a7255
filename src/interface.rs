use std::os::fd::{AsRawFd, OwnedFd};
use std::thread;
use std::time::Duration;

use nl80211_ng::attr::Nl80211Iftype;
use nl80211_ng::channels::map_str_to_band_and_channel;
use nl80211_ng::{get_interface_info_idx, Nl80211};
use thiserror::Error;

use crate::rawsocks::open_socket_tx;

#[derive(Error, Debug)]
pub enum InterfaceError {
    #[error("Could not open nl80211: {0}")]
    Netlink(String),
    #[error("Interface {0} not found")]
    NotFound(String),
    #[error("Monitor mode not available for {0}")]
    NoMonitor(String),
    #[error("Channel {0} not available for {1}")]
    BadChannel(String, String),
    #[error("Could not open raw socket: {0}")]
    Socket(String),
    #[error("Transmit failed: {0}")]
    Transmit(String),
}

/// A wireless interface switched into monitor mode, with a raw socket
/// bound to it. [restore](Monitor::restore) puts it back into station
/// mode.
pub struct Monitor {
    netlink: Nl80211,
    pub name: String,
    pub index: i32,
    pub fd: OwnedFd,
}

/// Resolve the interface, flip it into monitor mode, optionally pin a
/// channel, and open the injection socket.
///
/// Validation happens up front. A wrong interface name or channel fails
/// before the interface state is touched.
pub fn setup(interface_name: &str, channel: Option<&str>) -> Result<Monitor, InterfaceError> {
    let mut netlink =
        Nl80211::new().map_err(|error| InterfaceError::Netlink(format!("{error:?}")))?;

    let iface = netlink
        .get_interfaces()
        .iter()
        .find(|&(_, iface)| iface.name_as_string() == interface_name)
        .map(|(_, iface)| iface.clone())
        .ok_or_else(|| InterfaceError::NotFound(interface_name.to_string()))?;

    let idx = iface
        .index
        .ok_or_else(|| InterfaceError::Netlink(format!("{interface_name} has no index")))?;

    println!("💲 Interface Summary:");
    println!("{}", iface.pretty_print());

    if let Some(ref phy) = iface.phy {
        if !phy
            .iftypes
            .clone()
            .is_some_and(|types| types.contains(&Nl80211Iftype::IftypeMonitor))
        {
            return Err(InterfaceError::NoMonitor(interface_name.to_string()));
        }
    }

    // Resolve the channel before any mode flipping.
    let pinned_channel = match channel {
        Some(chan) => {
            let (band, chan_number) = map_str_to_band_and_channel(chan).ok_or_else(|| {
                InterfaceError::BadChannel(chan.to_string(), interface_name.to_string())
            })?;
            let band_u8 = band.to_u8();

            if let Some(bands) = iface.get_frequency_list_simple() {
                let available = bands
                    .get(&band_u8)
                    .is_some_and(|channels| channels.contains(&chan_number));
                if !available {
                    return Err(InterfaceError::BadChannel(
                        chan.to_string(),
                        interface_name.to_string(),
                    ));
                }
            }
            Some((band_u8, chan_number))
        }
        None => None,
    };

    println!("💲 Setting {} down.", interface_name);
    netlink.set_interface_down(idx).ok();
    thread::sleep(Duration::from_millis(500));

    let active = iface
        .phy
        .clone()
        .and_then(|phy| phy.active_monitor)
        .is_some_and(|active| active);
    println!(
        "💲 Setting {} to monitor mode. (\"active\" flag: {})",
        interface_name, active
    );
    netlink
        .set_interface_monitor(active, idx)
        .map_err(|error| InterfaceError::Netlink(format!("{error:?}")))?;

    // Check that the mode switch actually stuck.
    let updated = get_interface_info_idx(idx).map_err(InterfaceError::Netlink)?;
    if let Some(phy) = updated.phy {
        if phy
            .current_iftype
            .is_some_and(|iftype| iftype != Nl80211Iftype::IftypeMonitor)
        {
            return Err(InterfaceError::NoMonitor(interface_name.to_string()));
        }
    }

    thread::sleep(Duration::from_millis(500));
    println!("💲 Setting {} up.", interface_name);
    netlink
        .set_interface_up(idx)
        .map_err(|error| InterfaceError::Netlink(format!("{error:?}")))?;

    if let Some((band, chan_number)) = pinned_channel {
        println!("💲 Setting {} to channel {}.", interface_name, chan_number);
        netlink
            .set_interface_chan(idx, chan_number, band)
            .map_err(|error| InterfaceError::Netlink(format!("{error:?}")))?;
    }

    let fd = open_socket_tx(idx).map_err(InterfaceError::Socket)?;
    println!("💲 Socket opened: {}", fd.as_raw_fd());

    Ok(Monitor {
        netlink,
        name: interface_name.to_string(),
        index: idx,
        fd,
    })
}

impl Monitor {
    /// Put the interface back into station mode. Failures are printed
    /// rather than propagated so cleanup runs to the end.
    pub fn restore(&mut self) {
        println!("💲 Cleaning up...");

        println!("💲 Setting {} down.", self.name);
        match self.netlink.set_interface_down(self.index) {
            Ok(_) => {}
            Err(e) => println!("Error: {e:?}"),
        }

        println!("💲 Setting {} to station mode.", self.name);
        match self.netlink.set_interface_station(self.index) {
            Ok(_) => {}
            Err(e) => println!("Error: {e:?}"),
        }

        println!("💲 Setting {} up.", self.name);
        match self.netlink.set_interface_up(self.index) {
            Ok(_) => {}
            Err(e) => println!("Error: {e:?}"),
        }
    }
}
