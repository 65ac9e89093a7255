use enum_dispatch::enum_dispatch;

pub mod components;
mod management;

pub use management::{Beacon, ProbeResponse};

use crate::frame::components::{Elements, ManagementHeader};

#[enum_dispatch(Addresses)]
#[derive(Clone, Debug)]
pub enum Frame {
    Beacon(Beacon),
    ProbeResponse(ProbeResponse),
}

impl Frame {
    /// Serialize the frame back into wire bytes, without an FCS.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Frame::Beacon(beacon) => beacon.encode(),
            Frame::ProbeResponse(probe_response) => probe_response.encode(),
        }
    }

    pub fn header(&self) -> &ManagementHeader {
        match self {
            Frame::Beacon(beacon) => &beacon.header,
            Frame::ProbeResponse(probe_response) => &probe_response.header,
        }
    }

    pub fn header_mut(&mut self) -> &mut ManagementHeader {
        match self {
            Frame::Beacon(beacon) => &mut beacon.header,
            Frame::ProbeResponse(probe_response) => &mut probe_response.header,
        }
    }

    pub fn elements(&self) -> &Elements {
        match self {
            Frame::Beacon(beacon) => &beacon.elements,
            Frame::ProbeResponse(probe_response) => &probe_response.elements,
        }
    }

    pub fn elements_mut(&mut self) -> &mut Elements {
        match self {
            Frame::Beacon(beacon) => &mut beacon.elements,
            Frame::ProbeResponse(probe_response) => &mut probe_response.elements,
        }
    }
}
