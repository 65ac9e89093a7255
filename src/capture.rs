use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use dot11_frame::{parse_frame, Frame};
use pcap_file::pcap::PcapReader;
use pcap_file::pcapng::{Block, PcapNgReader};
use pcap_file::{DataLink, PcapError};
use radiotap::Radiotap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Could not open capture: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not read capture: {0}")]
    Read(#[from] PcapError),
    #[error("Link type {0:?} does not carry 802.11 frames")]
    UnsupportedLinkType(DataLink),
    #[error("Capture holds no usable management frames")]
    Empty,
    #[error("No frame at index {0}, the capture holds {1} usable frames")]
    NoSuchFrame(usize, usize),
}

/// Every pcapng file starts with a section header block.
const PCAPNG_MAGIC: [u8; 4] = [0x0a, 0x0d, 0x0d, 0x0a];

/// Read a capture file and parse every packet in it.
///
/// Both the legacy pcap format and pcapng are accepted, the two are told
/// apart by their magic bytes. Radiotap captures are stripped down to the
/// bare 802.11 frame, and the radiotap flags decide whether an FCS is
/// verified.
///
/// Packets that fail to parse or carry an unsupported frame subtype are
/// skipped with a warning. The capture itself failing to read is fatal.
pub fn load(path: &Path) -> Result<Vec<Frame>, CaptureError> {
    let mut file = File::open(path)?;
    let mut magic = [0u8; 4];
    file.read_exact(&mut magic)?;
    file.seek(SeekFrom::Start(0))?;

    let packets = if magic == PCAPNG_MAGIC {
        read_pcapng(file)?
    } else {
        read_pcap(file)?
    };

    let mut frames = Vec::new();
    for (index, (linktype, data)) in packets.iter().enumerate() {
        match parse_packet(*linktype, data) {
            Ok(frame) => frames.push(frame),
            Err(error) => println!("Skipping frame {index}: {error}"),
        }
    }

    Ok(frames)
}

/// Pick the frame to work on. An empty capture and an index past the end
/// are separate errors, a capture full of skipped frames should not
/// report a bad index.
pub fn select(frames: &[Frame], index: usize) -> Result<&Frame, CaptureError> {
    if frames.is_empty() {
        return Err(CaptureError::Empty);
    }
    frames
        .get(index)
        .ok_or(CaptureError::NoSuchFrame(index, frames.len()))
}

fn read_pcap(file: File) -> Result<Vec<(DataLink, Vec<u8>)>, CaptureError> {
    let mut reader = PcapReader::new(file)?;
    let linktype = reader.header().datalink;
    check_linktype(linktype)?;

    let mut packets = Vec::new();
    while let Some(packet) = reader.next_packet() {
        let packet = packet?;
        packets.push((linktype, packet.data.into_owned()));
    }

    Ok(packets)
}

fn read_pcapng(file: File) -> Result<Vec<(DataLink, Vec<u8>)>, CaptureError> {
    let mut reader = PcapNgReader::new(file)?;

    let mut packets = Vec::new();
    while let Some(block) = reader.next_block() {
        // Packet data has to be copied out before the interface lookup,
        // the block borrows the reader.
        let (interface_id, data) = match block? {
            Block::EnhancedPacket(packet) => {
                (packet.interface_id as usize, packet.data.into_owned())
            }
            Block::Packet(packet) => (packet.interface_id as usize, packet.data.into_owned()),
            Block::SimplePacket(packet) => (0, packet.data.into_owned()),
            _ => continue,
        };

        let linktype = reader
            .interfaces()
            .get(interface_id)
            .map(|interface| interface.linktype)
            .ok_or(PcapError::InvalidInterfaceId(interface_id as u32))?;
        check_linktype(linktype)?;

        packets.push((linktype, data));
    }

    Ok(packets)
}

fn check_linktype(linktype: DataLink) -> Result<(), CaptureError> {
    match linktype {
        DataLink::IEEE802_11 | DataLink::IEEE802_11_RADIOTAP => Ok(()),
        other => Err(CaptureError::UnsupportedLinkType(other)),
    }
}

fn parse_packet(linktype: DataLink, data: &[u8]) -> Result<Frame, String> {
    match linktype {
        DataLink::IEEE802_11 => parse_frame(data, false).map_err(|error| error.to_string()),
        DataLink::IEEE802_11_RADIOTAP => {
            let radiotap = Radiotap::from_bytes(data)
                .map_err(|error| format!("couldn't read radiotap header: {error:?}"))?;
            let payload = &data[radiotap.header.length..];
            let fcs_included = radiotap.flags.map_or(false, |flags| flags.fcs);
            parse_frame(payload, fcs_included).map_err(|error| error.to_string())
        }
        other => Err(format!("unsupported link type {other:?}")),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_select_empty() {
        assert!(matches!(select(&[], 0), Err(CaptureError::Empty)));
    }
}
