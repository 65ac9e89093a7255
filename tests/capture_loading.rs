// Integration tests for capture loading in both the pcap and pcapng formats

use std::fs::{self, File};
use std::path::PathBuf;
use std::time::Duration;

use beaconsmith::capture::{self, CaptureError};
use beaconsmith::tx::TX_RADIOTAP;
use pcap_file::pcap::{PcapHeader, PcapPacket, PcapWriter};
use pcap_file::pcapng::blocks::enhanced_packet::EnhancedPacketBlock;
use pcap_file::pcapng::blocks::interface_description::InterfaceDescriptionBlock;
use pcap_file::pcapng::PcapNgWriter;
use pcap_file::DataLink;

const BEACON: [u8; 50] = [
    128, 0, // FrameControl
    0, 0, // Duration
    255, 255, 255, 255, 255, 255, // Destination
    64, 227, 214, 191, 221, 1, // Transmitter
    64, 227, 214, 191, 221, 1, // BSSID
    16, 0, // Sequence 1
    1, 0, 0, 0, 0, 0, 0, 0, // Timestamp
    100, 0, // Interval
    17, 4, // Capability
    0, 4, b'A', b'B', b'C', b'D', // SSID "ABCD"
    1, 3, 0x82, 0x84, 0x8b, // Supported rates
    3, 1, 6, // DS parameter, channel 6
];

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("beaconsmith-{}-{}", std::process::id(), name))
}

fn write_pcap(name: &str, datalink: DataLink, packets: &[&[u8]]) -> PathBuf {
    let path = temp_path(name);
    let file = File::create(&path).expect("could not create capture");
    let header = PcapHeader {
        datalink,
        ..Default::default()
    };
    let mut writer = PcapWriter::with_header(file, header).expect("could not write pcap header");
    for packet in packets {
        writer
            .write_packet(&PcapPacket::new(
                Duration::from_secs(1),
                packet.len() as u32,
                packet,
            ))
            .expect("could not write packet");
    }
    path
}

fn write_pcapng(name: &str, datalink: DataLink, packets: &[&[u8]]) -> PathBuf {
    let path = temp_path(name);
    let file = File::create(&path).expect("could not create capture");
    let mut writer = PcapNgWriter::new(file).expect("could not write section header");
    writer
        .write_pcapng_block(InterfaceDescriptionBlock {
            linktype: datalink,
            snaplen: 0,
            options: vec![],
        })
        .expect("could not write interface block");
    for packet in packets {
        writer
            .write_pcapng_block(EnhancedPacketBlock {
                interface_id: 0,
                timestamp: Duration::from_secs(1),
                original_len: packet.len() as u32,
                data: (*packet).into(),
                options: vec![],
            })
            .expect("could not write packet block");
    }
    path
}

#[test]
fn test_load_pcap() {
    let path = write_pcap("load.pcap", DataLink::IEEE802_11, &[&BEACON]);

    let frames = capture::load(&path).expect("load failed");
    assert_eq!(frames.len(), 1);

    let frame = capture::select(&frames, 0).expect("select failed");
    assert_eq!(frame.elements().len(), 3);
    assert_eq!(frame.elements().ssid(), Some("ABCD".to_string()));
    assert_eq!(frame.encode(), BEACON.to_vec());

    fs::remove_file(&path).ok();
}

#[test]
fn test_load_pcapng_strips_radiotap() {
    let mut packet = TX_RADIOTAP.to_vec();
    packet.extend_from_slice(&BEACON);
    let path = write_pcapng(
        "radiotap.pcapng",
        DataLink::IEEE802_11_RADIOTAP,
        &[&packet],
    );

    let frames = capture::load(&path).expect("load failed");
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].encode(), BEACON.to_vec());

    fs::remove_file(&path).ok();
}

#[test]
fn test_load_pcapng_bare_frames() {
    let path = write_pcapng("bare.pcapng", DataLink::IEEE802_11, &[&BEACON, &BEACON]);

    let frames = capture::load(&path).expect("load failed");
    assert_eq!(frames.len(), 2);

    fs::remove_file(&path).ok();
}

#[test]
fn test_empty_capture() {
    let path = write_pcap("empty.pcap", DataLink::IEEE802_11, &[]);

    let frames = capture::load(&path).expect("load failed");
    assert!(frames.is_empty());
    assert!(matches!(
        capture::select(&frames, 0),
        Err(CaptureError::Empty)
    ));

    fs::remove_file(&path).ok();
}

#[test]
fn test_select_out_of_range() {
    let path = write_pcap("range.pcap", DataLink::IEEE802_11, &[&BEACON]);

    let frames = capture::load(&path).expect("load failed");
    assert!(matches!(
        capture::select(&frames, 5),
        Err(CaptureError::NoSuchFrame(5, 1))
    ));

    fs::remove_file(&path).ok();
}

#[test]
fn test_garbage_file() {
    let path = temp_path("garbage.pcap");
    fs::write(&path, b"this is not a capture file").expect("could not write file");

    assert!(matches!(capture::load(&path), Err(CaptureError::Read(_))));

    fs::remove_file(&path).ok();
}

#[test]
fn test_missing_file() {
    let path = temp_path("does-not-exist.pcap");

    assert!(matches!(capture::load(&path), Err(CaptureError::Io(_))));
}

#[test]
fn test_ethernet_capture_rejected() {
    let path = write_pcap("ethernet.pcap", DataLink::ETHERNET, &[&BEACON]);

    assert!(matches!(
        capture::load(&path),
        Err(CaptureError::UnsupportedLinkType(DataLink::ETHERNET))
    ));

    fs::remove_file(&path).ok();
}

#[test]
fn test_undecodable_packets_are_skipped() {
    // An ACK control frame between two beacons. It parses as an
    // unhandled subtype and must not shift the indices of the rest.
    let ack = [0xd4, 0x00, 0x00, 0x00, 0x40, 0xe3, 0xd6, 0xbf, 0xdd, 0x01];
    let path = write_pcap("mixed.pcap", DataLink::IEEE802_11, &[&BEACON, &ack, &BEACON]);

    let frames = capture::load(&path).expect("load failed");
    assert_eq!(frames.len(), 2);

    fs::remove_file(&path).ok();
}
