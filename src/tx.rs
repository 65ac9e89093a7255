use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use dot11_frame::frame::components::InformationElement;
use dot11_frame::Frame;
use rand::{thread_rng, Rng};

/// Radiotap header prepended to every injected frame. The driver fills
/// in the rest, we only ask it not to wait for ACKs.
pub const TX_RADIOTAP: [u8; 10] = [
    0x00, 0x00, /* radiotap version and padding */
    0x0a, 0x00, /* radiotap header length */
    0x00, 0x80, 0x00, 0x00, /* bitmap */
    0x28, 0x00, /* tx flags */
];

/// How often a storm batch is retransmitted before new random SSIDs are
/// rolled.
pub const STORM_ROUNDS: u32 = 50;

const STORM_SSID_LEN: usize = 32;
const STORM_GAP: Duration = Duration::from_micros(100);

#[derive(Debug)]
pub struct ReplayStats {
    pub sent: u64,
    pub elapsed: Duration,
}

/// Serialize a frame into an injectable packet.
pub fn frame_bytes(frame: &Frame) -> Vec<u8> {
    let mut packet = TX_RADIOTAP.to_vec();
    packet.extend(frame.encode());
    packet
}

pub fn write_packet(fd: i32, packet: &[u8]) -> Result<(), String> {
    let bytes_written =
        unsafe { libc::write(fd, packet.as_ptr() as *const libc::c_void, packet.len()) };

    if bytes_written < 0 {
        let error_code = io::Error::last_os_error();

        return Err(error_code.to_string());
    }

    Ok(())
}

/// Send the frame `count` times, or until the running flag clears when
/// no count is given. Sleeps `interval` between writes. Any write error
/// aborts the replay.
pub fn replay(
    fd: i32,
    frame: &Frame,
    count: Option<u64>,
    interval: Duration,
    running: &AtomicBool,
) -> Result<ReplayStats, String> {
    let packet = frame_bytes(frame);
    let start = Instant::now();
    let mut sent: u64 = 0;

    while running.load(Ordering::SeqCst) {
        write_packet(fd, &packet)?;
        sent += 1;

        if let Some(count) = count {
            if sent >= count {
                break;
            }
        }
        thread::sleep(interval);
    }

    Ok(ReplayStats {
        sent,
        elapsed: start.elapsed(),
    })
}

/// Flood variants of the base frame with random SSIDs.
///
/// Each batch holds `batch` copies of the frame, every copy with a fresh
/// 32 byte random SSID payload. A batch is blasted [STORM_ROUNDS] times
/// with a short gap between rounds, then the SSIDs are rolled again.
/// Runs until the running flag clears.
pub fn storm(
    fd: i32,
    frame: &Frame,
    batch: usize,
    running: &AtomicBool,
) -> Result<ReplayStats, String> {
    let start = Instant::now();
    let mut sent: u64 = 0;
    let mut rng = thread_rng();

    'outer: while running.load(Ordering::SeqCst) {
        let mut packets = Vec::with_capacity(batch);
        for _ in 0..batch {
            let mut variant = frame.clone();
            let mut ssid = [0u8; STORM_SSID_LEN];
            rng.fill(&mut ssid[..]);

            if let Some(element) = variant
                .elements_mut()
                .first_of_mut(InformationElement::SSID)
            {
                element
                    .set_payload(ssid.to_vec())
                    .map_err(|error| error.to_string())?;
            }
            packets.push(frame_bytes(&variant));
        }

        for _ in 0..STORM_ROUNDS {
            if !running.load(Ordering::SeqCst) {
                break 'outer;
            }
            for packet in &packets {
                write_packet(fd, packet)?;
                sent += 1;
            }
            thread::sleep(STORM_GAP);
        }
    }

    Ok(ReplayStats {
        sent,
        elapsed: start.elapsed(),
    })
}
