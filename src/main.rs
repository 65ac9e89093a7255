mod capture;
mod interface;
mod mutate;
mod rawsocks;
mod tx;

extern crate libc;
extern crate nix;

use std::os::fd::AsRawFd;
use std::path::Path;
use std::process::exit;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, bail, Error, Result};
use clap::Parser;
use dot11_frame::frame::components::{InformationElement, MacAddress};
use dot11_frame::{Addresses, Frame};
use libc::EXIT_FAILURE;
use nix::unistd::geteuid;

use crate::interface::InterfaceError;
use crate::mutate::{parse_payload_set, parse_retag, EditPlan};

#[derive(Parser)]
#[command(name = "Beaconsmith")]
#[command(about = "Replays captured 802.11 beacon frames with edited fields.", long_about = None)]
#[command(version)]
struct Arguments {
    #[arg(short, long, required_unless_present = "dry_run")]
    /// Interface to transmit on. Must support monitor mode.
    interface: Option<String>,

    #[arg(short, long, default_value = "base_packet.pcapng")]
    /// Capture file holding the frame to replay.
    capture: String,

    #[arg(short, long, default_value_t = 0)]
    /// Index of the frame to replay within the capture.
    frame: usize,

    #[arg(long)]
    /// Channel to transmit on, e.g. "6" or "44".
    channel: Option<String>,

    // Edits //
    #[arg(long)]
    /// Replace the SSID element payload.
    ssid: Option<String>,

    #[arg(long)]
    /// Replace the transmitter address (address 2).
    source: Option<String>,

    #[arg(long)]
    /// Replace the BSSID (address 3).
    bssid: Option<String>,

    #[arg(long, num_args = 2, value_names = ["I", "J"])]
    /// Swap two information elements by index.
    swap: Option<Vec<usize>>,

    #[arg(long, value_name = "INDEX:HEXBYTES")]
    /// Overwrite an element payload. Repeatable.
    set: Vec<String>,

    #[arg(long, value_name = "INDEX:ID")]
    /// Overwrite an element id. Repeatable.
    retag: Vec<String>,

    // Transmission //
    #[arg(long, default_value_t = 1, conflicts_with_all(vec!["loop_forever", "storm"]))]
    /// Number of transmissions.
    count: u64,

    #[arg(long = "loop", conflicts_with = "storm")]
    /// Transmit until interrupted.
    loop_forever: bool,

    #[arg(long, default_value_t = 0.1)]
    /// Seconds between transmissions.
    interval: f64,

    #[arg(long, value_name = "BATCH")]
    /// Flood BATCH random-SSID variants of the frame per round.
    storm: Option<usize>,

    #[arg(long)]
    /// Print the frame and the edits without transmitting.
    dry_run: bool,
}

fn main() -> Result<()> {
    let args = Arguments::parse();

    let frames = capture::load(Path::new(&args.capture))?;
    println!("Loaded {} frame(s) from {}.", frames.len(), args.capture);

    let mut frame = capture::select(&frames, args.frame)?.clone();

    println!();
    println!("======== Captured frame ========");
    print_frame(&frame);

    let plan = build_plan(&args)?;
    if !plan.is_empty() {
        mutate::apply(&mut frame, &plan)?;
        println!();
        println!("======== Edited frame ========");
        print_frame(&frame);
    }

    println!();
    if let Some(ssid) = frame.elements().ssid() {
        println!("SSID: {}", ssid);
    }
    if let Some(source) = frame.src() {
        println!("AP MAC: {}", source);
    }
    if let Some(element) = frame.elements().first_of(InformationElement::SSID) {
        println!("SSID element length: {}", element.len());
    }

    if args.dry_run {
        println!();
        println!("Dry run, nothing transmitted.");
        return Ok(());
    }

    if !geteuid().is_root() {
        println!("You need to run as root!");
        exit(EXIT_FAILURE);
    }

    if args.storm.is_some()
        && frame
            .elements()
            .first_of(InformationElement::SSID)
            .is_none()
    {
        bail!("Storm mode needs a frame with an SSID element.");
    }

    let Some(interface_name) = args.interface.as_deref() else {
        bail!("An interface is required to transmit.");
    };

    let mut monitor = interface::setup(interface_name, args.channel.as_deref())?;

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    let interval = Duration::from_secs_f64(args.interval);

    println!();
    let result = if let Some(batch) = args.storm {
        println!("😈 Storming {} variants on {}.", batch, monitor.name);
        tx::storm(monitor.fd.as_raw_fd(), &frame, batch, &running)
    } else if args.loop_forever {
        println!(
            "😈 Replaying on {} every {:?} until interrupted.",
            monitor.name, interval
        );
        tx::replay(monitor.fd.as_raw_fd(), &frame, None, interval, &running)
    } else {
        println!(
            "😈 Replaying {} time(s) on {} every {:?}.",
            args.count, monitor.name, interval
        );
        tx::replay(
            monitor.fd.as_raw_fd(),
            &frame,
            Some(args.count),
            interval,
            &running,
        )
    };

    // The interface goes back to station mode even when the replay
    // errored out partway.
    monitor.restore();

    let stats = result.map_err(InterfaceError::Transmit)?;
    let rate = stats.sent as f64 / stats.elapsed.as_secs_f64().max(f64::EPSILON);
    println!();
    println!(
        "Sent {} frame(s) in {:.2?} ({:.1}/s). 🤙",
        stats.sent, stats.elapsed, rate
    );

    Ok(())
}

fn build_plan(args: &Arguments) -> Result<EditPlan> {
    let payload_sets = args
        .set
        .iter()
        .map(|entry| parse_payload_set(entry).map_err(Error::msg))
        .collect::<Result<Vec<_>>>()?;
    let retags = args
        .retag
        .iter()
        .map(|entry| parse_retag(entry).map_err(Error::msg))
        .collect::<Result<Vec<_>>>()?;

    Ok(EditPlan {
        ssid: args.ssid.as_deref().map(|ssid| ssid.as_bytes().to_vec()),
        source: args.source.as_deref().map(parse_mac).transpose()?,
        bssid: args.bssid.as_deref().map(parse_mac).transpose()?,
        swap: args.swap.as_ref().map(|pair| (pair[0], pair[1])),
        payload_sets,
        retags,
    })
}

fn parse_mac(input: &str) -> Result<MacAddress> {
    MacAddress::from_str(input).map_err(|error| anyhow!("Bad MAC address {input}: {error}"))
}

fn print_frame(frame: &Frame) {
    let header = frame.header();
    println!(
        "Subtype: {:?} | Sequence: {} | Fragment: {}",
        header.frame_control.frame_subtype,
        header.sequence_control.sequence_number,
        header.sequence_control.fragment_number
    );
    println!("Address 1 (destination): {}", header.address_1);
    println!("Address 2 (transmitter): {}", header.address_2);
    println!("Address 3 (BSSID):       {}", header.address_3);
    match frame {
        Frame::Beacon(beacon) => println!(
            "Timestamp: {} | Interval: {} | Capability: {:#06x}",
            beacon.timestamp, beacon.beacon_interval, beacon.capability_info
        ),
        Frame::ProbeResponse(response) => println!(
            "Timestamp: {} | Interval: {} | Capability: {:#06x}",
            response.timestamp, response.beacon_interval, response.capability_info
        ),
    }
    for (index, element) in frame.elements().iter().enumerate() {
        println!(
            "[{:2}] id {:3} ({}) len {:3} {}",
            index,
            element.id(),
            InformationElement::id_name(element.id()),
            element.len(),
            format_payload(element.payload())
        );
    }
}

fn format_payload(payload: &[u8]) -> String {
    let ascii: String = payload
        .iter()
        .map(|&byte| {
            if byte.is_ascii_graphic() || byte == b' ' {
                byte as char
            } else {
                '.'
            }
        })
        .collect();
    format!("{} \"{}\"", hex::encode(payload), ascii)
}
