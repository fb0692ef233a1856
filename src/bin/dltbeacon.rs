//! DLT UDP Beacon Binary
//!
//! Periodic beacon yang mengirim DLT verbose log message ke multicast
//! group 239.255.42.99:3490, 2 messages per second.
//!
//! Usage:
//!   cargo run --release -- <localaddrip>
//!
//! Socket setup failures (selain bind) hanya dilaporkan, tidak fatal:
//! beacon tetap berguna di network yang menolak sebagian socket options.

use std::env;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::process;
use std::thread;
use std::time::Duration;

use dltbeacon::{DltEncoder, DltWriter, LogLevel, UdpTransport};

/// Port standar DLT over UDP.
const DLT_PORT: u16 = 3490;
/// Multicast group untuk transmit.
const TX_MULTICAST: Ipv4Addr = Ipv4Addr::new(239, 255, 42, 99);

/// Jumlah message sebelum beacon selesai.
const LOOPS: u32 = 1000;
/// Messages per second.
const FREQUENCY: u64 = 2;

/// Beacon configuration
struct BeaconConfig {
    ecu_id: &'static str,
    app_id: &'static str,
    ctx_id: &'static str,
    level: LogLevel,
}

impl Default for BeaconConfig {
    fn default() -> Self {
        Self {
            ecu_id: "ECU1",
            app_id: "APP1",
            ctx_id: "CTX1",
            level: LogLevel::Info,
        }
    }
}

fn usage(program: &str) {
    println!("Usage: {} <localaddrip>", program);
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("dltbeacon");

    let local: Ipv4Addr = match args.get(1).map(|a| a.parse()) {
        Some(Ok(addr)) => addr,
        Some(Err(_)) => {
            usage(program);
            println!(" Invalid address");
            process::exit(1);
        }
        None => {
            usage(program);
            process::exit(1);
        }
    };

    let config = BeaconConfig::default();
    let dest = SocketAddr::V4(SocketAddrV4::new(TX_MULTICAST, DLT_PORT));

    // Bind gagal = fatal; tanpa socket tidak ada yang bisa dikirim.
    let transport = match UdpTransport::bind(SocketAddrV4::new(local, DLT_PORT)) {
        Ok(t) => t,
        Err(e) => {
            println!("bind; error {}", e);
            process::exit(1);
        }
    };

    match transport.send_buffer_size() {
        Ok(size) => println!("Buffer size for socket: {}", size),
        Err(e) => println!("getsockopt(SO_SNDBUF); error {}", e),
    }

    // Multicast options: non-fatal, lapor dan lanjut.
    if let Err(e) = transport.set_multicast_loop(false) {
        println!("setsockopt(IP_MULTICAST_LOOP); error {}", e);
    }
    if let Err(e) = transport.set_multicast_iface(local) {
        println!("setsockopt(IP_MULTICAST_IF); error {}", e);
    }
    if let Err(e) = transport.set_multicast_ttl(1) {
        println!("setsockopt(IP_MULTICAST_TTL); error {}", e);
    }

    println!(
        "📡 DLT beacon {}:{} -> {}:{} ({} msgs, {}/sec)",
        local, DLT_PORT, TX_MULTICAST, DLT_PORT, LOOPS, FREQUENCY
    );

    let encoder = DltEncoder::with_level(config.ecu_id, config.app_id, config.ctx_id, config.level);
    let mut writer = DltWriter::new(encoder, transport, dest);

    let delay = Duration::from_millis(1000 / FREQUENCY);
    let mut num = 1;
    while num < LOOPS {
        let message = format!("A DLT message from {}. Count is {}", local, num);
        // Send failures non-fatal: loss adalah bagian dari protokol
        if let Err(e) = writer.write(&message) {
            println!("dlt write; error {}", e);
        }

        num += 1;
        thread::sleep(delay);
    }
}
