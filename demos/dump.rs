use std::env;
use std::fs;
use std::process;

use dns_wire::Packet;

pub fn main() {
    env_logger::init();

    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: dump <response-packet-file>");
            process::exit(2);
        }
    };

    let data = match fs::read(&path) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("failed to read {}: {}", path, err);
            process::exit(1);
        }
    };

    let packet = match Packet::parse(&data) {
        Ok(packet) => packet,
        Err(err) => {
            eprintln!("failed to decode {}: {}", path, err);
            process::exit(1);
        }
    };

    println!("{:#?}", packet.header);
    for question in &packet.questions {
        println!("{:#?}", question);
    }
    for record in packet
        .answers
        .iter()
        .chain(&packet.nameservers)
        .chain(&packet.additional)
    {
        println!("{:#?}", record);
    }
}
