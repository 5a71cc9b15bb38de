//! # Demo CLI
//!
//! A tiny binary that exercises the chunk API end to end and prints a
//! human-readable summary. Not the timing/report harness described in the
//! crate docs as an external collaborator — this demo does not measure
//! performance, it only demonstrates the surface: fill a region, carve a
//! cell, report the resulting span and quad counts.

use clap::{arg, Command};
use cuboid_chunk::{Chunk, Point};

fn build_cli() -> Command {
    Command::new("chunk-demo")
        .about("Fills a cuboid-span chunk, carves a cell, and reports span/quad counts")
        .arg(arg!(-i --id <ID> "block id to fill with").default_value("1"))
        .arg(arg!(-c --carve "carve out the chunk's center cell after filling"))
        .arg(arg!(-j --json "print the generated quads as JSON instead of a count"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = build_cli().get_matches();
    let id: u16 = matches.get_one::<String>("id").unwrap().parse()?;

    let mut chunk = Chunk::new();
    chunk.set_block_span(Point::new(0, 0, 0), Point::new(15, 15, 15), id);
    println!("filled whole chunk with id={id}: {} span(s)", chunk.debug_total_spans());

    if matches.get_flag("carve") {
        let center = Point::new(7, 7, 7);
        chunk.set_block(center, 0);
        println!("carved (7,7,7): {} span(s)", chunk.debug_total_spans());
    }

    let quads = chunk.generate_quads();
    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&quads)?);
    } else {
        println!("generate_quads: {} quad(s)", quads.len());
    }
    Ok(())
}
