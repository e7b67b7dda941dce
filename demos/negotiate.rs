//! Parse a header value, print it ranked, and pick the best match.
//!
//! Usage:
//!   cargo run --example negotiate -- <header-name> <value> [prefix]
//!   cargo run --example negotiate -- Accept-Language "da, en-gb;q=0.8, en;q=0.7" en

use accept_codings::{Codings, HeaderKind};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: negotiate <header-name> <value> [prefix]");
        eprintln!("  negotiate Accept-Encoding \"gzip;q=1.0, identity; q=0.5, *;q=0\"");
        std::process::exit(1);
    }

    let Some(kind) = HeaderKind::from_name(&args[1]) else {
        eprintln!("Unknown header {:?}, expected one of:", args[1]);
        for kind in HeaderKind::ALL {
            eprintln!("  {}", kind);
        }
        std::process::exit(1);
    };
    let value = &args[2];
    let prefix = args.get(3).map_or("", String::as_str);

    let mut codings = Codings::parse(value)?;
    println!("{}: {}", kind, value);
    println!("{} coding(s), {} accepted", codings.len(), codings.if_accepted().len());

    let sorted = codings.sorted();
    println!("sorted    = {}", sorted);
    for coding in sorted.iter() {
        println!("  {:<24} q={:<6} attributes={:?}", coding.name, coding.quality, coding.attributes);
    }

    match kind.preferred_like(value, prefix) {
        Some(name) => println!("preferred = {} (like {:?})", name, prefix),
        None => println!("preferred = none (like {:?})", prefix),
    }

    Ok(())
}
