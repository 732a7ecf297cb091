#[macro_use]
extern crate clap;
extern crate linheap;

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use linheap::console::{Console, Kind};

fn main() {
    let matches = clap::App::new("heapctl")
        .about("Interactive menu over two linked list heaps")
        .arg(clap::Arg::with_name("kind")
            .long("kind")
            .value_name("KIND")
            .possible_values(&["min", "sorted"])
            .help("Heap implementation to use instead of asking"))
        .arg(clap::Arg::with_name("script")
            .long("script")
            .value_name("FILE")
            .help("Reads menu input from a file instead of stdin"))
        .get_matches();

    // Log records go to stderr so they never mix with the menu output; RUST_LOG picks the level
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let kind = value_t!(matches, "kind", Kind).ok();
    let stdout = io::stdout();
    let result = match matches.value_of_os("script") {
        Some(path) => match File::open(path) {
            Ok(file) => {
                let lines = BufReader::new(file).lines().map_while(Result::ok);
                Console::new(lines, stdout.lock()).run(kind)
            }
            Err(e) => {
                eprintln!("Couldn't open {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => {
            let stdin = io::stdin();
            let lines = stdin.lock().lines().map_while(Result::ok);
            Console::new(lines, stdout.lock()).run(kind)
        }
    };
    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
