//! # flatini demo
//!
//! A small command-line tool that exercises the library end to end:
//! parse a file, query typed values, mutate the store, and write it back.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example ini_demo -- show path/to/file.ini
//! cargo run --example ini_demo -- get path/to/file.ini section key
//! cargo run --example ini_demo -- set path/to/file.ini section key value
//! ```

use std::process::ExitCode;

use flatini::SectionList;

fn usage() -> ExitCode {
    eprintln!("usage: ini_demo show <file>");
    eprintln!("       ini_demo get <file> <section> <key>");
    eprintln!("       ini_demo set <file> <section> <key> <value>");
    ExitCode::FAILURE
}

fn show(list: &SectionList) {
    for (name, section) in list.iter() {
        println!("[{name}]  ({} keys)", section.len());
        for kv in section {
            match kv.as_bool() {
                Some(b) => println!("  {} = {}  (bool: {b})", kv.key, kv.value),
                None => match kv.as_f64() {
                    Some(f) => println!("  {} = {}  (number: {f})", kv.key, kv.value),
                    None => println!("  {} = {}", kv.key, kv.value),
                },
            }
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, rest) = match args.split_first() {
        Some(split) => split,
        None => return usage(),
    };

    let path = match rest.first() {
        Some(path) => path,
        None => return usage(),
    };
    let mut list = match SectionList::load(path) {
        Ok(list) => list,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match (command.as_str(), &rest[1..]) {
        ("show", []) => show(&list),
        ("get", [section, key]) => match list.as_str(section, key) {
            Some(value) => println!("{value}"),
            None => {
                eprintln!("no value for [{section}] {key}");
                return ExitCode::FAILURE;
            }
        },
        ("set", [section, key, value]) => {
            if !list.set_str(section, key, value) {
                eprintln!("the key must not be empty");
                return ExitCode::FAILURE;
            }
            match list.store(path) {
                Ok(bytes) => println!("wrote {bytes} bytes to {path}"),
                Err(err) => {
                    eprintln!("{err}");
                    return ExitCode::FAILURE;
                }
            }
        }
        _ => return usage(),
    }
    ExitCode::SUCCESS
}
