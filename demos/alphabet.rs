//! Prints the lowercase alphabet, then the alphanumeric characters.
//!
//! Run with `cargo run --example alphabet`.

use streams::prelude::*;

fn alphabet() -> impl Stream<Item = char> {
    map(range('a' as u32, 'z' as u32 + 1), to_char)
}

fn alphanum() -> impl Stream<Item = char> {
    chain_all([
        alphabet().boxed(),
        alphabet().map(|c| c.to_ascii_uppercase()).boxed(),
        map(range('0' as u32, '9' as u32 + 1), to_char).boxed(),
    ])
}

fn to_char(code: u32) -> char {
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn main() {
    println!("{}", alphabet().into_iter().collect::<String>()); // abcdefghijklmnopqrstuvwxyz
    println!("{}", alphanum().into_iter().collect::<String>());
}
