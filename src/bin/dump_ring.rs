//! Packs the ring built from stdin names into C `struct user` records, hexdumps them,
//! then reads the records back by following their `next` pointers.
//! `printf 'alice\nbob\n' | cargo run --bin dump_ring`
use std::io;

use userring::image::{DEFAULT_BASE_ADDRESS, hexdump, pack_ring, unpack_ring};
use userring::input::collect_names;
use userring::logging;

fn main() -> userring::Result<()> {
    logging::init();

    let list = collect_names(io::stdin().lock())?;
    let image = pack_ring(&list, DEFAULT_BASE_ADDRESS);
    print!("{}", hexdump(&image, DEFAULT_BASE_ADDRESS));

    println!();
    for user in unpack_ring(&image, DEFAULT_BASE_ADDRESS)? {
        println!("user {}: {}", user.id, user.name);
    }
    Ok(())
}
