//! Draws the ring built from stdin names.
//! I use it with `printf 'alice\nbob\n' | cargo run --bin draw_ring | dot -Tsvg > ring.svg`
use std::io;

use userring::input::collect_names;
use userring::logging;
use userring::visualize::draw_ring;

fn main() -> userring::Result<()> {
    logging::init();

    let list = collect_names(io::stdin().lock())?;
    print!("{}", draw_ring(&list)?);
    Ok(())
}
