//! Game mode and map listing.

use rivals_core::GameMode;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    for mode in GameMode::all() {
        println!("{}", mode.name);
        for map in mode.maps {
            println!("  - {map}");
        }
    }
    Ok(())
}
