// SPDX-License-Identifier: MPL-2.0

//! Change the display name of a light.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example change_name -- <host> <new name>
//! ```

use std::env;

use elgato_lib::Elgato;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: {} <host> <new name>", args[0]);
        std::process::exit(1);
    }

    let light = Elgato::new(&args[1])?;

    println!("Current name: {}", light.get_info().await?.display_name());
    light.set_display_name(&args[2]).await?;
    println!("New name: {}", light.get_info().await?.display_name());

    light.close();
    Ok(())
}
