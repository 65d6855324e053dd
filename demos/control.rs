// SPDX-License-Identifier: MPL-2.0

//! Print device info, settings and state, then toggle the light.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example control -- <host>
//! ```

use std::env;

use elgato_lib::Elgato;
use elgato_lib::state::StateChange;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <host>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  cargo run --example control -- elgato-key-light.local");
        std::process::exit(1);
    }

    let light = Elgato::new(&args[1])?;

    let info = light.get_info().await?;
    println!("{info:#?}");

    let settings = light.settings().await?;
    println!("{settings:#?}");

    let state = light.get_state().await?;
    println!("{state:#?}");

    let change = StateChange::new().with_power(state.power().toggled());
    let update = light.set_state(&change).await?;
    println!("Light is now {}", update.apply_to(&state).power());

    light.close();
    Ok(())
}
