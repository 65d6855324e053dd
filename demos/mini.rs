// SPDX-License-Identifier: MPL-2.0

//! Show battery readings of a battery-powered light (Key Light Mini).
//!
//! # Usage
//!
//! ```bash
//! cargo run --example mini -- <host>
//! ```

use std::env;

use elgato_lib::{Elgato, Error};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <host>", args[0]);
        std::process::exit(1);
    }

    let light = Elgato::new(&args[1])?;

    println!("{:#?}", light.get_info().await?);
    println!("{:#?}", light.get_state().await?);

    match light.battery().await {
        Ok(battery) => {
            println!("Level: {} %", battery.level());
            println!("Power: {}W", battery.charge_power());
            println!("Voltage: {}V", battery.charge_voltage());
            println!("Current: {}A", battery.charge_current());
            println!("Source: {:?} ({:?})", battery.power_source(), battery.status());
        }
        Err(Error::NoBattery) => println!("This light has no battery"),
        Err(e) => return Err(e.into()),
    }

    light.close();
    Ok(())
}
