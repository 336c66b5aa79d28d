use log::error;
use std::{env, error::Error};
use xrandr_screens::{all_screens, connected_screens, Screen, XrandrExecutor};

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let all = args.iter().any(|a| a == "--all");
    if let Some(unknown) = args.iter().find(|a| *a != "--json" && *a != "--all") {
        return Err(format!("unknown argument {unknown}, expected --json and/or --all").into());
    }

    let executor = XrandrExecutor::from_env();
    let screens: Vec<Screen> = if all {
        all_screens(&executor)?
    } else {
        connected_screens(&executor)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&screens)?);
        return Ok(());
    }
    for screen in &screens {
        println!("{screen}");
        for mode in screen.supported_modes() {
            println!("    {mode}");
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();
    if let Err(e) = run() {
        error!("{e}");
        return Err(e);
    }
    Ok(())
}
