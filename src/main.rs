mod cli;
mod dates;
mod input;
mod jwt;
mod render;

use clap::Parser;
use cli::JutArgs;
use jwt::Jwt;

fn main() {
    if let Err(err) = run() {
        eprintln!("jut: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = JutArgs::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let token = input::acquire_token(args.token)?;
    let jwt: Jwt = token.parse()?;

    if args.json {
        println!("{}", render::render_raw(&jwt));
    } else {
        print!("{}", render::render_pretty(&jwt, chrono::Local::now()));
    }

    Ok(())
}
