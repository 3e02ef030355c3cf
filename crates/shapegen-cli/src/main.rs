mod cli;
mod commands;
mod logging;

use cli::{PackParams, RecordsParams, ShapesParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    logging::init(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("shapes", m)) => {
            let params = ShapesParams::from_matches(m);
            commands::shapes::run(params.into());
        }
        Some(("records", m)) => {
            let params = RecordsParams::from_matches(m);
            commands::records::run(params.into());
        }
        Some(("pack", m)) => {
            let params = PackParams::from_matches(m);
            commands::pack::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
