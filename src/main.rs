use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches,
    Command,
};
use log::LevelFilter;

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("preview")
                .short('p')
                .long("preview")
                .help("Print the tree that would be created without writing anything")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("destination")
                .help("Project base path; prompts when omitted, empty means ./next-finance-website"),
        )
        .get_matches();

    let is_verbose = matches.get_flag("verbose");

    init_logging(is_verbose);

    handle_create(&matches)
}

fn init_logging(is_verbose: bool) {
    let level = if is_verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn handle_create(args: &ArgMatches) -> miette::Result<()> {
    let destination = args.get_one::<String>("destination");

    if args.get_flag("preview") {
        let destination = destination.map(String::as_str).unwrap_or_default();

        next_skeleton::preview_project(destination)?;

        return Ok(());
    }

    match destination {
        Some(destination) => next_skeleton::create_project(destination)?,
        None => next_skeleton::create_project_interactively()?,
    };

    Ok(())
}
