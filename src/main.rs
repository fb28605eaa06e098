use clap::{
    crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches, Command,
};
use dogwalk_scaffold::{manifest::DEFAULT_PROJECT_DIR, scaffold::ErrorPolicy};

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .arg(
            Arg::new("project_dir")
                .help("Root directory name for the project")
                .default_value(DEFAULT_PROJECT_DIR),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("keep-going")
                .short('k')
                .long("keep-going")
                .help("Keep creating the remaining files when one of them fails")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .help("Show what would be created without touching the disk")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    handle_scaffold(&matches)
}

fn init_logging(is_verbose: bool) {
    let level = if is_verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn handle_scaffold(args: &ArgMatches) -> miette::Result<()> {
    let project_dir = args.get_one::<String>("project_dir").map(String::as_str);

    if args.get_flag("dry-run") {
        dogwalk_scaffold::api::preview(project_dir)?;

        return Ok(());
    }

    let policy = if args.get_flag("keep-going") {
        ErrorPolicy::ContinueOnError
    } else {
        ErrorPolicy::AbortOnFirst
    };

    dogwalk_scaffold::api::scaffold(project_dir, policy)?;

    Ok(())
}
