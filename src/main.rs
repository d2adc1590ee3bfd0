use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches,
    Command,
};
use colored::Colorize;

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
            Arg::new("root")
                .short('r')
                .long("root")
                .value_name("DIR")
                .help("Directory to (re)build, replacing the layout's own root"),
        )
        .arg(
            Arg::new("layout")
                .short('l')
                .long("layout")
                .value_name("FILE")
                .help("TOML layout to build instead of the built-in tts_core layout"),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .help("Print the planned tree without touching the filesystem")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logger(matches.get_flag("verbose"));

    handle_build(&matches)
}

fn init_logger(is_verbose: bool) {
    let level = if is_verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn handle_build(args: &ArgMatches) -> miette::Result<()> {
    let layout_file = args.get_one::<String>("layout").map(String::as_str);
    let root = args.get_one::<String>("root").map(String::as_str);

    let layout = tts_scaffold::api::load_layout(layout_file, root)?;

    if args.get_flag("dry-run") {
        tts_scaffold::api::preview_tree(&layout)?;
        return Ok(());
    }

    let manifest = tts_scaffold::api::rebuild_tree(&layout)?;

    println!(
        "{} {} ({} directories, {} files)",
        "done".bold().green(),
        manifest.root.display(),
        manifest.directories().count(),
        manifest.files().count()
    );

    Ok(())
}
