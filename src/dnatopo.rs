extern crate clap;
use clap::*;

mod cmd_dnatopo;

fn main() -> anyhow::Result<()> {
    let app = Command::new("dnatopo")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`dnatopo` - Biophysical topology scanner for DNA")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print progress information to stderr"),
        )
        .subcommand(cmd_dnatopo::scan::make_subcommand())
        .subcommand(cmd_dnatopo::summary::make_subcommand())
        .subcommand(cmd_dnatopo::stats::make_subcommand())
        .subcommand(cmd_dnatopo::corr::make_subcommand())
        .subcommand(cmd_dnatopo::attrib::make_subcommand())
        .subcommand(cmd_dnatopo::compare::make_subcommand())
        .subcommand(cmd_dnatopo::mutate::make_subcommand())
        .after_help(
            r###"Subcommand groups:

* Single sequence:
    * scan    - Per-window features and classes as CSV
    * summary - Archetype counts and mean Tm
    * stats   - Population mean/std of each feature
    * corr    - Local H-bond/stacking correlation map
    * attrib  - Feature attribution of one window

* Paired sequences:
    * compare - Window-by-window feature deltas
    * mutate  - What-if single point mutation

Alphabet: A, C, G, T and M (5-methylcytosine). Other characters are
treated as N, which the model scores like A.

Set RUST_LOG to override the log level.

"###,
        );

    let matches = app.get_matches();

    let level = if matches.get_flag("verbose") {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();

    // Check which subcomamnd the user ran...
    match matches.subcommand() {
        Some(("scan", sub_matches)) => cmd_dnatopo::scan::execute(sub_matches),
        Some(("summary", sub_matches)) => cmd_dnatopo::summary::execute(sub_matches),
        Some(("stats", sub_matches)) => cmd_dnatopo::stats::execute(sub_matches),
        Some(("corr", sub_matches)) => cmd_dnatopo::corr::execute(sub_matches),
        Some(("attrib", sub_matches)) => cmd_dnatopo::attrib::execute(sub_matches),
        Some(("compare", sub_matches)) => cmd_dnatopo::compare::execute(sub_matches),
        Some(("mutate", sub_matches)) => cmd_dnatopo::mutate::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
