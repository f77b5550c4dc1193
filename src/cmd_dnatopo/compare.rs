use clap::*;
use dnatopo::libs::compare::compare;
use dnatopo::libs::scan::ScanOptions;

use super::args;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    let cmd = Command::new("compare")
        .about("Window-by-window feature deltas of two sequences")
        .after_help(
            r###"
Analyzes the first record of each file and reports B - A for every feature
of every window pair, followed by the average delta.

* Windows are paired by position, no alignment is done.
* When the sequences differ in length, extra windows of the longer one are
  ignored. Coordinates come from A.
* With --adaptive, the retry applies to A; B reuses A's final threshold.

Examples:
1. Wild type against variant:
   dnatopo compare wt.fa variant.fa

"###,
        )
        .arg(
            Arg::new("infile_a")
                .required(true)
                .index(1)
                .help("Reference FASTA file"),
        )
        .arg(
            Arg::new("infile_b")
                .required(true)
                .index(2)
                .help("Query FASTA file"),
        );
    let cmd = args::add_scan_args(cmd);
    args::add_outfile_arg(cmd)
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let mut writer = dnatopo::writer(args.get_one::<String>("outfile").unwrap())?;
    let opts = args::scan_options(args);
    let adaptive = args.get_flag("adaptive");

    let rec_a = args::first_record(args.get_one::<String>("infile_a").unwrap())?;
    let rec_b = args::first_record(args.get_one::<String>("infile_b").unwrap())?;

    //----------------------------
    // Operating
    //----------------------------
    let res_a = args::scan_record(&rec_a, &opts, adaptive)?;
    let opts_b = ScanOptions {
        threshold: res_a.threshold_used,
        ..opts
    };
    let res_b = args::scan_record(&rec_b, &opts_b, false)?;

    if res_a.windows.len() != res_b.windows.len() {
        log::warn!(
            "{} has {} windows, {} has {}; comparing the first {}",
            rec_a.name,
            res_a.windows.len(),
            rec_b.name,
            res_b.windows.len(),
            res_a.windows.len().min(res_b.windows.len())
        );
    }
    let cmp = compare(&res_a, &res_b)?;

    //----------------------------
    // Output
    //----------------------------
    args::write_comparison(&mut writer, &cmp)?;

    Ok(())
}
