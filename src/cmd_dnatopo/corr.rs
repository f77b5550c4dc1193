use clap::*;
use std::io::Write;

use super::args;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    let cmd = Command::new("corr")
        .about("Local correlation of H-bonding and stacking")
        .after_help(
            r###"
For every run of 5 consecutive windows, prints the Pearson correlation of
hb_per_base against stack_per_base, keyed by the index of the first window.

* A constant channel in the run gives 0.
* Sequences with fewer than 5 windows print nothing.

Examples:
1. Correlation map with default windows:
   dnatopo corr tests/dna/promoter.fa

"###,
        )
        .arg(
            Arg::new("infiles")
                .required(true)
                .num_args(1..)
                .index(1)
                .help("Input FASTA file(s) to process"),
        );
    let cmd = args::add_scan_args(cmd);
    let cmd = args::add_parallel_arg(cmd);
    args::add_outfile_arg(cmd)
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let mut writer = dnatopo::writer(args.get_one::<String>("outfile").unwrap())?;

    let results = args::scan_files(args)?;

    writer.write_all(b"name\tindex\tcorrelation\n")?;
    for (name, result) in &results {
        for point in &result.correlation_map {
            writer.write_fmt(format_args!(
                "{}\t{}\t{:.4}\n",
                name, point.index, point.correlation
            ))?;
        }
    }

    Ok(())
}
