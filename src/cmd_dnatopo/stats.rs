use clap::*;
use dnatopo::libs::features::Feature;
use std::io::Write;

use super::args;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    let cmd = Command::new("stats")
        .about("Population mean and standard deviation of each feature")
        .after_help(
            r###"
Prints the statistics every z-score is computed against: for each sequence
and feature, the mean and the population standard deviation (divisor N)
across all windows.

Examples:
1. Feature statistics of 15 bp windows:
   dnatopo stats tests/dna/promoter.fa

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

    writer.write_all(b"name\tfeature\tmean\tstd\n")?;
    for (name, result) in &results {
        for feature in Feature::ALL {
            writer.write_fmt(format_args!(
                "{}\t{}\t{:.6}\t{:.6}\n",
                name,
                feature,
                result.stats.mean.get(feature),
                result.stats.std.get(feature),
            ))?;
        }
    }

    Ok(())
}
