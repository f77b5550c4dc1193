use clap::*;
use std::io::Write;

use super::args;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    let cmd = Command::new("scan")
        .about("Per-window biophysical features and classes as CSV")
        .after_help(
            r###"
Slides a window over each sequence, computes nearest-neighbor features,
standardizes them within the sequence and classifies every window.

Output columns:
    Index,Start,End,Sequence,GC,HBond_Per_Base,Stacking_E,dG_Per_Base,
    Zx,Zy,Zz,Bendability,Tm_Celsius,M_Distance,Archetype,AnomalyType

Notes:
* Start/End are 0-based, half-open.
* Only full windows are reported; sequences shorter than --width fail.
* With several records the header is written once, rows follow input order.
* Input files can be gzipped. 'stdin' reads standard input.
* --adaptive re-runs a sequence at 2.5σ when nothing passes the threshold.

Examples:
1. Default scan (15 bp windows, 5 bp stride, 3σ):
   dnatopo scan tests/dna/promoter.fa

2. Wider windows under physiological Mg2+:
   dnatopo scan input.fa -w 30 -s 10 --mg 0.002

3. Many records on 4 threads:
   dnatopo scan genome.fa.gz -p 4 -o windows.csv

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
    //----------------------------
    // Args
    //----------------------------
    let mut writer = dnatopo::writer(args.get_one::<String>("outfile").unwrap())?;

    //----------------------------
    // Operating
    //----------------------------
    let results = args::scan_files(args)?;

    //----------------------------
    // Output
    //----------------------------
    writer.write_fmt(format_args!("{}\n", dnatopo::libs::scan::csv_header()))?;
    for (_, result) in &results {
        for window in &result.windows {
            writer.write_fmt(format_args!("{}\n", dnatopo::libs::scan::csv_row(window)))?;
        }
    }

    Ok(())
}
