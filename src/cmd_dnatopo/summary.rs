use clap::*;
use std::io::Write;

use super::args;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    let cmd = Command::new("summary")
        .about("Archetype counts and mean melting temperature")
        .after_help(
            r###"
Prints one line per sequence:

    name  windows  anomalies  threshold  promoters  anchors  z_dna  avg_tm

* anchors counts Mechanical Anchor, G-Quadruplex and Triplex Potential windows.
* threshold is the σ actually used, which differs from -t after an
  --adaptive retry.

Examples:
1. Summarize every record:
   dnatopo summary tests/dna/multi.fa

2. Lower the anomaly threshold automatically when nothing is found:
   dnatopo summary input.fa --adaptive

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

    let field_names = vec![
        "name",
        "windows",
        "anomalies",
        "threshold",
        "promoters",
        "anchors",
        "z_dna",
        "avg_tm",
    ];
    writer.write_all(format!("{}\n", field_names.join("\t")).as_ref())?;

    for (name, result) in &results {
        let summary = &result.summary;
        writer.write_all(
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{:.1}\n",
                name,
                result.windows.len(),
                result.anomalies().len(),
                result.threshold_used,
                summary.promoter_potential,
                summary.structural_anchors,
                summary.z_dna_sites,
                summary.avg_tm,
            )
            .as_ref(),
        )?;
    }

    Ok(())
}
