use clap::*;
use dnatopo::libs::motif::motif_hits;
use dnatopo::libs::scan::AnalysisWindow;
use std::io::Write;

use super::args;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    let cmd = Command::new("attrib")
        .about("Feature attribution of windows")
        .after_help(
            r###"
Explains why a window scores the way it does. Each window gets nine lines,
one per feature, ranked by its share of the squared z-score distance.

Output columns:
    name  index  archetype  anomaly  tm  motifs  rank  feature  value  z  score  percentage

* Without --window, only anomalous windows are reported.
* motifs lists the sequence motifs found in the window, comma separated.

Examples:
1. Attribution of all anomalous windows:
   dnatopo attrib tests/dna/outlier.fa

2. A single window, anomalous or not:
   dnatopo attrib tests/dna/promoter.fa --window 0

"###,
        )
        .arg(
            Arg::new("infiles")
                .required(true)
                .num_args(1..)
                .index(1)
                .help("Input FASTA file(s) to process"),
        )
        .arg(
            Arg::new("window")
                .long("window")
                .value_parser(value_parser!(usize))
                .num_args(1)
                .help("Window index to explain"),
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
    let opt_window = args.get_one::<usize>("window").copied();

    //----------------------------
    // Operating
    //----------------------------
    let results = args::scan_files(args)?;

    //----------------------------
    // Output
    //----------------------------
    let field_names = vec![
        "name",
        "index",
        "archetype",
        "anomaly",
        "tm",
        "motifs",
        "rank",
        "feature",
        "value",
        "z",
        "score",
        "percentage",
    ];
    writer.write_all(format!("{}\n", field_names.join("\t")).as_ref())?;

    for (name, result) in &results {
        let selected: Vec<&AnalysisWindow> = match opt_window {
            Some(idx) => {
                let window = result.windows.get(idx).ok_or_else(|| {
                    anyhow::anyhow!(
                        "{}: window {} out of range, {} windows",
                        name,
                        idx,
                        result.windows.len()
                    )
                })?;
                vec![window]
            }
            None => result.windows.iter().filter(|w| w.is_anomalous).collect(),
        };

        for window in selected {
            let motifs = motif_hits(window.seq()).join(",");
            for (rank, contrib) in window.contributions().iter().enumerate() {
                writer.write_fmt(format_args!(
                    "{}\t{}\t{}\t{}\t{:.2}\t{}\t{}\t{}\t{:.4}\t{:.4}\t{:.4}\t{:.2}\n",
                    name,
                    window.index(),
                    window.archetype,
                    window.anomaly_type,
                    window.tm(),
                    motifs,
                    rank + 1,
                    contrib.feature,
                    window.features().get(contrib.feature),
                    window.z_scores().get(contrib.feature),
                    contrib.score,
                    contrib.percentage,
                ))?;
            }
        }
    }

    Ok(())
}
