use clap::*;
use dnatopo::libs::compare::compare;
use dnatopo::libs::policy::point_mutation;
use dnatopo::SeqRecord;

use super::args;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    let cmd = Command::new("mutate")
        .about("Feature deltas caused by a single point mutation")
        .after_help(
            r###"
Substitutes one base of the first record and compares the mutant against
the original, window by window. Output is the same as `dnatopo compare`.

* --pos is 0-based, like the Start column of `dnatopo scan`.
* Without --base, the first of A, C, G, T that differs from the original
  base is used.
* --base accepts A, C, G, T or M.

Examples:
1. Methylate position 12:
   dnatopo mutate tests/dna/promoter.fa --pos 12 --base M

2. Any substitution at position 30:
   dnatopo mutate tests/dna/promoter.fa --pos 30

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .index(1)
                .help("Input FASTA file"),
        )
        .arg(
            Arg::new("pos")
                .long("pos")
                .required(true)
                .value_parser(value_parser!(usize))
                .num_args(1)
                .help("0-based position to mutate"),
        )
        .arg(
            Arg::new("base")
                .long("base")
                .num_args(1)
                .help("Replacement base"),
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
    let opt_pos = *args.get_one::<usize>("pos").unwrap();
    let opt_base = match args.get_one::<String>("base") {
        Some(s) if s.len() == 1 => Some(s.as_bytes()[0]),
        Some(s) => anyhow::bail!("--base expects a single base, got {}", s),
        None => None,
    };

    let original = args::first_record(args.get_one::<String>("infile").unwrap())?;

    //----------------------------
    // Operating
    //----------------------------
    let mutant = SeqRecord {
        name: format!("{}:{}", original.name, opt_pos),
        seq: point_mutation(&original.seq, opt_pos, opt_base)?,
    };
    log::info!(
        "{}: {} -> {}",
        mutant.name,
        original.seq[opt_pos].to_ascii_uppercase() as char,
        mutant.seq[opt_pos] as char
    );

    let res_a = args::scan_record(&original, &opts, adaptive)?;
    let opts_b = dnatopo::libs::scan::ScanOptions {
        threshold: res_a.threshold_used,
        ..opts
    };
    let res_b = args::scan_record(&mutant, &opts_b, false)?;
    let cmp = compare(&res_a, &res_b)?;

    //----------------------------
    // Output
    //----------------------------
    args::write_comparison(&mut writer, &cmp)?;

    Ok(())
}
