use anyhow::Context;
use clap::*;
use dnatopo::libs::policy::adaptive_analyze;
use dnatopo::libs::scan::{analyze, ScanOptions, ScanResult};
use dnatopo::libs::thermo::Conditions;
use dnatopo::SeqRecord;
use rayon::prelude::*;
use std::io::Write;

/// Window and ionic-condition arguments shared by the single-sequence commands
pub fn add_scan_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("threshold")
            .long("threshold")
            .short('t')
            .value_parser(value_parser!(f64))
            .num_args(1)
            .default_value("3.0")
            .help("Anomaly threshold in standard deviations"),
    )
    .arg(
        Arg::new("width")
            .long("width")
            .short('w')
            .value_parser(value_parser!(usize))
            .num_args(1)
            .default_value("15")
            .help("Window width"),
    )
    .arg(
        Arg::new("stride")
            .long("stride")
            .short('s')
            .value_parser(value_parser!(usize))
            .num_args(1)
            .default_value("5")
            .help("Step between window starts"),
    )
    .arg(
        Arg::new("salt")
            .long("salt")
            .value_parser(value_parser!(f64))
            .num_args(1)
            .default_value("0.1")
            .help("Monovalent salt (Na+), molar"),
    )
    .arg(
        Arg::new("mg")
            .long("mg")
            .value_parser(value_parser!(f64))
            .num_args(1)
            .default_value("0.0015")
            .help("Divalent cation (Mg2+), molar"),
    )
    .arg(
        Arg::new("adaptive")
            .long("adaptive")
            .action(ArgAction::SetTrue)
            .help("Retry at 2.5σ when nothing is anomalous"),
    )
}

pub fn add_parallel_arg(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("parallel")
            .long("parallel")
            .short('p')
            .value_parser(value_parser!(usize))
            .num_args(1)
            .default_value("1")
            .help("Number of threads for parallel processing"),
    )
}

pub fn add_outfile_arg(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("outfile")
            .long("outfile")
            .short('o')
            .num_args(1)
            .default_value("stdout")
            .help("Output filename. [stdout] for screen"),
    )
}

pub fn scan_options(args: &ArgMatches) -> ScanOptions {
    ScanOptions {
        threshold: *args.get_one::<f64>("threshold").unwrap(),
        width: *args.get_one::<usize>("width").unwrap(),
        stride: *args.get_one::<usize>("stride").unwrap(),
        conditions: Conditions {
            salt: *args.get_one::<f64>("salt").unwrap(),
            mg: *args.get_one::<f64>("mg").unwrap(),
        },
    }
}

/// Analyzes one record, with or without the adaptive retry.
pub fn scan_record(
    record: &SeqRecord,
    opts: &ScanOptions,
    adaptive: bool,
) -> anyhow::Result<ScanResult> {
    let result = if adaptive {
        adaptive_analyze(&record.seq, opts)
            .with_context(|| format!("failed to analyze {}", record.name))?
            .result
    } else {
        analyze(&record.seq, opts).with_context(|| format!("failed to analyze {}", record.name))?
    };

    if result.wildcards > 0 {
        log::warn!(
            "{}: {} characters outside ACGTM treated as N",
            record.name,
            result.wildcards
        );
    }
    log::info!(
        "{}: {} windows, {} anomalous at {}σ",
        record.name,
        result.windows.len(),
        result.anomalies().len(),
        result.threshold_used
    );

    Ok(result)
}

/// Reads every record of `infiles` and analyzes them, keeping input order.
pub fn scan_files(args: &ArgMatches) -> anyhow::Result<Vec<(String, ScanResult)>> {
    let opts = scan_options(args);
    let adaptive = args.get_flag("adaptive");

    let opt_parallel = *args.get_one::<usize>("parallel").unwrap();
    rayon::ThreadPoolBuilder::new()
        .num_threads(opt_parallel)
        .build_global()?;

    let mut records = vec![];
    for infile in args.get_many::<String>("infiles").unwrap() {
        records.extend(dnatopo::read_fasta(infile)?);
    }
    log::info!("{} records", records.len());

    records
        .par_iter()
        .map(|record| {
            scan_record(record, &opts, adaptive).map(|result| (record.name.clone(), result))
        })
        .collect()
}

/// First record of a FASTA file
pub fn first_record(infile: &str) -> anyhow::Result<SeqRecord> {
    dnatopo::read_fasta(infile)?
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("No sequence found in {}", infile))
}

/// Writes window deltas as TSV, closed by an `avg` line.
pub fn write_comparison(
    writer: &mut dyn Write,
    cmp: &dnatopo::libs::compare::ComparisonResult,
) -> anyhow::Result<()> {
    use dnatopo::libs::features::Feature;
    use itertools::Itertools;

    let mut field_names = vec!["index", "start", "end"];
    field_names.extend(Feature::ALL.iter().map(|f| f.name()));
    writer.write_all(format!("{}\n", field_names.join("\t")).as_ref())?;

    for delta in &cmp.deltas {
        writer.write_all(
            format!(
                "{}\t{}\t{}\t{}\n",
                delta.index,
                delta.start,
                delta.end,
                delta.diff.values().iter().map(|v| format!("{:.4}", v)).join("\t")
            )
            .as_ref(),
        )?;
    }
    writer.write_all(
        format!(
            "avg\t\t\t{}\n",
            cmp.avg_delta.values().iter().map(|v| format!("{:.4}", v)).join("\t")
        )
        .as_ref(),
    )?;

    Ok(())
}
