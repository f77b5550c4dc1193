use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::TempDir;

#[test]
fn command_invalid() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("dnatopo")?;
    cmd.arg("foobar");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("recognized"));

    Ok(())
}

#[test]
fn command_scan() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("dnatopo")?;
    let output = cmd.arg("scan").arg("tests/dna/promoter.fa").output()?;
    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();

    // (53 - 15) / 5 + 1
    assert_eq!(lines.len(), 9);
    assert!(lines[0].starts_with("Index,Start,End,Sequence,GC,"));
    assert!(lines[0].ends_with("Tm_Celsius,M_Distance,Archetype,AnomalyType"));
    assert!(lines[1].starts_with("0,0,15,TTGACAGCTAGCTCA,"));
    assert!(lines[1].ends_with(",Putative Promoter,None"));
    assert!(lines[5].ends_with(",Z-DNA Candidate,None"));
    assert!(lines[8].starts_with("7,35,50,"));
    assert!(lines[8].ends_with(",G-Quadruplex,None"));

    Ok(())
}

#[test]
fn command_scan_multi() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("dnatopo")?;
    let output = cmd
        .arg("scan")
        .arg("tests/dna/multi.fa")
        .arg("-p")
        .arg("2")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    // one header, 8 + 13 rows in input order
    assert_eq!(stdout.lines().count(), 22);
    assert_eq!(stdout.matches("Index,").count(), 1);
    assert!(stdout.lines().nth(8).unwrap().starts_with("7,35,50,"));
    assert!(stdout.lines().nth(9).unwrap().starts_with("0,0,15,GATCGGCTAGCTTTT"));
    assert!(stdout.contains("1,5,20,GCTAGCTTTTTGCAT,"));
    assert!(stdout.contains(",Mechanical Anchor,None"));

    Ok(())
}

#[test]
fn command_scan_anomalies() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("dnatopo")?;
    let output = cmd.arg("scan").arg("tests/dna/outlier.fa").output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout.lines().count(), 59);
    assert_eq!(stdout.matches(",Unknown Anomaly,Thermal Dip").count(), 3);
    assert!(stdout.contains("29,145,160,AACGTGGGGGAACGT,"));

    Ok(())
}

#[test]
fn command_scan_window_options() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let outfile = temp.path().join("out.csv");

    let mut cmd = Command::cargo_bin("dnatopo")?;
    cmd.arg("scan")
        .arg("tests/dna/promoter.fa")
        .arg("-w")
        .arg("20")
        .arg("-s")
        .arg("11")
        .arg("-o")
        .arg(&outfile);
    cmd.assert().success().stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&outfile)?;
    // (53 - 20) / 11 + 1
    assert_eq!(content.lines().count(), 5);
    assert!(content.contains("\n3,33,53,"));

    Ok(())
}

#[test]
fn command_scan_gz_and_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let gz = temp.path().join("promoter.fa.gz");
    let fasta = std::fs::read("tests/dna/promoter.fa")?;
    {
        let file = std::fs::File::create(&gz)?;
        let mut encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
        encoder.write_all(&fasta)?;
        encoder.finish()?;
    }

    let mut cmd = Command::cargo_bin("dnatopo")?;
    let plain = cmd.arg("scan").arg("tests/dna/promoter.fa").output()?;

    let mut cmd = Command::cargo_bin("dnatopo")?;
    let from_gz = cmd.arg("scan").arg(&gz).output()?;
    assert_eq!(plain.stdout, from_gz.stdout);

    let mut cmd = Command::cargo_bin("dnatopo")?;
    let from_stdin = cmd.arg("scan").arg("stdin").write_stdin(fasta).output()?;
    assert_eq!(plain.stdout, from_stdin.stdout);

    Ok(())
}

#[test]
fn command_scan_too_short() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("dnatopo")?;
    cmd.arg("scan")
        .arg("stdin")
        .write_stdin(">short\nACGTACGT\n");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to analyze short"))
        .stderr(predicate::str::contains("too short"));

    Ok(())
}

#[test]
fn command_scan_zero_stride() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("dnatopo")?;
    cmd.arg("scan")
        .arg("tests/dna/promoter.fa")
        .arg("-s")
        .arg("0");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid parameter"));

    Ok(())
}

#[test]
fn command_scan_wildcards() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("dnatopo")?;
    cmd.arg("scan")
        .arg("stdin")
        .write_stdin(">dirty\nacgtxxACGTACGTACGTACGT\n");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("dirty: 2 characters outside ACGTM"))
        .stdout(predicate::str::contains("0,0,15,ACGTNNACGTACGTA,"));

    Ok(())
}

#[test]
fn command_scan_verbose() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("dnatopo")?;
    cmd.arg("scan").arg("tests/dna/outlier.fa").arg("-v");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("outlier: 58 windows, 3 anomalous"));

    Ok(())
}
