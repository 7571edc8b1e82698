//! Append-only report sink.
//!
//! The report is plain text: an account header, one titled section per
//! resource category, and a region divider between the global and regional
//! groups. The sink owns the output file for the whole run, is the only
//! writer, and buffers everything through a [`BufWriter`]; [`finish`]
//! flushes and syncs before releasing the file. If the run aborts before
//! `finish`, the `BufWriter` drop still flushes what was written on a
//! best-effort basis.
//!
//! [`finish`]: ReportSink::finish

use anyhow::{Context, Result};
use aws_config::SdkConfig;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::identity::{resolve_identity, CallerIdentity};

/// Resolves the caller identity, then opens the account report in `dir` and
/// writes its header. Identity comes first so a bad profile fails before any
/// file is created.
pub async fn open_account_report(
    config: &SdkConfig,
    dir: &Path,
) -> Result<(CallerIdentity, ReportSink)> {
    let identity = resolve_identity(config).await?;
    let path = dir.join(format!("aws_footprint_{}.txt", identity.account_id));
    let mut sink = ReportSink::create(path)?;
    sink.write_header(&identity.account_id)?;
    Ok((identity, sink))
}

pub struct ReportSink {
    out: BufWriter<File>,
    path: PathBuf,
}

impl ReportSink {
    /// Creates the report file, truncating any previous report at `path`.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = File::create(&path)
            .with_context(|| format!("failed to create report file {}", path.display()))?;
        Ok(Self {
            out: BufWriter::new(file),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the account header line that opens every report.
    pub fn write_header(&mut self, account_id: &str) -> Result<()> {
        writeln!(self.out, "AWS Account ID: {account_id}").context("failed to write report header")
    }

    /// Writes the divider that separates global sections from regional ones.
    pub fn write_region(&mut self, region: &str) -> Result<()> {
        writeln!(self.out, "\nRegion: {region}").context("failed to write region divider")
    }

    /// Writes one titled section. A category with zero items still gets its
    /// title line, so an empty section is distinguishable from a missing one.
    pub fn write_section(&mut self, title: &str, lines: &[String]) -> Result<()> {
        writeln!(self.out, "\n{title}:")
            .with_context(|| format!("failed to write section {title}"))?;
        for line in lines {
            writeln!(self.out, "- {line}")
                .with_context(|| format!("failed to write section {title}"))?;
        }
        Ok(())
    }

    /// Flushes and syncs the report to durable storage. Consuming `self`
    /// guarantees nothing can be appended after the flush.
    pub fn finish(mut self) -> Result<()> {
        self.out
            .flush()
            .with_context(|| format!("failed to flush report {}", self.path.display()))?;
        self.out
            .get_ref()
            .sync_all()
            .with_context(|| format!("failed to sync report {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn read(path: &Path) -> String {
        std::fs::read_to_string(path).expect("report file should exist")
    }

    #[test]
    fn report_layout_is_byte_exact() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("aws_footprint_123456789012.txt");

        let mut sink = ReportSink::create(&path).expect("create sink");
        sink.write_header("123456789012").expect("header");
        sink.write_section(
            "S3 Buckets",
            &["alpha".to_string(), "bravo".to_string()],
        )
        .expect("section");
        sink.write_region("us-east-1").expect("region");
        sink.write_section("EC2 Instances", &["Instance ID: i-0abc".to_string()])
            .expect("section");
        sink.finish().expect("finish");

        let expected = "AWS Account ID: 123456789012\n\
                        \n\
                        S3 Buckets:\n\
                        - alpha\n\
                        - bravo\n\
                        \n\
                        Region: us-east-1\n\
                        \n\
                        EC2 Instances:\n\
                        - Instance ID: i-0abc\n";
        assert_eq!(read(&path), expected);
    }

    #[test]
    fn empty_section_prints_title_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.txt");

        let mut sink = ReportSink::create(&path).expect("create sink");
        sink.write_header("000000000000").expect("header");
        sink.write_section("IAM Users", &[]).expect("section");
        sink.finish().expect("finish");

        assert_eq!(read(&path), "AWS Account ID: 000000000000\n\nIAM Users:\n");
    }

    #[test]
    fn create_truncates_previous_report() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "stale content from an earlier run").expect("seed file");

        let mut sink = ReportSink::create(&path).expect("create sink");
        sink.write_header("111122223333").expect("header");
        sink.finish().expect("finish");

        assert_eq!(read(&path), "AWS Account ID: 111122223333\n");
    }

    #[test]
    fn create_fails_for_unwritable_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("no-such-dir").join("report.txt");
        assert!(ReportSink::create(&path).is_err());
    }
}
