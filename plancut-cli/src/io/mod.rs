use crate::EPOCH;
use anyhow::{Context, Result};
use log::{Level, LevelFilter, info, log};
use plancut::config::NestingConfig;
use plancut::io::ext_repr::ExtNestingJob;
use serde::Serialize;
use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

pub mod cli;
pub mod output;

pub fn read_job(path: &Path) -> Result<ExtNestingJob> {
    let file = File::open(path).context("could not open job file")?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context("incorrect job file format")
}

pub fn read_config(path: &Path) -> Result<NestingConfig> {
    let file = File::open(path).context("could not open config file")?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context("incorrect config file format")
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)?;
    info!(
        "[IO] solution written to file:///{}",
        fs::canonicalize(path)?.to_str().unwrap_or("<invalid path>")
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    log!(
        Level::Info,
        "[EPOCH]: {}",
        jiff::Timestamp::now().strftime("%Y-%m-%d %H:%M:%S")
    );
    Ok(())
}
