use std::path::PathBuf;

use howlong::Result;

/// Directory the GUI writes its rolling log files into.
fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("howlong")
        .join("logs")
}

pub fn run() -> Result<()> {
    let dir = log_dir();

    // The GUI appender rolls daily, naming files howlong.log.YYYY-MM-DD.
    // The date suffix sorts lexicographically, so the last name is the
    // newest log.
    if dir.exists() {
        let mut names: Vec<String> = std::fs::read_dir(&dir)
            .ok()
            .into_iter()
            .flatten()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with("howlong.log"))
            .collect();
        names.sort();

        if let Some(latest) = names.last() {
            println!("{}", dir.join(latest).display());
            return Ok(());
        }
    }

    // No log file yet, print where one would be written
    println!("{}", dir.join("howlong.log").display());
    Ok(())
}
