use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::Utc;

use formtrap::{classify, infrastructure::logging, load_config, Submission};

/// Reads a submission as a JSON object of field values on stdin, classifies
/// it against the current time, and prints the verdict as JSON. Exits with
/// status 1 when the submission is spam so shell pipelines can branch on it.
fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = load_config()?;
    logging::init_tracing(&config.logging)?;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read submission from stdin")?;
    let submission: Submission =
        serde_json::from_str(&input).context("submission must be a JSON object of strings")?;

    let verdict = classify(&submission, &config, Utc::now());
    println!("{}", serde_json::to_string_pretty(&verdict)?);

    if verdict.spam {
        std::process::exit(1);
    }
    Ok(())
}
