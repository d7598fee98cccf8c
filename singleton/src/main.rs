use std::io::{self, Write};

use singleton::{run, Scenario};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&mut out, &Scenario::default()).and_then(|t| {
        out.flush()?;
        Ok(t)
    }) {
        Ok(transcript) => log::info!("demonstration finished: {:?}", transcript.values()),
        Err(err) => log::error!("demonstration aborted: {err}"),
    }
}
