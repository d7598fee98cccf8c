//! The scripted demonstration.
//!
//! Acquires the singleton twice, mutates the counter through the first
//! handle, reads it through the second, then resets it and counts up.
//! Every value shown is also recorded in the returned [`Transcript`].

use std::io::Write;

use singleton_core::{ensure, ensure_post, Result, SingletonHolder};

/// Banner printed between the identity check and the counting loop.
pub const BANNER: &str = "================= counter exercise =================";

/// Parameters of the demonstration. Not configurable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    /// Number of print-then-increment steps in the counting loop.
    pub iterations: u64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self { iterations: 10 }
    }
}

/// Counter values observed while running a [`Scenario`], in print order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transcript {
    /// Value right after the first accessor call.
    pub after_first_access: u64,
    /// Value after one increment through the first handle.
    pub after_increment: u64,
    /// Value read through the second handle.
    pub via_second_handle: u64,
    /// Values printed before each increment of the loop.
    pub loop_values: Vec<u64>,
    /// Value after the loop.
    pub final_value: u64,
}

impl Transcript {
    /// All printed values, flattened in output order.
    pub fn values(&self) -> Vec<u64> {
        let mut all = vec![
            self.after_first_access,
            self.after_increment,
            self.via_second_handle,
        ];
        all.extend_from_slice(&self.loop_values);
        all.push(self.final_value);
        all
    }
}

/// Run the demonstration, writing its lines to `out`.
pub fn run<W: Write>(out: &mut W, scenario: &Scenario) -> Result<Transcript> {
    let mut transcript = Transcript::default();

    let handle_1 = SingletonHolder::get_instance();
    transcript.after_first_access = handle_1.counter();
    writeln!(out, "handle_1.counter = {}", transcript.after_first_access)?;

    handle_1.increase_value();
    transcript.after_increment = handle_1.counter();
    writeln!(out, "handle_1.counter = {}", transcript.after_increment)?;

    let handle_2 = SingletonHolder::get_instance();
    transcript.via_second_handle = handle_2.counter();
    writeln!(out, "handle_2.counter = {}", transcript.via_second_handle)?;
    log::debug!(
        "handles alias the same instance: {}",
        std::ptr::eq(handle_1, handle_2)
    );

    handle_1.reset();
    ensure!(
        handle_2.counter() == 0,
        "counter should read 0 after reset, got {}",
        handle_2.counter()
    );

    writeln!(out, "{BANNER}")?;

    for _ in 0..scenario.iterations {
        let value = handle_1.counter();
        writeln!(out, "handle_1.counter = {value}")?;
        transcript.loop_values.push(value);
        handle_1.increase_value();
    }

    transcript.final_value = handle_1.counter();
    writeln!(out, "handle_1.counter = {}", transcript.final_value)?;

    ensure_post!(
        transcript.final_value == scenario.iterations,
        "expected final counter {}, got {}",
        scenario.iterations,
        transcript.final_value
    );
    Ok(transcript)
}
