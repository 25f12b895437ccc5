use std::time::Duration;

use owo_colors::{OwoColorize, Stream, Style};

use crate::stats::{NANOS_PER_SEC, SummaryStats};

// Style constants
fn style_index() -> Style {
    Style::new().cyan().bold()
}

/// Per-iteration progress line, printed before the run starts.
pub fn format_execution(index: usize) -> String {
    let idx = index
        .to_string()
        .if_supports_color(Stream::Stdout, |s| s.style(style_index()))
        .to_string();
    format!("Execution {}", idx)
}

/// Per-iteration elapsed line, printed after the run exits.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_nanos() as f64 / NANOS_PER_SEC;
    let value = format!("{}s", secs)
        .if_supports_color(Stream::Stdout, |s| s.yellow())
        .to_string();
    format!("Elapsed Time: {}", value)
}

/// Final three-line report: raw nanosecond samples, mean, standard deviation.
pub fn format_summary(samples: &[u128], stats: &SummaryStats) -> String {
    let mut out = String::new();

    out.push_str(&format!("Samples: {:?}\n", samples));

    let mean = stats
        .mean_secs()
        .to_string()
        .if_supports_color(Stream::Stdout, |s| s.yellow())
        .to_string();
    out.push_str(&format!("Average Time: {} seconds\n", mean));

    let std_dev = stats
        .std_dev_secs()
        .to_string()
        .if_supports_color(Stream::Stdout, |s| s.yellow())
        .to_string();
    out.push_str(&format!("Std. Dev: {} seconds\n", std_dev));

    out
}
