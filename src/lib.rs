pub mod display;
pub mod errors;
pub mod runner;
pub mod stats;
pub mod timer;

#[cfg(test)]
mod summary_cross_reference_tests {
    // Verify that the numbers `display::format_summary` renders are exactly
    // the ones `stats::summarize` computes, across several sample shapes.

    const SAMPLE_SETS: &[&[u128]] = &[
        &[100, 200, 300],
        &[500, 500, 500, 500],
        &[1, 2],
        &[1_200_000, 980_000, 1_150_000, 1_010_000, 1_330_000],
    ];

    #[test]
    fn summary_renders_computed_statistics() {
        for samples in SAMPLE_SETS {
            let stats = crate::stats::summarize(samples).unwrap();
            let out = crate::display::format_summary(samples, &stats);

            assert!(
                out.contains(&format!("Average Time: {} seconds", stats.mean_secs())),
                "mean missing from summary for {:?}: {}",
                samples,
                out
            );
            assert!(
                out.contains(&format!("Std. Dev: {} seconds", stats.std_dev_secs())),
                "stddev missing from summary for {:?}: {}",
                samples,
                out
            );
        }
    }
}
