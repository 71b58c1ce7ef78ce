use crate::core::models::sequence::SequenceRecord;
use crate::core::scales::HydropathyScale;
use crate::engine::config::ProfileConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::smoothing::{half_window, smooth_values};
use crate::engine::spans::{HighlightSpan, drawable_spans};
use crate::engine::weights::WeightKernel;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedSeries {
    pub kernel: WeightKernel,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HydropathyProfile {
    pub record_id: String,
    pub sequence_len: usize,
    pub scale: HydropathyScale,
    pub window: usize,
    pub raw_values: Vec<f64>,
    pub series: Vec<SmoothedSeries>,
    pub highlights: Vec<HighlightSpan>,
}

impl HydropathyProfile {
    /// Residues trimmed from each end of every smoothed series.
    pub fn half_window(&self) -> usize {
        half_window(self.window)
    }

    /// 1-based residue numbers of the window centres, one per smoothed value.
    ///
    /// Value `i` sits at `half + i + 1`, one residue right of its 0-based
    /// offset `half + i`, so curves line up with highlight spans given in
    /// residue numbers.
    pub fn positions(&self) -> Vec<usize> {
        let smoothed_len = self.series.first().map_or(0, |s| s.values.len());
        let first = self.half_window() + 1;
        (first..first + smoothed_len).collect()
    }

    pub fn series_for(&self, kernel: WeightKernel) -> Option<&SmoothedSeries> {
        self.series.iter().find(|s| s.kernel == kernel)
    }
}

#[instrument(skip_all, name = "profile_workflow")]
pub fn run(
    record: &SequenceRecord,
    config: &ProfileConfig,
    reporter: &ProgressReporter,
) -> Result<HydropathyProfile, EngineError> {
    // === Phase 1: Projection ===
    reporter.report(Progress::PhaseStart { name: "Projection" });
    info!(
        "Projecting {} residues of '{}' onto the {} scale.",
        record.len(),
        record.record_id(),
        config.scale
    );
    let raw_values = config.scale.project(record.sequence())?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Smoothing ===
    reporter.report(Progress::PhaseStart { name: "Smoothing" });
    if raw_values.len() < config.window {
        warn!(
            "Sequence length {} is shorter than the window size {}; smoothed curves will be empty.",
            raw_values.len(),
            config.window
        );
    }

    let mut series = Vec::with_capacity(WeightKernel::ALL.len());
    for kernel in WeightKernel::ALL {
        let weights = kernel
            .weights(config.window)
            .map_err(|source| EngineError::Weights { kernel, source })?;
        debug!("{} weights: {:?}", kernel, weights);
        let values = smooth_values(&raw_values, &weights)
            .map_err(|source| EngineError::Smoothing { kernel, source })?;
        reporter.report(Progress::Message(format!(
            "{}: {} smoothed values",
            kernel,
            values.len()
        )));
        series.push(SmoothedSeries { kernel, values });
    }
    reporter.report(Progress::PhaseFinish);

    let highlights = drawable_spans(config.highlights.iter().copied());
    info!(
        "Profile complete: {} kernels, {} highlight span(s).",
        series.len(),
        highlights.len()
    );

    Ok(HydropathyProfile {
        record_id: record.record_id().to_string(),
        sequence_len: record.len(),
        scale: config.scale,
        window: config.window,
        raw_values,
        series,
        highlights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scales::ScaleError;
    use crate::engine::config::ProfileConfigBuilder;
    use std::sync::Mutex;

    fn config(window: usize, scale: HydropathyScale) -> ProfileConfig {
        ProfileConfigBuilder::new()
            .window(window)
            .scale(scale)
            .dpi(80)
            .highlights(vec![
                HighlightSpan::new(2, 8),
                HighlightSpan::new(5, 3),
                HighlightSpan::new(0, 10),
            ])
            .build()
            .unwrap()
    }

    fn record(sequence: &str) -> SequenceRecord {
        SequenceRecord::new("sp|P02945|BACR_HALSA Bacteriorhodopsin", sequence)
    }

    #[test]
    fn profile_contains_all_three_kernels_with_trimmed_lengths() {
        let record = record("MLELLPTAVEGVSQAQITGRPEWIWLALGTALMGLGTLYFLVKGMGVSDPDAKKFYAITTLVPAIAFTMYLSMLLGYGLTMVPFGGEQNPIYWARYADWLFTTPLLLLDLALLVDADQGTILALVGADGIMIGTGLVGALTKVYSYRFVWWAISTAAMLYILYVLFFGFTSKAESMRPEVASTFKVLRNVTVVLWSAYPVVWLIGSEGAGIVPLNIETLLFMVLDVSAKVGFGLILLRSRAIFGEAEAPEPSAGDGAAATSD");
        let profile = run(&record, &config(19, HydropathyScale::KyteDoolittle), &ProgressReporter::new()).unwrap();

        assert_eq!(profile.record_id, "sp|P02945|BACR_HALSA");
        assert_eq!(profile.raw_values.len(), record.len());
        assert_eq!(profile.series.len(), 3);
        for series in &profile.series {
            assert_eq!(series.values.len(), record.len() - 18);
        }
        assert_eq!(
            profile.series.iter().map(|s| s.kernel).collect::<Vec<_>>(),
            WeightKernel::ALL.to_vec()
        );
    }

    #[test]
    fn positions_are_offset_by_half_window() {
        let profile = run(&record("ACDEFGHIKLMNPQRSTVWY"), &config(5, HydropathyScale::HoppWoods), &ProgressReporter::new()).unwrap();
        let positions = profile.positions();
        assert_eq!(positions.len(), 16);
        assert_eq!(positions.first(), Some(&3));
        assert_eq!(positions.last(), Some(&18));
    }

    #[test]
    fn first_position_is_the_one_based_centre_of_the_first_window() {
        let profile = run(&record(&"A".repeat(25)), &config(19, HydropathyScale::KyteDoolittle), &ProgressReporter::new()).unwrap();
        assert_eq!(profile.positions(), (10..=16).collect::<Vec<_>>());
    }

    #[test]
    fn average_series_matches_manual_mean() {
        let profile = run(&record("IIIIIRRRRR"), &config(5, HydropathyScale::KyteDoolittle), &ProgressReporter::new()).unwrap();
        let average = profile.series_for(WeightKernel::Average).unwrap();
        assert!((average.values[0] - 4.5).abs() < 1e-12);
        assert!((average.values[1] - (4.0 * 4.5 - 4.5) / 5.0).abs() < 1e-12);
        assert!((average.values[5] + 4.5).abs() < 1e-12);
    }

    #[test]
    fn savitzky_golay_preserves_constant_signal() {
        let profile = run(&record(&"L".repeat(30)), &config(11, HydropathyScale::KyteDoolittle), &ProgressReporter::new()).unwrap();
        let sg = profile.series_for(WeightKernel::SavitzkyGolay).unwrap();
        assert!(sg.values.iter().all(|v| (v - 3.8).abs() < 1e-9));
    }

    #[test]
    fn only_drawable_highlights_are_kept() {
        let profile = run(&record("ACDEFGHIKLMNPQRSTVWY"), &config(5, HydropathyScale::HoppWoods), &ProgressReporter::new()).unwrap();
        assert_eq!(profile.highlights, vec![HighlightSpan::new(2, 8)]);
    }

    #[test]
    fn unknown_residue_aborts_with_projection_error() {
        let result = run(&record("ACDXEF"), &config(5, HydropathyScale::HoppWoods), &ProgressReporter::new());
        match result {
            Err(EngineError::Projection {
                source: ScaleError::UnknownResidue { position, symbol, .. },
            }) => {
                assert_eq!(position, 4);
                assert_eq!(symbol, 'X');
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn sequence_shorter_than_window_yields_empty_series() {
        let profile = run(&record("ACD"), &config(5, HydropathyScale::HoppWoods), &ProgressReporter::new()).unwrap();
        assert!(profile.series.iter().all(|s| s.values.is_empty()));
        assert!(profile.positions().is_empty());
    }

    #[test]
    fn workflow_reports_both_phases() {
        let phases = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::PhaseStart { name } = event {
                phases.lock().unwrap().push(name);
            }
        }));
        run(&record("ACDEFGHIKL"), &config(5, HydropathyScale::KyteDoolittle), &reporter).unwrap();
        drop(reporter);
        assert_eq!(phases.into_inner().unwrap(), vec!["Projection", "Smoothing"]);
    }
}
