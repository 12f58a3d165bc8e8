use strum::{Display, EnumIter};

/// The stages a dashboard run moves through.
///
/// A run advances strictly in declaration order from `Start` to `Done`; any error moves it to `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum RunStage {
    #[strum(to_string = "Starting")]
    Start,

    #[strum(to_string = "Fetching metrics")]
    FetchingMetrics,

    #[strum(to_string = "Analyzing trends")]
    AnalyzingTrends,

    #[strum(to_string = "Rendering charts")]
    RenderingCharts,

    #[strum(to_string = "Composing report")]
    ComposingReport,

    #[strum(to_string = "Writing output")]
    WritingOutput,

    #[strum(to_string = "Done")]
    Done,

    #[strum(to_string = "Failed")]
    Failed,
}

impl RunStage {
    /// Number of stages that do work and report progress.
    pub const WORK_STAGES: usize = 5;

    /// The 1-based progress step of a working stage.
    #[must_use]
    pub const fn step(self) -> Option<usize> {
        match self {
            Self::FetchingMetrics => Some(1),
            Self::AnalyzingTrends => Some(2),
            Self::RenderingCharts => Some(3),
            Self::ComposingReport => Some(4),
            Self::WritingOutput => Some(5),
            Self::Start | Self::Done | Self::Failed => None,
        }
    }

    /// The stage that follows this one on the success path.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Start => Self::FetchingMetrics,
            Self::FetchingMetrics => Self::AnalyzingTrends,
            Self::AnalyzingTrends => Self::RenderingCharts,
            Self::RenderingCharts => Self::ComposingReport,
            Self::ComposingReport => Self::WritingOutput,
            Self::WritingOutput | Self::Done => Self::Done,
            Self::Failed => Self::Failed,
        }
    }
}
