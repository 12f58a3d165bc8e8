mod activity_metrics;
mod classifier;
pub mod daily_aggregator;
mod series;
mod tally;
pub mod trend_analyzer;
mod trends;

pub use activity_metrics::ActivityMetrics;
pub use classifier::{Classifier, classification_text};
pub use series::Series;
pub use tally::Tally;
pub use trends::Trends;
