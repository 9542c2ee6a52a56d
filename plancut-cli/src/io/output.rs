use plancut::config::NestingConfig;
use plancut::io::ext_repr::{ExtNestingJob, ExtNestingReport};
use serde::{Deserialize, Serialize};

/// Contents of a solution file: the job as read, the configuration used and the resulting report.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct JobOutput {
    pub job: ExtNestingJob,
    pub report: ExtNestingReport,
    pub config: NestingConfig,
}
