use crate::app::prompt::Prompter;
use crate::core::districts::ValidDistrictSet;
use crate::core::{FilterCriteria, Pipeline, RunLog, RunSummary};
use crate::utils::error::Result;
use std::io::{BufRead, Write};
use std::sync::Arc;

/// Drives one run: load, ask the operator, filter, write.
pub struct DeliveryEngine<P: Pipeline> {
    pipeline: P,
    log: Arc<dyn RunLog>,
}

impl<P: Pipeline> DeliveryEngine<P> {
    pub fn new(pipeline: P, log: Arc<dyn RunLog>) -> Self {
        Self { pipeline, log }
    }

    pub async fn run<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<RunSummary> {
        let orders = self.pipeline.extract().await?;
        let loaded = orders.len();
        let districts = ValidDistrictSet::from_orders(&orders);
        tracing::info!("{} orders across {} districts", loaded, districts.len());

        let district = prompter.prompt_district(&districts, self.log.as_ref())?;
        let start = prompter.prompt_start_time()?;
        let end = prompter.prompt_end_time()?;

        let criteria = FilterCriteria::new(district, start, end);
        if criteria.is_inverted() {
            tracing::warn!(
                "Start time {} is after end time {}, nothing can match",
                start,
                end
            );
        }

        self.log.log(&format!(
            "Run started. District: {}, from: {}, to: {}",
            criteria.district, criteria.start, criteria.end
        ));

        let outcome = self.pipeline.transform(orders, &criteria).await?;
        let output_path = self.pipeline.load(&outcome).await?;

        Ok(RunSummary {
            loaded,
            matched: outcome.matched.len(),
            windowed: outcome.windowed.len(),
            output_path,
        })
    }
}
