//! Analysis Report
//!
//! Everything a client needs to render one submission.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::Instrument;
use uuid::Uuid;

use crate::advice::{Advice, AdviceRequester};
use crate::analysis::{analyze, expense_breakdown, AdvisoryMessage, ExpenseShare, FinancialSummary};
use crate::model::FinancialRecord;

/// The network-free part of a report
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    pub summary: FinancialSummary,
    pub breakdown: Vec<ExpenseShare>,
    pub messages: Vec<AdvisoryMessage>,
}

impl Insights {
    pub fn from_record(record: &FinancialRecord) -> Self {
        Self {
            summary: FinancialSummary::from_record(record),
            breakdown: expense_breakdown(record),
            messages: analyze(record),
        }
    }
}

/// Insights plus the LLM tip for one submission
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub submission_id: Uuid,
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub insights: Insights,
    pub advice: Advice,
}

impl AnalysisReport {
    /// Run the rules, then ask for advice
    ///
    /// Rule output is computed before the provider call, so a provider
    /// failure only ever affects `advice`.
    pub async fn build(requester: &AdviceRequester, record: &FinancialRecord) -> Self {
        let submission_id = Uuid::new_v4();
        let span = tracing::info_span!("analysis", submission = %submission_id);

        async move {
            let insights = Insights::from_record(record);
            tracing::info!(
                messages = insights.messages.len(),
                net_cash_flow = %insights.summary.net_cash_flow,
                "rules evaluated"
            );

            let advice = requester.request_advice(record).await;
            if advice.is_fallback() {
                tracing::warn!("using fallback tip");
            }

            Self {
                submission_id,
                generated_at: Utc::now(),
                insights,
                advice,
            }
        }
        .instrument(span)
        .await
    }
}
