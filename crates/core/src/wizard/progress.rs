//! Step and phase indicators. Pure presentation of wizard state.

use serde::{Deserialize, Serialize};

use super::steps::{MetadataStep, Phase, TOTAL_STEPS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorStatus {
    Completed,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepIndicatorItem {
    pub number: u8,
    pub label: &'static str,
    pub status: IndicatorStatus,
    /// Past steps and the immediate next step accept clicks; the next step
    /// still validates the current one when clicked.
    pub clickable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseIndicatorItem {
    pub number: u8,
    pub label: &'static str,
    pub status: IndicatorStatus,
}

fn status_of(number: u8, current: u8) -> IndicatorStatus {
    match number.cmp(&current) {
        std::cmp::Ordering::Less => IndicatorStatus::Completed,
        std::cmp::Ordering::Equal => IndicatorStatus::Current,
        std::cmp::Ordering::Greater => IndicatorStatus::Upcoming,
    }
}

pub fn step_indicator(current: MetadataStep) -> Vec<StepIndicatorItem> {
    let c = current.to_number();
    MetadataStep::ALL
        .into_iter()
        .map(|step| {
            let n = step.to_number();
            StepIndicatorItem {
                number: n,
                label: step.label(),
                status: status_of(n, c),
                clickable: n < c || n == c + 1,
            }
        })
        .collect()
}

pub fn phase_indicator(current: Phase) -> Vec<PhaseIndicatorItem> {
    let c = current.to_number();
    Phase::ALL
        .into_iter()
        .map(|phase| PhaseIndicatorItem {
            number: phase.to_number(),
            label: phase.label(),
            status: status_of(phase.to_number(), c),
        })
        .collect()
}

/// "Step 2 of 4".
pub fn step_label(current: MetadataStep) -> String {
    format!("Step {} of {TOTAL_STEPS}", current.to_number())
}

pub fn step_percent(current: MetadataStep) -> u8 {
    (u16::from(current.to_number()) * 100 / u16::from(TOTAL_STEPS)) as u8
}
