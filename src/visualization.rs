use crate::core::errors::AsadoError;
use crate::core::models::EventSummary;
use log::{debug, error};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::collections::BTreeMap;

// Generates Chart.js configuration for the summary page of an event
pub struct Visualization;

const BASE_COLORS: [(u8, u8, u8); 5] = [
    (75, 192, 192),  // Teal
    (255, 99, 132),  // Red
    (54, 162, 235),  // Blue
    (255, 206, 86),  // Yellow
    (153, 102, 255), // Purple
];

impl Visualization {
    /// Pie chart of how the event's spending splits across categories.
    pub fn category_pie_chart(summary: &EventSummary) -> Result<Value, AsadoError> {
        debug!(
            "Generating category chart for event {} with {} categories",
            summary.event.name,
            summary.totals_by_category.len()
        );
        let (labels, data) = Self::series(&summary.event.name, &summary.totals_by_category)?;
        let (background_colors, _) = Self::colors(labels.len());

        Ok(json!({
            "type": "pie",
            "data": {
                "labels": labels,
                "datasets": [{
                    "data": data,
                    "backgroundColor": background_colors,
                }]
            },
            "options": {
                "plugins": {
                    "title": {
                        "display": true,
                        "text": format!("Expenses by category: {}", summary.event.name)
                    }
                }
            }
        }))
    }

    /// Bar chart of how much each participant paid.
    pub fn participant_bar_chart(summary: &EventSummary) -> Result<Value, AsadoError> {
        debug!(
            "Generating participant chart for event {} with {} payers",
            summary.event.name,
            summary.totals_by_participant.len()
        );
        let (labels, data) = Self::series(&summary.event.name, &summary.totals_by_participant)?;
        let (background_colors, border_colors) = Self::colors(labels.len());

        Ok(json!({
            "type": "bar",
            "data": {
                "labels": labels,
                "datasets": [{
                    "label": "Paid",
                    "data": data,
                    "backgroundColor": background_colors,
                    "borderColor": border_colors,
                    "borderWidth": 1
                }]
            },
            "options": {
                "scales": {
                    "y": {
                        "beginAtZero": true,
                        "title": {
                            "display": true,
                            "text": "Amount"
                        }
                    },
                    "x": {
                        "title": {
                            "display": true,
                            "text": "Participant"
                        }
                    }
                },
                "plugins": {
                    "title": {
                        "display": true,
                        "text": format!("Paid by participant: {}", summary.event.name)
                    }
                }
            }
        }))
    }

    fn series(event: &str, totals: &BTreeMap<String, Decimal>) -> Result<(Vec<String>, Vec<Decimal>), AsadoError> {
        if totals.is_empty() {
            error!("No totals to chart for event {}", event);
            return Err(AsadoError::NoExpenses);
        }
        Ok(totals.iter().map(|(label, amount)| (label.clone(), *amount)).unzip())
    }

    // Cycles through the base palette so any number of slices gets a color
    fn colors(count: usize) -> (Vec<String>, Vec<String>) {
        (0..count)
            .map(|i| {
                let (r, g, b) = BASE_COLORS[i % BASE_COLORS.len()];
                (
                    format!("rgba({}, {}, {}, 0.6)", r, g, b),
                    format!("rgba({}, {}, {}, 1)", r, g, b),
                )
            })
            .unzip()
    }
}
