use crate::core::errors::AsadoError;
use crate::core::models::Expense;
use chrono::{DateTime, Utc};

const HEADER: [&str; 6] = ["id", "participant", "category", "amount", "description", "timestamp"];

/// Renders expenses as CSV, one row per expense in the given order.
pub fn expenses_to_csv(expenses: &[Expense]) -> Result<String, AsadoError> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    writer
        .write_record(HEADER)
        .map_err(|e| AsadoError::ExportError(e.to_string()))?;

    for expense in expenses {
        writer
            .write_record([
                expense.id.as_str(),
                expense.participant.as_str(),
                expense.category.as_str(),
                &expense.amount.to_string(),
                expense.description.as_str(),
                &expense.timestamp.to_rfc3339(),
            ])
            .map_err(|e| AsadoError::ExportError(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AsadoError::ExportError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AsadoError::ExportError(e.to_string()))
}

/// Download name for an event's export. Characters that would end or escape
/// a quoted `filename="..."` header parameter become underscores.
pub fn export_file_name(event: &str, at: DateTime<Utc>) -> String {
    let event: String = event
        .chars()
        .map(|c| if c == '"' || c == '\\' || c.is_control() { '_' } else { c })
        .collect();
    format!("asado_{}_{}.csv", event, at.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn writes_header_and_rows() {
        let mut expense = Expense::new("asado", "Ana", "Carne", dec!(1500.50), "vacío, 2kg");
        expense.id = "e1".to_string();
        expense.timestamp = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

        let csv = expenses_to_csv(&[expense]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "id,participant,category,amount,description,timestamp");
        assert_eq!(lines[1], "e1,Ana,Carne,1500.50,\"vacío, 2kg\",2024-06-01T12:00:00+00:00");
    }

    #[test]
    fn file_name_carries_event_and_time() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 9, 5, 3).unwrap();
        assert_eq!(export_file_name("domingo", at), "asado_domingo_20240601_090503.csv");
    }

    #[test]
    fn file_name_cannot_break_out_of_quotes() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 9, 5, 3).unwrap();
        assert_eq!(
            export_file_name("el \"quincho\" \\ año", at),
            "asado_el _quincho_ _ año_20240601_090503.csv"
        );
    }
}
