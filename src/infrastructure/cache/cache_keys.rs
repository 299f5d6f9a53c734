pub fn event_summary_key(event: &str) -> String {
    format!("event_summary:{}", event)
}
