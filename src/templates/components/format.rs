/// Optional number for display; missing values show as a dash.
pub fn fmt_opt(v: Option<f64>) -> String {
    v.map(|v| v.to_string()).unwrap_or_else(|| "—".to_string())
}
