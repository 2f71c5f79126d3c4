use s3t_core::domain::Table;
use s3t_core::usecases::ProvisionResult;

/// Output format selector
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

/// Trait for formatting CLI output
pub trait OutputFormatter {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
    fn info(&self, message: &str);
    fn print_json(&self, value: &serde_json::Value);
}

/// Human-readable output formatter with checkmarks and indentation
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn success(&self, message: &str) {
        println!("\u{2713} {}", message);
    }
    fn error(&self, message: &str) {
        eprintln!("\u{2717} Error: {}", message);
    }
    fn info(&self, message: &str) {
        println!("  {}", message);
    }
    fn print_json(&self, _value: &serde_json::Value) {
        // Human formatter doesn't print JSON
    }
}

/// JSON output formatter
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn success(&self, message: &str) {
        println!(
            "{}",
            serde_json::json!({"success": true, "message": message})
        );
    }
    fn error(&self, message: &str) {
        eprintln!(
            "{}",
            serde_json::json!({"success": false, "error": message})
        );
    }
    fn info(&self, _message: &str) {}
    fn print_json(&self, value: &serde_json::Value) {
        println!(
            "{}",
            serde_json::to_string_pretty(value).unwrap_or_default()
        );
    }
}

pub fn get_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    if format.is_json() {
        Box::new(JsonFormatter)
    } else {
        Box::new(HumanFormatter)
    }
}

/// Summary lines printed after `create`
///
/// Created and existing counts come from the `*_created` flags only.
pub fn provision_summary_lines(result: &ProvisionResult) -> Vec<String> {
    let mut lines = vec![
        "=== S3 Tables Resource Creation Summary ===".to_string(),
        String::new(),
    ];
    lines.extend(result.messages.iter().map(|m| format!("\u{2022} {m}")));
    lines.push(String::new());

    let created = result.created_count();
    let existing = result.existing_count();
    if created > 0 {
        lines.push(format!("Created: {created} resource(s)"));
    }
    if existing > 0 {
        lines.push(format!("Already existed: {existing} resource(s)"));
    }

    lines.push(String::new());
    lines.push(format!("Table Bucket ARN: {}", result.table_bucket_arn));
    lines.push(format!("Table ARN: {}", result.table_arn));
    lines
}

/// Detail lines for a single table
pub fn table_detail_lines(table: &Table) -> Vec<String> {
    vec![
        format!("Name:      {}", table.name),
        format!("Namespace: {}", table.namespace),
        format!("ARN:       {}", table.arn),
        format!("Type:      {}", table.kind),
        format!(
            "Created:   {}",
            table.created_at.format("%Y-%m-%d %H:%M:%S")
        ),
    ]
}

pub fn print_table_details(format: OutputFormat, table: &Table) -> anyhow::Result<()> {
    let formatter = get_formatter(format);
    if format.is_json() {
        formatter.print_json(&serde_json::to_value(table)?);
        return Ok(());
    }

    formatter.success("Table Details:");
    formatter.info("");
    for line in table_detail_lines(table) {
        formatter.info(&line);
    }
    Ok(())
}
