//! Diagnostic report rendering.
//!
//! A report is a pure consumer of the lead, the input set and the
//! calculator output; it computes nothing new except the revenue gap line.
//! All number formatting happens here, so the HTML template stays purely
//! structural. Callers render reports only for complete leads.

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use serde_json::json;
use tera::Tera;

use crate::formatters::{format_brl, format_count, format_pct, UNDEFINED_FIGURE};
use crate::lead::Lead;
use crate::metrics::CalculationResult;
use crate::session::InputSet;

/// Heading shared by every output format.
pub const REPORT_TITLE: &str = "Minimum Revenue Diagnostic";

/// Embedded report template
const DIAGNOSTIC_HTML: &str = include_str!("../templates/report/diagnostic.html");

/// One labelled figure in a report section.
#[derive(Debug, Clone, Serialize)]
struct Line {
    label: &'static str,
    value: String,
}

/// Everything a report needs, assembled by the caller.
pub struct Report<'a> {
    pub lead: &'a Lead,
    pub inputs: &'a InputSet,
    pub result: &'a CalculationResult,
}

impl Report<'_> {
    /// Plain-text report for the terminal or a `.txt` file.
    pub fn render_text(&self) -> String {
        let mut output = vec![
            REPORT_TITLE.to_string(),
            "=".repeat(REPORT_TITLE.len()),
            String::new(),
            section_heading("Client"),
        ];

        output.push(text_line("Name", &self.lead.name));
        output.push(text_line("E-mail", &self.lead.email));
        output.push(text_line("Company", &self.lead.company));
        if !self.lead.whatsapp.is_empty() {
            output.push(text_line("WhatsApp", &self.lead.whatsapp));
        }
        output.push(text_line("Date", &self.generated_at()));

        output.push(String::new());
        output.push(section_heading("Inputs"));
        for line in self.input_lines() {
            output.push(text_line(line.label, &line.value));
        }

        output.push(String::new());
        output.push(section_heading("Results"));
        for line in self.result_lines() {
            output.push(text_line(line.label, &line.value));
        }

        output.push(String::new());
        output.push(section_heading("Gap Analysis"));
        output.push(self.gap_line());

        if let Some(warning) = &self.result.warning {
            output.push(String::new());
            output.push(section_heading("Warning"));
            output.push(warning.clone());
        }

        output.join("\n")
    }

    /// Markdown report with one table per section.
    pub fn render_markdown(&self) -> String {
        let mut output = vec![
            format!("# {}", REPORT_TITLE),
            String::new(),
            format!("Generated: {}", self.generated_at()),
            String::new(),
            "## Client".to_string(),
            String::new(),
            "| Field | Value |".to_string(),
            "|-------|-------|".to_string(),
        ];

        output.push(format!("| Name | {} |", self.lead.name));
        output.push(format!("| E-mail | {} |", self.lead.email));
        output.push(format!("| Company | {} |", self.lead.company));
        if !self.lead.whatsapp.is_empty() {
            output.push(format!("| WhatsApp | {} |", self.lead.whatsapp));
        }

        output.push(String::new());
        output.push("## Inputs".to_string());
        output.push(String::new());
        output.push("| Figure | Value |".to_string());
        output.push("|--------|-------|".to_string());
        for line in self.input_lines() {
            output.push(format!("| {} | {} |", line.label, line.value));
        }

        output.push(String::new());
        output.push("## Results".to_string());
        output.push(String::new());
        output.push("| Figure | Value |".to_string());
        output.push("|--------|-------|".to_string());
        for line in self.result_lines() {
            output.push(format!("| {} | {} |", line.label, line.value));
        }

        output.push(String::new());
        output.push("## Gap Analysis".to_string());
        output.push(String::new());
        output.push(self.gap_line());

        if let Some(warning) = &self.result.warning {
            output.push(String::new());
            output.push(format!("> {}", warning));
        }

        output.push(String::new());
        output.join("\n")
    }

    /// JSON document with raw values and display strings side by side.
    /// Figures without a finite value carry `null` instead of infinity.
    pub fn render_json(&self) -> Result<String> {
        let doc = json!({
            "title": REPORT_TITLE,
            "generated_at": self.generated_at(),
            "client": self.client_json(),
            "inputs": {
                "fixed_costs": self.inputs.fixed_costs,
                "variable_cost_pct": self.inputs.variable_cost_pct,
                "target_profit_pct": self.inputs.target_profit_pct,
                "average_ticket": self.inputs.average_ticket,
                "current_revenue": self.inputs.current_revenue,
            },
            "results": {
                "minimum_revenue": money_json(self.result.minimum_revenue),
                "break_even_revenue": money_json(self.result.break_even_revenue),
                "required_sales_count": count_json(self.result.required_sales_count),
            },
            "gap": self.gap_json(),
            "warning": &self.result.warning,
        });

        serde_json::to_string_pretty(&doc).context("Failed to serialize report")
    }

    /// Self-contained HTML page rendered through the embedded template.
    pub fn render_html(&self) -> Result<String> {
        let mut tera = Tera::default();
        tera.add_raw_template("diagnostic.html", DIAGNOSTIC_HTML)
            .context("Failed to load report template")?;

        let mut context = tera::Context::new();
        context.insert("title", REPORT_TITLE);
        context.insert("generated_at", &self.generated_at());
        context.insert("client", &self.client_json());
        context.insert("inputs", &self.input_lines());
        context.insert("results", &self.result_lines());
        context.insert("gap", &self.gap_line());
        context.insert("warning", &self.result.warning);

        tera.render("diagnostic.html", &context)
            .context("Failed to render report template")
    }

    fn generated_at(&self) -> String {
        Local::now().format("%d/%m/%Y %H:%M").to_string()
    }

    fn client_json(&self) -> serde_json::Value {
        json!({
            "name": &self.lead.name,
            "email": &self.lead.email,
            "company": &self.lead.company,
            "whatsapp": &self.lead.whatsapp,
        })
    }

    fn input_lines(&self) -> Vec<Line> {
        vec![
            Line {
                label: "Fixed costs",
                value: format_brl(self.inputs.fixed_costs),
            },
            Line {
                label: "Variable costs",
                value: format_pct(self.inputs.variable_cost_pct),
            },
            Line {
                label: "Target profit",
                value: format_pct(self.inputs.target_profit_pct),
            },
            Line {
                label: "Average ticket",
                value: format_brl(self.inputs.average_ticket),
            },
            Line {
                label: "Current revenue",
                value: format_brl(self.inputs.current_revenue),
            },
        ]
    }

    fn result_lines(&self) -> Vec<Line> {
        let sales = if self.result.required_sales_count.is_finite() {
            format!("{} sales/month", format_count(self.result.required_sales_count))
        } else {
            UNDEFINED_FIGURE.to_string()
        };

        vec![
            Line {
                label: "Minimum revenue",
                value: format_brl(self.result.minimum_revenue),
            },
            Line {
                label: "Break-even point",
                value: format_brl(self.result.break_even_revenue),
            },
            Line {
                label: "Required sales",
                value: sales,
            },
        ]
    }

    /// The gap keeps its sign: a negative value means current revenue
    /// already exceeds the minimum.
    fn gap_line(&self) -> String {
        if !self.result.is_solvable() {
            return "No solution for the given percentages.".to_string();
        }

        let gap = self.result.minimum_revenue - self.inputs.current_revenue;
        format!("Gap vs current revenue: {}", format_brl(gap))
    }

    fn gap_json(&self) -> serde_json::Value {
        if !self.result.is_solvable() {
            return serde_json::Value::Null;
        }

        let gap = self.result.minimum_revenue - self.inputs.current_revenue;
        json!({ "value": gap, "display": format_brl(gap) })
    }
}

fn section_heading(title: &str) -> String {
    format!("{}\n{}", title, "─".repeat(title.chars().count()))
}

fn text_line(label: &str, value: &str) -> String {
    format!("{:<16} {}", format!("{}:", label), value)
}

fn money_json(value: f64) -> serde_json::Value {
    json!({
        "value": finite_or_null(value),
        "display": format_brl(value),
    })
}

fn count_json(value: f64) -> serde_json::Value {
    json!({
        "value": finite_or_null(value),
        "display": format_count(value),
    })
}

fn finite_or_null(value: f64) -> serde_json::Value {
    if value.is_finite() {
        json!(value)
    } else {
        serde_json::Value::Null
    }
}
