//! Terminal text for workflow listings, details and statistics
//!
//! The `format_*` functions return plain text; the `render_*` functions
//! return colored blocks ready to be written to the terminal.

use colored::Colorize;

use crate::installer::InstallReport;
use crate::query::WorkflowStatistics;
use crate::types::WorkflowRecord;

const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';
const RULE_WIDTH: usize = 50;

pub fn format_price(price: u32) -> String {
    if price == 0 {
        "FREE".to_string()
    } else {
        format!("${}", price)
    }
}

/// Five glyphs: one filled star per whole rating point, the rest empty.
pub fn format_stars(rating: f64) -> String {
    let filled = rating.floor().clamp(0.0, 5.0) as usize;
    let mut stars = String::with_capacity(5 * FILLED_STAR.len_utf8());
    stars.extend(std::iter::repeat(FILLED_STAR).take(filled));
    stars.extend(std::iter::repeat(EMPTY_STAR).take(5 - filled));
    stars
}

/// Thousands grouping with commas, e.g. `5678` -> `5,678`
pub fn format_installs(installs: u64) -> String {
    let digits = installs.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Display label used in workflow pickers, e.g. `Deploy Master ($49)`
pub fn selection_label(workflow: &WorkflowRecord) -> String {
    let price = if workflow.is_free() {
        "Free".to_string()
    } else {
        format!("${}", workflow.price)
    };
    format!("{} ({})", workflow.title, price)
}

pub fn render_banner() -> String {
    let banner = r#"
  ╔═══════════════════════════════════════════╗
  ║     ⚡ AgentFlow CLI v1.0.0                ║
  ║     Workflow Marketplace in your Terminal ║
  ╚═══════════════════════════════════════════╝
  "#;
    format!("{}\n", banner.cyan())
}

fn colored_price(price: u32) -> String {
    let label = format_price(price);
    if price == 0 {
        label.green().to_string()
    } else {
        label.yellow().to_string()
    }
}

/// Numbered list view (1-based) of the given workflows
pub fn render_list(workflows: &[&WorkflowRecord]) -> String {
    let mut out = format!("{}\n\n", "\n📦 Available Workflows:".white().bold());

    for (index, wf) in workflows.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} {} {}\n",
            index + 1,
            wf.title.bold(),
            "|".dimmed(),
            colored_price(wf.price)
        ));
        out.push_str(&format!("{}\n", format!("   {}", wf.description).dimmed()));
        out.push_str(&format!(
            "   {} {} | {} installs\n",
            format_stars(wf.rating).yellow(),
            wf.rating.to_string().dimmed(),
            format_installs(wf.installs).cyan()
        ));
        out.push_str(&format!(
            "{}\n\n",
            format!("   Category: {}", wf.category).blue()
        ));
    }

    out
}

pub fn render_no_results() -> String {
    format!(
        "{}\n",
        "\n⚠️  No workflows found matching your search.\n".yellow()
    )
}

/// Detail view of a single workflow
pub fn render_details(wf: &WorkflowRecord) -> String {
    let rule = "─".repeat(RULE_WIDTH);
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format!("\n📋 {}", wf.title).white().bold()));
    out.push_str(&format!("{}\n", rule.dimmed()));
    out.push_str(&format!("{}\n", wf.description.white()));
    out.push_str(&format!("{}\n", rule.dimmed()));
    out.push_str(&format!(
        "{}\n",
        format!("   ★ Rating: {}/5", wf.rating).yellow()
    ));
    out.push_str(&format!(
        "{}\n",
        format!("   📥 Installs: {}", format_installs(wf.installs)).cyan()
    ));
    out.push_str(&format!(
        "{}\n",
        format!("   📁 Category: {}", wf.category).blue()
    ));
    out.push_str(&format!(
        "{}\n",
        format!("   🏷️  Tags: {}", wf.tags.join(", ")).white()
    ));
    out.push_str(&format!(
        "{}\n\n",
        format!("   💰 Price: {}", format_price(wf.price)).green()
    ));
    out
}

pub fn render_statistics(stats: &WorkflowStatistics) -> String {
    let mut out = format!("{}\n\n", "\n📊 AgentFlow Statistics:".white().bold());
    out.push_str(&format!(
        "   {} {}\n",
        "📦 Total Workflows:".cyan(),
        stats.count.to_string().white()
    ));
    out.push_str(&format!(
        "   {} {}\n",
        "📥 Total Installs:".cyan(),
        format_installs(stats.total_installs).white()
    ));
    out.push_str(&format!(
        "   {} {}\n",
        "⭐ Average Rating:".cyan(),
        format!("{:.1}", stats.average_rating).white()
    ));
    out.push_str(&format!(
        "   {} {}\n\n",
        "🎁 Free Workflows:".cyan(),
        stats.free_count.to_string().green()
    ));
    out
}

pub fn render_installing() -> String {
    format!("{}\n", "\n⏳ Installing workflow...\n".cyan())
}

pub fn render_install_success(report: &InstallReport) -> String {
    let mut out = format!(
        "{}\n",
        format!("✅ Successfully installed \"{}\"!", report.title).green()
    );
    out.push_str(&format!(
        "{}\n",
        format!("   Files copied to: {}", report.target_dir).dimmed()
    ));
    out.push_str(&format!(
        "{}\n",
        format!("   Run: {}\n", report.run_command).dimmed()
    ));
    out
}

pub fn render_farewell() -> String {
    format!("{}\n", "\n👋 Thanks for using AgentFlow CLI!\n".dimmed())
}

pub fn render_error(message: &str) -> String {
    format!("{} {}", "\n❌ Error:".red(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    fn workflow(price: u32, rating: f64) -> WorkflowRecord {
        WorkflowRecord {
            id: "7".to_string(),
            title: "Release Notes".to_string(),
            description: "Drafts release notes from merged PRs".to_string(),
            price,
            rating,
            installs: 1234567,
            category: "Documentation".to_string(),
            tags: vec!["Docs".to_string(), "Release".to_string()],
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "FREE");
        assert_eq!(format_price(29), "$29");
    }

    #[test]
    fn test_format_stars() {
        assert_eq!(format_stars(4.8), "★★★★☆");
        assert_eq!(format_stars(0.0), "☆☆☆☆☆");
        assert_eq!(format_stars(5.0), "★★★★★");
        assert_eq!(format_stars(4.8).chars().count(), 5);
    }

    #[test]
    fn test_format_installs_grouping() {
        assert_eq!(format_installs(0), "0");
        assert_eq!(format_installs(543), "543");
        assert_eq!(format_installs(2341), "2,341");
        assert_eq!(format_installs(10429), "10,429");
        assert_eq!(format_installs(1234567), "1,234,567");
    }

    #[test]
    fn test_selection_label() {
        assert_eq!(selection_label(&workflow(0, 4.0)), "Release Notes (Free)");
        assert_eq!(selection_label(&workflow(15, 4.0)), "Release Notes ($15)");
    }

    #[test]
    fn test_render_list_numbers_entries() {
        plain();
        let a = workflow(0, 4.5);
        let mut b = workflow(49, 3.0);
        b.title = "Second".to_string();
        let out = render_list(&[&a, &b]);
        assert!(out.contains("📦 Available Workflows:"));
        assert!(out.contains("1. Release Notes | FREE"));
        assert!(out.contains("2. Second | $49"));
        assert!(out.contains("★★★★☆ 4.5 | 1,234,567 installs"));
        assert!(out.contains("★★★☆☆ 3 | 1,234,567 installs"));
        assert!(out.contains("   Category: Documentation"));
    }

    #[test]
    fn test_render_details() {
        plain();
        let out = render_details(&workflow(0, 4.9));
        assert!(out.contains("📋 Release Notes"));
        assert!(out.contains("★ Rating: 4.9/5"));
        assert!(out.contains("📥 Installs: 1,234,567"));
        assert!(out.contains("🏷️  Tags: Docs, Release"));
        assert!(out.contains("💰 Price: FREE"));
        assert!(out.contains(&"─".repeat(50)));
    }

    #[test]
    fn test_render_statistics() {
        plain();
        let out = render_statistics(&WorkflowStatistics {
            count: 6,
            total_installs: 10429,
            average_rating: 4.7,
            free_count: 1,
        });
        assert!(out.contains("📦 Total Workflows: 6"));
        assert!(out.contains("📥 Total Installs: 10,429"));
        assert!(out.contains("⭐ Average Rating: 4.7"));
        assert!(out.contains("🎁 Free Workflows: 1"));
    }

    #[test]
    fn test_render_statistics_empty_average() {
        plain();
        let out = render_statistics(&WorkflowStatistics {
            count: 0,
            total_installs: 0,
            average_rating: 0.0,
            free_count: 0,
        });
        assert!(out.contains("⭐ Average Rating: 0.0"));
    }
}
