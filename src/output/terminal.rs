//! Terminal output: labelled table, badges and binary view.

use super::format::group_digits;
use super::labels::{error_message, label, Label};
use crate::config::Lang;
use crate::error::ParseError;
use crate::processing::SubnetReport;
use colored::Colorize;

/// Width of the label column in the table.
const LABEL_WIDTH: usize = 16;

fn pad_label(text: &str) -> String {
    // char count, labels carry accents
    let pad = LABEL_WIDTH.saturating_sub(text.chars().count());
    format!("{text}{}", " ".repeat(pad))
}

/// Badge line: private/public, class and loopback.
pub fn render_badges(report: &SubnetReport, lang: Lang) -> String {
    let mut badges = Vec::new();
    if report.is_private {
        badges.push(format!("[{}]", label(lang, Label::Private)).green().to_string());
    } else {
        badges.push(format!("[{}]", label(lang, Label::Public)).dimmed().to_string());
    }
    badges.push(format!("[{} {}]", label(lang, Label::Class), report.class));
    if report.is_loopback {
        badges.push(format!("[{}]", label(lang, Label::Loopback)).yellow().to_string());
    }
    badges.join(" ")
}

/// The (label, value) rows of the result table, in display order.
pub fn table_rows(report: &SubnetReport, lang: Lang) -> Vec<(&'static str, String)> {
    vec![
        (label(lang, Label::Address), report.address.to_string()),
        (
            label(lang, Label::Mask),
            format!("{} (/{})", report.mask, report.prefix),
        ),
        (label(lang, Label::Network), report.network.to_string()),
        (label(lang, Label::Broadcast), report.broadcast.to_string()),
        (label(lang, Label::FirstHost), report.first_host.to_string()),
        (label(lang, Label::LastHost), report.last_host.to_string()),
        (
            label(lang, Label::UsableHosts),
            group_digits(report.usable_hosts, lang),
        ),
        (
            label(lang, Label::TotalAddresses),
            group_digits(report.total_addresses, lang),
        ),
    ]
}

/// Full terminal rendering of one report.
pub fn render_report(input: &str, report: &SubnetReport, lang: Lang) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", input.trim().bold()));
    out.push_str(&format!("{}\n", render_badges(report, lang)));

    for (name, value) in table_rows(report, lang) {
        out.push_str(&format!("  {}{value}\n", pad_label(name)));
    }

    out.push_str(&format!("{}\n", label(lang, Label::Binary).cyan()));
    let binary_rows = [
        ("IP", &report.address_binary),
        (label(lang, Label::Mask), &report.mask_binary),
        (label(lang, Label::Network), &report.network_binary),
    ];
    for (name, bits) in binary_rows {
        out.push_str(&format!("  {}{bits}\n", pad_label(name)));
    }
    out
}

/// Inline error message for input that failed to parse.
pub fn render_error(input: &str, err: &ParseError, lang: Lang) -> String {
    format!(
        "{}\n  {}: {}\n",
        input.trim().bold(),
        label(lang, Label::Error).red(),
        error_message(err, lang)
    )
}
