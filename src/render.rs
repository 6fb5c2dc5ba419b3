//! Console text for tables, analysis results, and the menu.

use std::io::{self, Write};

use crate::{
    analysis::{Analysis, Extremum},
    country::Country,
    menu::Menu,
    types::Percent,
};

/// Marker printed for an absent percentage.
pub const NOT_AVAILABLE: &str = "--";

/// Two decimal places, or [`NOT_AVAILABLE`] when absent.
pub fn format_percent(value: Option<Percent>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn write_country_table(out: &mut impl Write, countries: &[Country]) -> io::Result<()> {
    writeln!(
        out,
        "------------------------------View Country Data Here------------------------------"
    )?;
    writeln!(
        out,
        "{:<10} {:<30} {:<25} {:<20}",
        "Code", "Name", "Internet Users", "Literacy Rate"
    )?;
    for country in countries {
        writeln!(
            out,
            "{:<10} {:<30} {:<25} {:<20}",
            country.code.as_str(),
            country.name,
            format_percent(country.internet_users),
            format_percent(country.adult_literacy_rate)
        )?;
    }
    Ok(())
}

pub fn write_analysis(out: &mut impl Write, analysis: &Analysis<'_>) -> io::Result<()> {
    writeln!(out, "---------------Country Analysis---------------")?;
    write_extremum(
        out,
        "highest percentage of internet users",
        "internet users",
        analysis.internet_users.max.as_ref(),
    )?;
    write_extremum(
        out,
        "lowest percentage of internet users",
        "internet users",
        analysis.internet_users.min.as_ref(),
    )?;
    write_extremum(
        out,
        "highest adult literacy",
        "adult literacy",
        analysis.adult_literacy_rate.max.as_ref(),
    )?;
    write_extremum(
        out,
        "lowest adult literacy",
        "adult literacy",
        analysis.adult_literacy_rate.min.as_ref(),
    )
}

fn write_extremum(
    out: &mut impl Write,
    description: &str,
    metric: &str,
    extremum: Option<&Extremum<'_>>,
) -> io::Result<()> {
    match extremum {
        Some(e) => writeln!(
            out,
            "Country with the {description} is {} with {:.2}.",
            e.country.name, e.value
        ),
        None => writeln!(
            out,
            "Country with the {description}: no data available for {metric}."
        ),
    }
}

pub fn write_menu(out: &mut impl Write, menu: &Menu) -> io::Result<()> {
    writeln!(out, "Menu:")?;
    for entry in menu.entries() {
        writeln!(out, "{} --> {}", entry.label, entry.description)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_percent_renders_marker() {
        assert_eq!(format_percent(None), "--");
    }

    #[test]
    fn percent_renders_two_decimals() {
        assert_eq!(format_percent(Some(54.321)), "54.32");
        assert_eq!(format_percent(Some(87.0)), "87.00");
        assert_eq!(format_percent(Some(6.5)), "6.50");
        assert_eq!(format_percent(Some(99.996)), "100.00");
    }
}
