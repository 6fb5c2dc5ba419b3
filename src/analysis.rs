//! Max/min scan over the optional percentage fields.

use crate::{country::Country, types::Percent};

/// A record holding the extreme value of one metric.
#[derive(Debug, Clone, PartialEq)]
pub struct Extremum<'a> {
    pub country: &'a Country,
    pub value: Percent,
}

/// Percentage fields that can be analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    InternetUsers,
    AdultLiteracyRate,
}

impl Metric {
    pub fn value_of(self, country: &Country) -> Option<Percent> {
        match self {
            Metric::InternetUsers => country.internet_users,
            Metric::AdultLiteracyRate => country.adult_literacy_rate,
        }
    }
}

/// Highest and lowest value of one metric. Both are `None` when no record
/// carries a value.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRange<'a> {
    pub max: Option<Extremum<'a>>,
    pub min: Option<Extremum<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Analysis<'a> {
    pub internet_users: MetricRange<'a>,
    pub adult_literacy_rate: MetricRange<'a>,
}

pub fn analyze(countries: &[Country]) -> Analysis<'_> {
    Analysis {
        internet_users: metric_range(countries, Metric::InternetUsers),
        adult_literacy_rate: metric_range(countries, Metric::AdultLiteracyRate),
    }
}

/// Single pass over `countries`; on ties the first record in slice order wins.
pub fn metric_range(countries: &[Country], metric: Metric) -> MetricRange<'_> {
    let mut max: Option<Extremum<'_>> = None;
    let mut min: Option<Extremum<'_>> = None;

    for country in countries {
        let Some(value) = metric.value_of(country) else {
            continue;
        };
        if max.as_ref().is_none_or(|m| value > m.value) {
            max = Some(Extremum { country, value });
        }
        if min.as_ref().is_none_or(|m| value < m.value) {
            min = Some(Extremum { country, value });
        }
    }

    MetricRange { max, min }
}
