//! Savings estimate shown on the ROI page.

use crate::config::{
    COST_PER_EMPLOYEE_PER_YEAR, DEFAULT_AVG_SALARY, HOURS_PER_WORK_DAY, MINUTES_SAVED_PER_DAY,
    WORK_DAYS_PER_YEAR,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoiEstimate {
    pub annual_savings: f64,
    pub annual_cost: f64,
    pub net_savings: f64,
    /// Whole percent. `None` when there is no cost to relate the savings to.
    pub roi_percent: Option<f64>,
}

/// Reads the leading integer of a form value the way browsers' `parseInt`
/// does: surrounding junk after the digits is ignored, no digits means none.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Saturates on overflow
    let value = digits[..end].bytes().fold(0i64, |acc, digit| {
        acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
    });
    Some(if negative { -value } else { value })
}

pub fn employees_from_input(raw: &str) -> f64 {
    parse_leading_int(raw).unwrap_or(0) as f64
}

/// Blank, unparsable or zero salaries fall back to the default.
pub fn salary_from_input(raw: &str) -> f64 {
    parse_leading_int(raw)
        .filter(|salary| *salary != 0)
        .map(|salary| salary as f64)
        .unwrap_or(DEFAULT_AVG_SALARY)
}

pub fn estimate(employees: f64, avg_salary: f64) -> RoiEstimate {
    let hourly_rate = avg_salary / (WORK_DAYS_PER_YEAR * HOURS_PER_WORK_DAY);
    let hours_saved_per_year = (MINUTES_SAVED_PER_DAY / 60.0) * WORK_DAYS_PER_YEAR * employees;
    let annual_savings = hours_saved_per_year * hourly_rate;

    let annual_cost = employees * COST_PER_EMPLOYEE_PER_YEAR;
    let net_savings = annual_savings - annual_cost;
    let roi_percent = (annual_cost != 0.0).then(|| (net_savings / annual_cost * 100.0).round());

    RoiEstimate {
        annual_savings,
        annual_cost,
        net_savings,
        roi_percent,
    }
}

/// Whole dollars with thousands separators, e.g. `$1,234` or `-$300`.
pub fn format_money(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{}", rounded.abs() as u64);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}${}", sign, grouped)
}

pub fn format_percent(roi: Option<f64>) -> String {
    match roi {
        Some(value) => format!("{}%", value),
        None => "—".to_string(),
    }
}
