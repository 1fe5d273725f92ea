//! Console rendering of demurrage charges.

use std::io::{self, Write};

use colored::Colorize;
use rust_decimal::Decimal;

use crate::models::DemurrageCharge;

/// Decimal places shown for money amounts.
pub const DISPLAY_DECIMALS: u32 = 3;

fn money(value: Decimal) -> String {
    format!("{:.3}", value.round_dp(DISPLAY_DECIMALS))
}

/// Writes a labeled, human-readable summary of a charge.
///
/// # Example
///
/// ```
/// use demurrage_engine::calculation::calculate_demurrage;
/// use demurrage_engine::cli::render_charge;
/// use demurrage_engine::config::Tariff;
/// use demurrage_engine::models::{ContainerSize, ContainerType};
///
/// let charge = calculate_demurrage(ContainerType::Empty, ContainerSize::Twenty, 15, Tariff::standard());
/// let mut out = Vec::new();
/// render_charge(&mut out, &charge).unwrap();
/// assert!(String::from_utf8_lossy(&out).contains("7.500"));
/// ```
pub fn render_charge<W: Write>(out: &mut W, charge: &DemurrageCharge) -> io::Result<()> {
    writeln!(
        out,
        "{} {} {}ft, {} days ({} free)",
        "Container:".bold(),
        charge.container_type,
        charge.container_size,
        charge.days,
        charge.free_days
    )?;

    if charge.is_free() {
        writeln!(
            out,
            "{}",
            "No demurrage charges: the stay is within the free period.".green()
        )?;
        return Ok(());
    }

    writeln!(out, "{}", "Breakdown:".bold())?;
    for line in &charge.breakdown {
        writeln!(
            out,
            "  {} (days {}-{}): {} days x {} = {}",
            line.period_name.cyan(),
            line.from_day,
            line.to_day,
            line.days,
            line.rate.normalize(),
            money(line.charge)
        )?;
    }
    writeln!(
        out,
        "{} {}",
        "Total charge:".bold(),
        money(charge.total_charge).yellow().bold()
    )?;
    Ok(())
}
