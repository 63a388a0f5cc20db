use crate::balance::BalanceReading;

/// Diagnostic line for every address processed, alert or not
pub fn log_reading(reading: &BalanceReading) {
    println!(
        "{}, {}: {:.4}",
        reading.tag, reading.address, reading.balance
    );
}
