//! Text rendering for the interactive console
//!
//! Turns the allocator's structured output into the lines shown to the
//! operator. Nothing here touches the slot table.

use crate::types::{CheckoutRecord, SlotStatus, SlotSummary};
use std::fmt::Write as _;

pub const MENU: &str = "\n=== ParkEase Menu ===\n\
                        1. Park Vehicle\n\
                        2. Remove Vehicle\n\
                        3. Display Slots\n\
                        4. Exit\n";

/// Render the slot listing
///
/// ```text
/// Parking Slot Status:
/// Slot 1: 4-Wheeler - KA 01 B 1234
/// Slot 2: Empty
/// ```
pub fn render_slots(slots: &[SlotSummary]) -> String {
    let mut out = String::from("Parking Slot Status:\n");
    for slot in slots {
        // writing to a String cannot fail
        let _ = match &slot.status {
            SlotStatus::Empty => writeln!(out, "Slot {}: Empty", slot.number),
            SlotStatus::Occupied {
                category,
                identifier,
            } => writeln!(out, "Slot {}: {} - {}", slot.number, category, identifier),
        };
    }
    out
}

/// Render the detailed receipt shown after a checkout
pub fn render_receipt(record: &CheckoutRecord) -> String {
    format!(
        "\n========== ParkEase Receipt ==========\n\
         Slot Number : {}\n\
         Vehicle Type: {}\n\
         Vehicle No. : {}\n\
         Hours Parked: {}\n\
         Rate per Hr : Rs. {}\n\
         Total Charge: Rs. {}\n\
         ======================================\n",
        record.slot_number,
        record.category,
        record.identifier,
        record.hours_parked,
        record.rate,
        record.charge,
    )
}
