//! Interactive menu loop
//!
//! The session owns the slot allocator and drives it from line-based input:
//! it prompts, validates what the operator typed, calls into the core and
//! prints the outcome. Every failure except terminal I/O is reported with an
//! `[ERROR]` line and control returns to the menu.
//!
//! Input and output are generic so the whole loop can be exercised with
//! in-memory buffers.

use crate::cli::identifier::normalize_identifier;
use crate::cli::presenter::{render_receipt, render_slots, MENU};
use crate::core::{CheckoutSink, SlotAllocator, VehicleRegistry};
use crate::types::{Hours, ParkingError, SlotNumber, Wheels};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Top-level menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Park,
    Remove,
    Display,
    Exit,
}

impl MenuChoice {
    /// Parse the operator's menu selection (`1` to `4`)
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Park),
            "2" => Some(MenuChoice::Remove),
            "3" => Some(MenuChoice::Display),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// One interactive session against a single lot
pub struct Session<R, W, S> {
    allocator: SlotAllocator,
    sink: S,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write, S: CheckoutSink> Session<R, W, S> {
    pub fn new(allocator: SlotAllocator, sink: S, input: R, output: W) -> Self {
        Session {
            allocator,
            sink,
            input,
            output,
        }
    }

    pub fn allocator(&self) -> &SlotAllocator {
        &self.allocator
    }

    /// End the session, handing back the lot state
    pub fn into_allocator(self) -> SlotAllocator {
        self.allocator
    }

    /// Run the menu loop until the operator exits or input ends
    ///
    /// # Errors
    ///
    /// Only terminal I/O failures end the loop with an error; everything
    /// else is printed and the menu is shown again.
    pub fn run(&mut self) -> Result<(), ParkingError> {
        info!(capacity = self.allocator.capacity(), "session started");

        loop {
            write!(self.output, "{}", MENU)?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                debug!("input closed, ending session");
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Park) => self.park()?,
                Some(MenuChoice::Remove) => self.remove()?,
                Some(MenuChoice::Display) => self.display()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting system.")?;
                    info!(
                        occupied = self.allocator.occupied_count(),
                        "session ended"
                    );
                    return Ok(());
                }
                None => writeln!(self.output, "[ERROR] Invalid option. Try again.")?,
            }
        }
    }

    fn park(&mut self) -> Result<(), ParkingError> {
        let Some(raw) =
            self.prompt("Enter vehicle number (e.g. 1223, KA 01 B 1234, KA 02 BA 1332): ")?
        else {
            return Ok(());
        };
        let identifier = match normalize_identifier(&raw) {
            Ok(identifier) => identifier,
            Err(e) => return self.report(&e),
        };

        let Some(wheels) =
            self.prompt_number::<Wheels>("Enter number of wheels (2 or 4): ", "number of wheels")?
        else {
            return Ok(());
        };

        let parked = VehicleRegistry::create_vehicle(identifier, wheels)
            .and_then(|vehicle| self.allocator.park(vehicle));

        match parked {
            Ok(slot) => {
                writeln!(self.output, "[SUCCESS] Parked at slot {}", slot)?;
                Ok(())
            }
            Err(e) => self.report(&e),
        }
    }

    fn remove(&mut self) -> Result<(), ParkingError> {
        let Some(slot) =
            self.prompt_number::<SlotNumber>("Enter slot number to remove: ", "slot number")?
        else {
            return Ok(());
        };
        let Some(hours) =
            self.prompt_number::<u32>("Enter number of hours parked: ", "hours parked")?
        else {
            return Ok(());
        };

        let record = match self.allocator.remove(slot, Hours::from(hours)) {
            Ok(record) => record,
            Err(e) => return self.report(&e),
        };

        writeln!(self.output, "Charge: Rs. {}", record.charge)?;

        let wants_receipt = self
            .prompt("Do you want to view the detailed receipt? (yes/no): ")?
            .is_some_and(|answer| answer.eq_ignore_ascii_case("yes"));
        if wants_receipt {
            write!(self.output, "{}", render_receipt(&record))?;
        }

        // The slot stays free even if the log write fails
        if let Err(e) = self.sink.append(&record) {
            warn!(slot, error = %e, "checkout record not persisted");
            self.report(&e)?;
        }

        Ok(())
    }

    fn display(&mut self) -> Result<(), ParkingError> {
        let listing = render_slots(&self.allocator.describe_slots());
        writeln!(self.output, "{}", listing)?;
        Ok(())
    }

    /// Print a prompt and read one trimmed line; `None` once input is exhausted
    fn prompt(&mut self, text: &str) -> Result<Option<String>, ParkingError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt for a number; prints an error and yields `None` on bad input
    fn prompt_number<T: FromStr>(
        &mut self,
        text: &str,
        field: &str,
    ) -> Result<Option<T>, ParkingError> {
        let Some(raw) = self.prompt(text)? else {
            return Ok(None);
        };
        match raw.parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                self.report(&ParkingError::invalid_number(field, &raw))?;
                Ok(None)
            }
        }
    }

    fn report(&mut self, error: &ParkingError) -> Result<(), ParkingError> {
        writeln!(self.output, "[ERROR] {}", error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CheckoutRecord, SlotStatus, VehicleCategory};
    use rstest::rstest;
    use std::path::Path;

    struct FailingSink;

    impl CheckoutSink for FailingSink {
        fn append(&mut self, _record: &CheckoutRecord) -> Result<(), ParkingError> {
            Err(ParkingError::persistence_write_failed(
                Path::new("history.csv"),
                "Permission denied",
            ))
        }
    }

    fn run_script(script: &str) -> (String, Vec<CheckoutRecord>, SlotAllocator) {
        let mut output = Vec::new();
        let mut history = Vec::new();
        let allocator = {
            let mut session = Session::new(
                SlotAllocator::new(),
                &mut history,
                script.as_bytes(),
                &mut output,
            );
            session.run().unwrap();
            session.into_allocator()
        };
        (String::from_utf8(output).unwrap(), history, allocator)
    }

    #[rstest]
    #[case::park("1", Some(MenuChoice::Park))]
    #[case::remove(" 2 ", Some(MenuChoice::Remove))]
    #[case::display("3", Some(MenuChoice::Display))]
    #[case::exit("4", Some(MenuChoice::Exit))]
    #[case::zero("0", None)]
    #[case::word("park", None)]
    #[case::empty("", None)]
    fn test_menu_choice_parse(#[case] input: &str, #[case] expected: Option<MenuChoice>) {
        assert_eq!(MenuChoice::parse(input), expected);
    }

    #[test]
    fn test_exit_immediately() {
        let (output, history, allocator) = run_script("4\n");

        assert!(output.contains("=== ParkEase Menu ==="));
        assert!(output.ends_with("Exiting system.\n"));
        assert!(history.is_empty());
        assert_eq!(allocator.occupied_count(), 0);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (output, _, _) = run_script("");
        assert!(output.ends_with("Choose an option: "));
    }

    #[test]
    fn test_park_normalizes_identifier() {
        let (output, _, allocator) = run_script("1\nka 01 b 1234\n4\n4\n");

        assert!(output.contains("[SUCCESS] Parked at slot 1\n"));
        assert_eq!(
            allocator.describe_slots()[0].status,
            SlotStatus::Occupied {
                category: VehicleCategory::FourWheeler,
                identifier: "KA 01 B 1234".to_string()
            }
        );
    }

    #[test]
    fn test_park_three_vehicles_reports_ascending_slots() {
        let (output, _, allocator) = run_script("1\n101\n2\n1\n102\n4\n1\n103\n2\n4\n");

        assert!(output.contains("[SUCCESS] Parked at slot 1\n"));
        assert!(output.contains("[SUCCESS] Parked at slot 2\n"));
        assert!(output.contains("[SUCCESS] Parked at slot 3\n"));
        assert_eq!(allocator.occupied_count(), 3);
    }

    #[test]
    fn test_park_invalid_identifier_skips_wheel_prompt() {
        let (output, _, allocator) = run_script("1\nAB 1\n4\n");

        assert!(output.contains("[ERROR] Invalid vehicle number format: 'AB 1'\n"));
        assert!(!output.contains("Enter number of wheels"));
        assert!(output.ends_with("Exiting system.\n"));
        assert_eq!(allocator.occupied_count(), 0);
    }

    #[rstest]
    #[case::three_wheels("3", "[ERROR] Only 2 or 4 wheelers allowed (got 3)\n")]
    #[case::negative_wheels("-2", "[ERROR] Only 2 or 4 wheelers allowed (got -2)\n")]
    #[case::not_a_number("four", "[ERROR] Invalid number of wheels: 'four'\n")]
    fn test_park_bad_wheels(#[case] wheels: &str, #[case] expected: &str) {
        let (output, _, allocator) = run_script(&format!("1\n1234\n{}\n4\n", wheels));

        assert!(output.contains(expected), "output was:\n{}", output);
        assert_eq!(allocator.occupied_count(), 0);
    }

    #[test]
    fn test_park_into_full_lot() {
        let mut script = String::new();
        for id in 1001..=1006 {
            script.push_str(&format!("1\n{}\n2\n", id));
        }
        script.push_str("4\n");

        let (output, _, allocator) = run_script(&script);

        assert!(output.contains("[SUCCESS] Parked at slot 5\n"));
        assert!(output.contains("[ERROR] Parking lot full (5 of 5 slots occupied)\n"));
        assert_eq!(allocator.occupied_count(), 5);
    }

    #[test]
    fn test_remove_prints_charge_and_persists() {
        let (output, history, allocator) = run_script("1\n1234\n2\n2\n1\n3\nno\n4\n");

        assert!(output.contains("Charge: Rs. 15\n"));
        assert!(!output.contains("ParkEase Receipt"));
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].identifier, "1234");
        assert_eq!(history[0].charge, 15);
        assert_eq!(allocator.occupied_count(), 0);
    }

    #[test]
    fn test_remove_with_receipt() {
        let (output, history, _) = run_script("1\nKA 02 BA 1332\n4\n2\n1\n3\nYES\n4\n");

        assert!(output.contains("Charge: Rs. 30\n"));
        assert!(output.contains("========== ParkEase Receipt ==========\n"));
        assert!(output.contains("Rate per Hr : Rs. 10\n"));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_remove_persists_when_input_ends_at_receipt_prompt() {
        let (_, history, allocator) = run_script("1\n1234\n4\n2\n1\n2\n");

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].charge, 20);
        assert_eq!(allocator.occupied_count(), 0);
    }

    #[rstest]
    #[case::empty_slot("2\n3\n1\n4\n", "[ERROR] Slot 3 is empty\n")]
    #[case::slot_zero("2\n0\n1\n4\n", "[ERROR] Invalid slot 0: choose a slot between 1 and 5\n")]
    #[case::slot_too_high("2\n6\n1\n4\n", "[ERROR] Invalid slot 6: choose a slot between 1 and 5\n")]
    #[case::negative_hours("2\n1\n-3\n4\n", "[ERROR] Invalid hours parked: '-3'\n")]
    #[case::bad_slot_number("2\nfirst\n4\n", "[ERROR] Invalid slot number: 'first'\n")]
    fn test_remove_errors(#[case] script: &str, #[case] expected: &str) {
        let (output, history, allocator) = run_script(&format!("1\n1234\n4\n{}", script));

        assert!(output.contains(expected), "output was:\n{}", output);
        assert!(history.is_empty());
        assert_eq!(allocator.occupied_count(), 1);
    }

    #[test]
    fn test_remove_with_failing_log_still_frees_slot() {
        let mut output = Vec::new();
        let script = "1\n1234\n2\n2\n1\n1\nno\n4\n";
        let mut session = Session::new(
            SlotAllocator::new(),
            FailingSink,
            script.as_bytes(),
            &mut output,
        );

        session.run().unwrap();
        assert_eq!(session.allocator().occupied_count(), 0);
        let allocator = session.into_allocator();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("Charge: Rs. 5\n"));
        assert!(output.contains("[ERROR] Could not write to history.csv: Permission denied."));
        assert!(output.ends_with("Exiting system.\n"));
        assert!(allocator.describe_slots()[0].status.is_empty());
    }

    #[test]
    fn test_display_slots() {
        let (output, _, _) = run_script("1\n123\n2\n1\nKA 01 B 1234\n4\n3\n4\n");

        assert!(output.contains(
            "Parking Slot Status:\n\
             Slot 1: 2-Wheeler - 123\n\
             Slot 2: 4-Wheeler - KA 01 B 1234\n\
             Slot 3: Empty\n\
             Slot 4: Empty\n\
             Slot 5: Empty\n"
        ));
    }

    #[test]
    fn test_invalid_menu_option_reprompts() {
        let (output, _, _) = run_script("9\nabc\n4\n");

        assert_eq!(output.matches("[ERROR] Invalid option. Try again.\n").count(), 2);
        assert_eq!(output.matches("=== ParkEase Menu ===").count(), 3);
        assert!(output.ends_with("Exiting system.\n"));
    }
}
