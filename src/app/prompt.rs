use crate::core::districts::ValidDistrictSet;
use crate::core::parser::parse_timestamp;
use crate::domain::ports::RunLog;
use crate::utils::error::{DeliveryError, Result};
use chrono::NaiveDateTime;
use std::io::{BufRead, Write};

const TIME_FORMAT_HINT: &str = "yyyy-MM-dd HH:mm:ss";

/// Operator prompts. Each one repeats until the answer is valid and blocks
/// on the input stream while waiting.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, message: &str) -> Result<String> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;

        // undecodable bytes become U+FFFD and fail validation like any typo
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(DeliveryError::InputClosed {
                prompt: message.to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&buf).trim().to_string())
    }

    pub fn prompt_district(
        &mut self,
        districts: &ValidDistrictSet,
        log: &dyn RunLog,
    ) -> Result<String> {
        if districts.is_empty() {
            tracing::warn!("No districts were loaded, no district can be accepted");
        }

        loop {
            let district = self.ask("Enter the district to filter by:")?;
            if districts.contains(&district) {
                return Ok(district);
            }

            log.log(&format!("Invalid district: {}", district));
            writeln!(
                self.output,
                "Unknown district. Please enter one of the following districts:"
            )?;
            writeln!(self.output, "{}", districts)?;
        }
    }

    pub fn prompt_start_time(&mut self) -> Result<NaiveDateTime> {
        self.prompt_timestamp(&format!(
            "Enter the filter start time in the format '{}':",
            TIME_FORMAT_HINT
        ))
    }

    pub fn prompt_end_time(&mut self) -> Result<NaiveDateTime> {
        self.prompt_timestamp(&format!(
            "Enter the filter end time in the format '{}':",
            TIME_FORMAT_HINT
        ))
    }

    fn prompt_timestamp(&mut self, message: &str) -> Result<NaiveDateTime> {
        loop {
            let input = self.ask(message)?;
            if let Some(time) = parse_timestamp(&input) {
                return Ok(time);
            }
            writeln!(
                self.output,
                "Invalid time format. Use the format '{}'.",
                TIME_FORMAT_HINT
            )?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Order;
    use crate::utils::logger::MemoryRunLog;
    use std::io::Cursor;

    fn districts(names: &[&str]) -> ValidDistrictSet {
        let time = parse_timestamp("2024-03-01 10:00:00").unwrap();
        let orders: Vec<Order> = names
            .iter()
            .enumerate()
            .map(|(i, name)| Order::new(i as i32, 1.0, *name, time))
            .collect();
        ValidDistrictSet::from_orders(&orders)
    }

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_district_retries_until_valid() {
        let log = MemoryRunLog::new();
        let set = districts(&["Center", "North"]);
        let mut prompter = prompter("Nowhere\n  center  \n");

        let district = prompter.prompt_district(&set, &log).unwrap();
        assert_eq!(district, "center");

        assert_eq!(log.messages(), vec!["Invalid district: Nowhere".to_string()]);
        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert!(output.contains("Unknown district"));
        assert!(output.contains("Center, North"));
    }

    #[test]
    fn test_district_retries_after_invalid_utf8_line() {
        let log = MemoryRunLog::new();
        let set = districts(&["Center"]);
        let mut prompter = Prompter::new(
            Cursor::new(b"Cen\xfftre\nCenter\n".to_vec()),
            Vec::new(),
        );

        let district = prompter.prompt_district(&set, &log).unwrap();

        assert_eq!(district, "Center");
        assert_eq!(log.count_containing("Invalid district: Cen\u{FFFD}tre"), 1);
    }

    #[test]
    fn test_time_rejects_loose_forms() {
        let mut prompter =
            prompter("2024-3-1 9:5:7\n2024-03-01  10:00:00\n2024-03-01 10:00:60\n2024-03-01 10:00:59\n");

        let time = prompter.prompt_end_time().unwrap();
        assert_eq!(time, parse_timestamp("2024-03-01 10:00:59").unwrap());

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(output.matches("Invalid time format").count(), 3);
    }

    #[test]
    fn test_time_retries_until_second_precision() {
        let mut prompter = prompter("2024-03-01 10:00\n01/03/2024\n 2024-03-01 10:00:00 \n");

        let time = prompter.prompt_start_time().unwrap();
        assert_eq!(time, parse_timestamp("2024-03-01 10:00:00").unwrap());

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(output.matches("Invalid time format").count(), 2);
    }

    #[test]
    fn test_end_before_start_is_accepted() {
        let mut prompter = prompter("2024-03-01 12:00:00\n2024-03-01 08:00:00\n");

        let start = prompter.prompt_start_time().unwrap();
        let end = prompter.prompt_end_time().unwrap();
        assert!(start > end);
    }

    #[test]
    fn test_closed_input_stops_prompt() {
        let log = MemoryRunLog::new();
        let set = districts(&["Center"]);
        let mut prompter = prompter("North\n");

        let err = prompter.prompt_district(&set, &log).unwrap_err();
        assert!(matches!(err, DeliveryError::InputClosed { .. }));
        assert_eq!(log.count_containing("Invalid district"), 1);
    }

    #[test]
    fn test_empty_district_set_rejects_everything() {
        let log = MemoryRunLog::new();
        let set = ValidDistrictSet::default();
        let mut prompter = prompter("Center\n\n");

        assert!(prompter.prompt_district(&set, &log).is_err());
        assert_eq!(log.count_containing("Invalid district"), 2);
    }
}
