//! Schedule command - list the periodic background jobs.

use std::time::Duration;

use crate::config::Config;
use crate::errors::ConfigResult;

/// Print the periodic job table in name order.
pub fn execute(config: Config) -> ConfigResult<()> {
    for (name, entry) in config.task_queue.schedule.iter() {
        let args = if entry.args.is_empty() {
            String::new()
        } else {
            format!(" args=[{}]", entry.args.join(", "))
        };
        println!(
            "{name}: {task} every {period}{args}",
            task = entry.task,
            period = format_period(entry.every),
        );
    }
    Ok(())
}

/// Render a period in the largest unit that divides it evenly.
fn format_period(period: Duration) -> String {
    let secs = period.as_secs();
    if secs >= 86_400 && secs % 86_400 == 0 {
        format!("{}d", secs / 86_400)
    } else if secs >= 3_600 && secs % 3_600 == 0 {
        format!("{}h", secs / 3_600)
    } else if secs >= 60 && secs % 60 == 0 {
        format!("{}m", secs / 60)
    } else {
        format!("{secs}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_period() {
        assert_eq!(format_period(Duration::from_secs(300)), "5m");
        assert_eq!(format_period(Duration::from_secs(86_400)), "1d");
        assert_eq!(format_period(Duration::from_secs(7_200)), "2h");
        assert_eq!(format_period(Duration::from_secs(90)), "90s");
        assert_eq!(format_period(Duration::from_secs(0)), "0s");
    }
}
