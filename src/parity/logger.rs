use std::time::SystemTime;

const COLOR_INFO: &str = "\x1b[38;2;90;160;100m";
const COLOR_WARN: &str = "\x1b[38;2;242;165;0m";
const COLOR_TRACE: &str = "\x1b[38;2;242;165;0m";
const COLOR_ERROR: &str = "\x1b[38;2;215;80;110m";
const COLOR_SUBJECT: &str = "\x1b[38;2;118;101;149m";
const COLOR_RESET: &str = "\x1b[0m";

/// Colored, timestamped lines for people reading the CLI output.
/// Structured diagnostics go through `tracing` instead.
pub struct CheckLogger;

impl CheckLogger {
    pub fn info(msg: &str) {
        println!("{}", Self::line(COLOR_INFO, "INFO ", None, msg));
    }

    pub fn info_file(subject: &str, msg: &str) {
        println!("{}", Self::line(COLOR_INFO, "INFO ", Some(subject), msg));
    }

    pub fn step(msg: &str) {
        println!("{}", Self::line(COLOR_TRACE, "TRACE", None, msg));
    }

    pub fn warn(msg: &str) {
        println!("{}", Self::line(COLOR_WARN, "WARN ", None, msg));
    }

    pub fn warn_file(subject: &str, msg: &str) {
        println!("{}", Self::line(COLOR_WARN, "WARN ", Some(subject), msg));
    }

    pub fn error(msg: &str) {
        eprintln!("{}", Self::line(COLOR_ERROR, "ERROR", None, msg));
    }

    fn line(color: &str, level: &str, subject: Option<&str>, msg: &str) -> String {
        match subject {
            Some(subject) => format!(
                "{}  {}{}{}  {}{}{} {}",
                Self::timestamp(),
                color,
                level,
                COLOR_RESET,
                COLOR_SUBJECT,
                subject,
                COLOR_RESET,
                msg
            ),
            None => format!(
                "{}  {}{}{}  {}",
                Self::timestamp(),
                color,
                level,
                COLOR_RESET,
                msg
            ),
        }
    }

    fn timestamp() -> String {
        let now = SystemTime::now();
        let datetime: chrono::DateTime<chrono::Local> = now.into();
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
