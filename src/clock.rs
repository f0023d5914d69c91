use chrono::Local;

/// Source of the trailer timestamp
pub trait DateSource {
    /// Current time formatted per RFC 2822, e.g. `Mon, 19 Oct 2026 10:00:00 +0200`
    fn rfc2822_now(&self) -> String;
}

/// Local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl DateSource for SystemClock {
    fn rfc2822_now(&self) -> String {
        Local::now().to_rfc2822()
    }
}

/// Always reports the same timestamp
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl DateSource for FixedClock {
    fn rfc2822_now(&self) -> String {
        self.0.clone()
    }
}
