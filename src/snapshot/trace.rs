use std::collections::VecDeque;

/// Append-only trail of short messages, capped at a fixed number of entries.
/// Once the cap is hit the oldest entry is dropped for each new one.
#[derive(Debug, Clone)]
pub struct TraceLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl TraceLog {
    pub fn new(capacity: usize) -> Self {
        TraceLog {
            entries: VecDeque::with_capacity(capacity.min(256)),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry.into());
    }

    /// The last `n` entries, oldest first
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &str> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for TraceLog {
    fn default() -> Self {
        Self::new(200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_past_capacity() {
        let mut log = TraceLog::new(3);
        for i in 0..5 {
            log.push(format!("entry {}", i));
        }
        assert_eq!(log.len(), 3);
        let all: Vec<&str> = log.iter().collect();
        assert_eq!(all, vec!["entry 2", "entry 3", "entry 4"]);
    }

    #[test]
    fn recent_window_is_tail() {
        let mut log = TraceLog::new(200);
        for i in 0..10 {
            log.push(i.to_string());
        }
        let tail: Vec<&str> = log.recent(8).collect();
        assert_eq!(tail.first(), Some(&"2"));
        assert_eq!(tail.last(), Some(&"9"));
        assert_eq!(log.recent(50).count(), 10);
    }
}
