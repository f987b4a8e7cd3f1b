//! Request Sequencing
//!
//! Latest-wins guard for refetching views: only the response to the most
//! recently issued request may be applied.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    /// Issue a new request id; every earlier id becomes stale
    pub fn issue(&mut self) -> u64 {
        self.latest = self.latest.saturating_add(1);
        self.latest
    }

    pub fn is_current(&self, id: u64) -> bool {
        self.latest == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_late_response_of_older_request_is_stale() {
        let mut seq = RequestSeq::default();
        let video_tab = seq.issue();
        let pdf_tab = seq.issue();
        // pdf answers first, video answers last
        assert!(seq.is_current(pdf_tab));
        assert!(!seq.is_current(video_tab));
    }

    #[test]
    fn test_single_request_is_current() {
        let mut seq = RequestSeq::default();
        let id = seq.issue();
        assert!(seq.is_current(id));
        assert!(!seq.is_current(0));
    }
}
