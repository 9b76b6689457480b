//! Output seam for the narration collaborator.

/// Consumes the ordered announcement fragments. The shipped implementation
/// logs them; a hardware build would hand them to a speech synthesizer and
/// blink whatever it likes.
pub trait Announcer {
    fn announce(&mut self, parts: &[String]);
}

/// Writes each non-empty fragment to the log.
#[derive(Debug, Default)]
pub struct LogAnnouncer;

impl Announcer for LogAnnouncer {
    fn announce(&mut self, parts: &[String]) {
        for part in parts {
            if !part.is_empty() {
                tracing::info!("---> \"{}\"", part);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collects fragments instead of logging, for loop tests.
    #[derive(Debug, Default)]
    pub struct RecordingAnnouncer {
        pub announcements: Vec<Vec<String>>,
    }

    impl Announcer for RecordingAnnouncer {
        fn announce(&mut self, parts: &[String]) {
            self.announcements.push(parts.to_vec());
        }
    }

    #[test]
    fn recording_announcer_keeps_order() {
        let mut announcer = RecordingAnnouncer::default();
        announcer.announce(&["a".to_string(), String::new(), "b".to_string()]);
        assert_eq!(announcer.announcements.len(), 1);
        assert_eq!(announcer.announcements[0].len(), 3);
    }
}
